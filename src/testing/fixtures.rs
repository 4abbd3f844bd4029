//! Small ready-made record sets for pipeline tests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// A generic record with an id, a display name and an active flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub active: bool,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub role: String,
    pub active: bool,
}

/// An order placed by a user. `amount` is in currency units, so it is `f64` and the type
/// only implements [`PartialEq`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub user_id: u32,
    pub amount: f64,
    pub status: String,
    pub category: String,
}

fn item(id: u32, name: &str, active: bool) -> Item {
    Item {
        id,
        name: name.to_string(),
        active,
    }
}

fn user(id: u32, username: &str, role: &str, active: bool) -> User {
    User {
        id,
        username: username.to_string(),
        role: role.to_string(),
        active,
    }
}

fn order(id: u32, user_id: u32, amount: f64, status: &str, category: &str) -> Order {
    Order {
        id,
        user_id,
        amount,
        status: status.to_string(),
        category: category.to_string(),
    }
}

/// Five items, three active, with ids out of order.
///
/// ```
/// use opchain::testing::sample_items;
///
/// assert_eq!(sample_items().iter().filter(|i| i.active).count(), 3);
/// ```
#[must_use]
pub fn sample_items() -> Vec<Item> {
    vec![
        item(3, "gamma", true),
        item(1, "alpha", true),
        item(4, "delta", false),
        item(2, "beta", false),
        item(5, "epsilon", true),
    ]
}

/// Five users across the `admin`, `editor` and `viewer` roles; `dave` is inactive.
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![
        user(5, "alice", "admin", true),
        user(2, "bob", "viewer", true),
        user(8, "carol", "editor", true),
        user(1, "dave", "viewer", false),
        user(4, "erin", "admin", true),
    ]
}

/// Five orders over two categories; four are `completed` and one is `pending`.
///
/// ```
/// use opchain::testing::sample_orders;
///
/// let total: f64 = sample_orders().iter().map(|o| o.amount).sum();
/// assert!((total - 281.74).abs() < 1e-9);
/// ```
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    vec![
        order(1, 1, 100.50, "completed", "Electronics"),
        order(2, 2, 25.99, "pending", "Books"),
        order(3, 1, 75.00, "completed", "Electronics"),
        order(4, 3, 50.25, "completed", "Books"),
        order(5, 2, 30.00, "completed", "Electronics"),
    ]
}

/// `0..len` in a shuffled order fully determined by `seed`.
///
/// ```
/// use opchain::testing::shuffled_range;
///
/// let mut v = shuffled_range(100, 7);
/// assert_eq!(v, shuffled_range(100, 7));
/// v.sort_unstable();
/// assert_eq!(v, (0..100).collect::<Vec<_>>());
/// ```
#[must_use]
pub fn shuffled_range(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..len as i64).collect();
    values.shuffle(&mut rng);
    values
}
