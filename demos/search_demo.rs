//! Sorting followed by searching, with index handles.
//!
//! Run with: RUST_LOG=opchain=debug cargo run --example search_demo

use anyhow::Result;
use opchain::testing::sample_users;
use opchain::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🔎 Search Example\n");

    let (mut p, found) = Pipeline::from_vec(vec![64, 34, 25, 12, 22, 11, 90])
        .quick_sort(|a, b| a < b)
        .binary_search_tracked(|x| *x >= 25);
    let sorted = p.execute()?;
    println!("Sorted: {sorted:?}");
    println!("First element >= 25 is at index {:?}", found.get());

    let (mut p, found) =
        Pipeline::from_vec(sorted).binary_search_exact_tracked(34, |a, b| a < b);
    p.execute()?;
    println!("Exact 34 at index {:?}", found.get());

    let (mut p, found) = Pipeline::from_vec(sample_users())
        .merge_sort(|a, b| a.id < b.id)
        .binary_search_tracked(|u| u.id >= 5);
    let users = p.execute()?;
    if let Some(idx) = found.get() {
        println!("User with id 5: {}", users[idx].username);
    }

    // a miss surfaces as an error, not an empty result
    match Pipeline::from_vec(users)
        .linear_search(|u| u.role == "owner")
        .execute()
    {
        Ok(_) => println!("Found an owner"),
        Err(err) if err.is_not_found() => println!("No owner: {err}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
