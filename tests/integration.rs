//! End-to-end chains over the order fixtures.

use anyhow::Result;
use opchain::testing::*;
use opchain::*;

#[test]
fn top_completed_orders_per_category() -> Result<()> {
    let top = Pipeline::from_vec(sample_orders())
        .filter(|o| o.status == "completed")
        .distinct(|a, b| a.category == b.category)
        .quick_sort(|a, b| a.amount > b.amount)
        .take(2)
        .execute()?;

    let ids: Vec<_> = top.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 4]);
    assert_sorted_by(&top, |a, b| a.amount > b.amount);

    let grouped = group_by(top, |o| o.category.clone());
    assert_eq!(grouped.len(), 2);
    assert_all(&grouped, |g| g.len() == 1);
    Ok(())
}

#[test]
fn revenue_per_user_from_completed_orders() -> Result<()> {
    let completed = Pipeline::from_vec(sample_orders())
        .filter(|o| o.status == "completed")
        .merge_sort(|a, b| a.user_id < b.user_id)
        .execute()?;

    let totals: Vec<(u32, f64)> = group_by_sorted(completed, |o| o.user_id)
        .into_iter()
        .map(|g| (g.key, g.items.iter().map(|o| o.amount).sum()))
        .collect();

    assert_eq!(totals.len(), 3);
    assert_eq!(totals[0].0, 1);
    assert!((totals[0].1 - 175.50).abs() < 1e-9);
    assert!((totals[1].1 - 30.00).abs() < 1e-9);
    assert!((totals[2].1 - 50.25).abs() < 1e-9);
    Ok(())
}

#[test]
fn numeric_chain_with_every_stage_kind() -> Result<()> {
    let (mut p, found) = Pipeline::from_vec(shuffled_range(50, 4))
        .map(|x| x % 20)
        .distinct(|a, b| a == b)
        .filter(|x| x % 3 != 0)
        .heap_sort(|a, b| a < b)
        .linear_search(|x| *x == 10)
        .binary_search_tracked(|x| *x >= 11);
    let out = p.execute()?;

    assert_eq!(out, vec![1, 2, 4, 5, 7, 8, 10, 11, 13, 14, 16, 17, 19]);
    assert_eq!(found.get(), Some(7));
    assert_none(&out, |x| x % 3 == 0);

    p.set_data(out);
    let mut paged = Pipeline::from_vec(p.execute()?).page(1, 5).fold(0, |a, x| a + x);
    assert_eq!(paged.execute()?, vec![8 + 10 + 11 + 13 + 14]);
    Ok(())
}

#[test]
fn reduce_over_empty_selection_fails() {
    let selection = || {
        Pipeline::from_vec(sample_orders())
            .filter(|o| o.status == "refunded")
            .map(|o| Order {
                amount: o.amount * 2.0,
                ..o.clone()
            })
    };
    let err = selection()
        .reduce(|mut acc, o| {
            acc.amount += o.amount;
            acc
        })
        .execute()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
}
