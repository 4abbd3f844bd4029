//! Order analytics with a single chained pipeline.
//!
//! Demonstrates:
//! - Filtering records by status
//! - Keeping one order per category with custom equality
//! - Sorting descending by amount and taking the top entries
//! - Grouping the result outside the chain
//!
//! Run with: RUST_LOG=opchain=trace cargo run --example pipeline_demo

use anyhow::Result;
use opchain::testing::sample_orders;
use opchain::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("📦 Order Pipeline Example\n");

    let orders = sample_orders();
    println!("Input: {} orders", orders.len());

    let mut pipeline = Pipeline::from_vec(orders)
        .filter(|o| o.status == "completed")
        .distinct(|a, b| a.category == b.category)
        .quick_sort(|a, b| a.amount > b.amount)
        .take(2);

    let stages: Vec<_> = pipeline.operations().iter().map(|op| op.name()).collect();
    println!("Stages: {}", stages.join(" -> "));

    let top = pipeline.execute()?;
    println!("\nTop categories by highest completed order:");
    for o in &top {
        println!("  #{:<3} {:<12} {:>8.2}", o.id, o.category, o.amount);
    }

    println!("\nGrouped by category:");
    for group in group_by_sorted(top, |o| o.category.clone()) {
        let ids: Vec<_> = group.items.iter().map(|o| o.id).collect();
        println!("  {}: {ids:?}", group.key);
    }

    let total = Pipeline::from_vec(sample_orders())
        .filter(|o| o.status == "completed")
        .reduce(|mut acc, o| {
            acc.amount += o.amount;
            acc
        })
        .execute()?;
    if let Some(sum) = total.first() {
        println!("\nCompleted revenue: {:.2}", sum.amount);
    }

    Ok(())
}
