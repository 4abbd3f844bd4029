//! Positional slicing with skip, take and page.
//!
//! Run with: cargo run --example pagination_demo

use anyhow::Result;
use opchain::*;
use tracing_subscriber::EnvFilter;

const PAGE_SIZE: usize = 4;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("📄 Pagination Example\n");

    let catalogue: Vec<u32> = (1..=10).collect();

    let window = Pipeline::from_vec(catalogue.clone())
        .skip(3)
        .take(4)
        .execute()?;
    println!("skip(3).take(4): {window:?}");

    let mut page = 0;
    loop {
        let items = Pipeline::from_vec(catalogue.clone())
            .page(page, PAGE_SIZE)
            .execute()?;
        if items.is_empty() {
            break;
        }
        println!("page {page}: {items:?}");
        page += 1;
    }

    let evens_page = Pipeline::from_vec(catalogue)
        .filter(|x| x % 2 == 0)
        .map(|x| x * 100)
        .page(1, 2)
        .execute()?;
    println!("second page of even items x100: {evens_page:?}");

    Ok(())
}
