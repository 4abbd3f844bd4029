use anyhow::Result;
use opchain::testing::*;
use opchain::*;

#[test]
fn filter_keeps_only_matches_in_order() -> Result<()> {
    let out = Pipeline::from_vec(vec![5, 2, 8, 1, 9, 4])
        .filter(|x| *x > 3)
        .execute()?;
    assert_all(&out, |x| *x > 3);
    assert_collections_equal(out, vec![5, 8, 9, 4]);
    Ok(())
}

#[test]
fn filter_identities() -> Result<()> {
    let input = shuffled_range(30, 8);
    let all = Pipeline::from_vec(input.clone()).filter(|_| true).execute()?;
    let none = Pipeline::from_vec(input.clone()).filter(|_| false).execute()?;
    assert_eq!(all, input);
    assert!(none.is_empty());
    Ok(())
}

#[test]
fn find_collects_every_match() -> Result<()> {
    let out = Pipeline::from_vec(sample_items())
        .find(|i| i.active)
        .execute()?;
    let names: Vec<_> = out.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["gamma", "alpha", "epsilon"]);

    let out = Pipeline::from_vec(sample_items()).find(|i| i.id > 100).execute()?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn map_preserves_length_and_composes() -> Result<()> {
    let input = vec![1, 2, 3, 4];
    let chained = Pipeline::from_vec(input.clone())
        .map(|x| x + 1)
        .map(|x| x * 3)
        .execute()?;
    let fused = Pipeline::from_vec(input).map(|x| (x + 1) * 3).execute()?;
    assert_eq!(chained.len(), 4);
    assert_eq!(chained, fused);
    Ok(())
}

#[test]
fn map_updates_records() -> Result<()> {
    let out = Pipeline::from_vec(sample_users())
        .map(|u| User {
            active: true,
            ..u.clone()
        })
        .execute()?;
    assert_all(&out, |u| u.active);
    Ok(())
}

#[test]
fn skip_then_take_selects_a_window() -> Result<()> {
    let out = Pipeline::from_vec((1..=10).collect::<Vec<i32>>())
        .skip(3)
        .take(4)
        .execute()?;
    assert_collections_equal(out, vec![4, 5, 6, 7]);
    Ok(())
}

#[test]
fn take_and_skip_partition_the_input() -> Result<()> {
    let input = shuffled_range(25, 2);
    for n in [0usize, 1, 12, 25, 40] {
        let mut head = Pipeline::from_vec(input.clone()).take(n).execute()?;
        let tail = Pipeline::from_vec(input.clone()).skip(n).execute()?;
        assert_eq!(head.len(), n.min(input.len()));
        head.extend(tail);
        assert_eq!(head, input, "n={n}");
    }
    Ok(())
}

#[test]
fn page_walks_fixed_size_windows() -> Result<()> {
    let input: Vec<i32> = (0..7).collect();
    let pages: Vec<Vec<i32>> = (0..4)
        .map(|page| Pipeline::from_vec(input.clone()).page(page, 3).execute())
        .collect::<opchain::Result<_>>()?;
    assert_eq!(pages, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6], vec![]]);
    Ok(())
}

#[test]
fn page_beyond_range_is_empty() -> Result<()> {
    let out = Pipeline::from_vec(vec![1, 2, 3])
        .page(usize::MAX, usize::MAX)
        .execute()?;
    assert!(out.is_empty());
    Ok(())
}
