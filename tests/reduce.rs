use anyhow::Result;
use opchain::testing::*;
use opchain::*;

#[test]
fn reduce_empty_input_fails() {
    let err = Pipeline::<i32>::new()
        .reduce(|acc, x| acc + x)
        .execute()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert!(matches!(err, PipelineError::EmptyInput { operation: "reduce" }));
    assert_eq!(err.to_string(), "reduce: requires at least one element");
}

#[test]
fn reduce_single_element_is_identity() -> Result<()> {
    let out = Pipeline::from_vec(vec![42]).reduce(|_, _| 0).execute()?;
    assert_eq!(out, vec![42]);
    Ok(())
}

#[test]
fn reduce_after_filter_sums_matches() -> Result<()> {
    let out = Pipeline::from_vec((1..=10).collect::<Vec<i32>>())
        .filter(|x| x % 2 == 0)
        .reduce(|acc, x| acc + x)
        .execute()?;
    assert_eq!(out, vec![30]);
    Ok(())
}

#[test]
fn reduce_picks_the_largest_order() -> Result<()> {
    let out = Pipeline::from_vec(sample_orders())
        .reduce(|best, o| if o.amount > best.amount { o.clone() } else { best })
        .execute()?;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 1);
    Ok(())
}

#[test]
fn fold_uses_initial_value_and_never_fails() -> Result<()> {
    let mut p = Pipeline::<i32>::new().fold(100, |acc, x| acc - x);
    assert_eq!(p.execute()?, vec![100]);

    p.set_data(vec![1, 2, 3]);
    assert_eq!(p.execute()?, vec![94]);
    Ok(())
}

#[test]
fn reduce_failure_skips_later_stages() {
    let err = Pipeline::from_vec(vec![1, 2, 3])
        .filter(|x| *x > 5)
        .reduce(|acc, x| acc + x)
        .map(|x| x * 2)
        .execute()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
}
