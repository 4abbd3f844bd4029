use anyhow::Result;
use opchain::testing::*;
use opchain::*;

#[test]
fn keeps_first_occurrence_in_order() -> Result<()> {
    let out = Pipeline::from_vec(vec![1, 2, 2, 3, 3, 3])
        .distinct(|a, b| a == b)
        .execute()?;
    assert_collections_equal(out, vec![1, 2, 3]);

    let out = Pipeline::from_vec(vec![3, 1, 3, 2, 1])
        .distinct(|a, b| a == b)
        .execute()?;
    assert_collections_equal(out, vec![3, 1, 2]);
    Ok(())
}

#[test]
fn distinct_is_idempotent() -> Result<()> {
    let once = Pipeline::from_vec(shuffled_range(60, 5))
        .map(|x| x % 7)
        .distinct(|a, b| a == b)
        .execute()?;
    let twice = Pipeline::from_vec(once.clone())
        .distinct(|a, b| a == b)
        .execute()?;
    assert_eq!(once.len(), 7);
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn custom_equality_on_a_field() -> Result<()> {
    let out = Pipeline::from_vec(sample_orders())
        .distinct(|a, b| a.category == b.category)
        .execute()?;
    let ids: Vec<_> = out.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2]);
    Ok(())
}

#[test]
fn window_mode_admits_far_duplicates() -> Result<()> {
    let input = vec![1, 2, 3, 1];

    let full = Pipeline::from_vec(input.clone())
        .distinct_with_mode(|a, b| a == b, DistinctMode::FullScan)
        .execute()?;
    let windowed = Pipeline::from_vec(input)
        .distinct_with_mode(|a, b| a == b, DistinctMode::Window(2))
        .execute()?;

    assert_eq!(full, vec![1, 2, 3]);
    assert_eq!(windowed, vec![1, 2, 3, 1]);
    Ok(())
}

#[test]
fn window_mode_from_config() -> Result<()> {
    let config = PipelineConfig::from_json_str(r#"{ "distinct_mode": { "window": 1 } }"#)?;
    let mut p = Pipeline::with_config(config)
        .with_data(vec![5, 6, 5, 5])
        .distinct(|a, b| a == b);
    assert_eq!(p.operation(0).map(|op| op.name()), Some("distinct_windowed"));
    assert_eq!(p.execute()?, vec![5, 6, 5]);
    Ok(())
}

#[test]
fn empty_input_stays_empty() -> Result<()> {
    let out = Pipeline::<i32>::new().distinct(|a, b| a == b).execute()?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn window_mode_diverges_on_non_transitive_equality() -> Result<()> {
    // "within 2" is not transitive: 0 is near 1 but not near 4
    let near = |a: &i32, b: &i32| (a - b).abs() <= 2;
    let input = vec![1, 4, 0];

    let full = Pipeline::from_vec(input.clone())
        .distinct(near)
        .execute()?;
    let windowed = Pipeline::from_vec(input)
        .distinct_with_mode(near, DistinctMode::Window(1))
        .execute()?;

    assert_eq!(full, vec![1, 4]);
    assert_eq!(windowed, vec![1, 4, 0]);
    Ok(())
}
