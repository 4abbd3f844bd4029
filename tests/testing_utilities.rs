use opchain::testing::*;
use opchain::*;

#[test]
fn builder_output_feeds_a_pipeline() -> anyhow::Result<()> {
    let input = TestDataBuilder::new()
        .add_range(1..=4)
        .add_repeated(2, 3)
        .add_value(0)
        .build();
    assert_eq!(input.len(), 8);

    let out = Pipeline::from_vec(input.clone())
        .distinct(|a, b| a == b)
        .execute()?;
    assert_collections_unordered_equal(out, vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[test]
fn fixtures_are_stable() {
    assert_eq!(sample_items().len(), 5);
    assert_eq!(sample_users().len(), 5);
    assert_eq!(sample_orders().len(), 5);
    assert_eq!(sample_items(), sample_items());
}

#[test]
#[should_panic(expected = "Collection length mismatch")]
fn collection_length_mismatch_panics() {
    assert_collections_equal(vec![1, 2], vec![1, 2, 3]);
}

#[test]
#[should_panic(expected = "Predicate failed")]
fn assert_all_reports_the_offender() {
    assert_all(&[2, 4, 5], |x| x % 2 == 0);
}

#[test]
#[should_panic(expected = "Predicate unexpectedly succeeded")]
fn assert_none_reports_the_offender() {
    assert_none(&[1, 3, 4], |x| x % 2 == 0);
}

#[test]
#[should_panic(expected = "Group missing for key")]
fn missing_group_is_reported() {
    assert_groups_unordered_equal(
        group_by(vec![1, 1], |x| *x),
        vec![GroupedResult {
            key: 2,
            items: vec![1, 1],
        }],
    );
}
