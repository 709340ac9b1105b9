use vizframe::core::{DataSet, Record};

#[test]
fn replace_sorts_by_group_then_series() {
    let dataset = DataSet::from_records(vec![
        Record::new("2024-02", "B", 4.0),
        Record::new("2024-01", "B", 2.0),
        Record::new("2024-02", "A", 3.0),
        Record::new("2024-01", "A", 1.0),
    ]);

    let records = dataset.records();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], Record::new("2024-01", "A", 1.0));
    assert_eq!(records[1], Record::new("2024-01", "B", 2.0));
    assert_eq!(records[2], Record::new("2024-02", "A", 3.0));
    assert_eq!(records[3], Record::new("2024-02", "B", 4.0));
}

#[test]
fn replace_deduplicates_group_series_pairs_last_write_wins() {
    let dataset = DataSet::from_records(vec![
        Record::new("2024-01", "A", 10.0),
        Record::new("2024-01", "A", 25.0),
        Record::new("2024-01", "B", 20.0),
    ]);

    let records = dataset.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], Record::new("2024-01", "A", 25.0));
    assert_eq!(records[1], Record::new("2024-01", "B", 20.0));
}

#[test]
fn replace_filters_invalid_records() {
    let dataset = DataSet::from_records(vec![
        Record::new("2024-01", "A", f64::NAN),
        Record::new("2024-01", "B", f64::INFINITY),
        Record::new("", "C", 10.0),
        Record::new("2024-01", "", 10.0),
        Record::new("2024-01", "D", 42.0),
    ]);

    let records = dataset.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], Record::new("2024-01", "D", 42.0));
}

#[test]
fn replace_discards_previous_records_wholesale() {
    let mut dataset = DataSet::from_records(vec![
        Record::new("2024-01", "A", 1.0),
        Record::new("2024-02", "A", 2.0),
    ]);

    dataset.replace(vec![Record::new("2030", "Z", 9.0)]);

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0], Record::new("2030", "Z", 9.0));
}

#[test]
fn groups_are_distinct_and_sorted() {
    let dataset = DataSet::from_records(vec![
        Record::new("2024-03", "A", 1.0),
        Record::new("2024-01", "A", 1.0),
        Record::new("2024-01", "B", 2.0),
        Record::new("2024-02", "A", 3.0),
    ]);

    assert_eq!(dataset.groups(), vec!["2024-01", "2024-02", "2024-03"]);
}

#[test]
fn series_are_distinct_and_sorted() {
    let dataset = DataSet::from_records(vec![
        Record::new("2024-01", "True Crime", 1.0),
        Record::new("2024-02", "Cozy Anime", 2.0),
        Record::new("2024-01", "Cozy Anime", 3.0),
        Record::new("2024-01", "DIY Shorts", 4.0),
    ]);

    assert_eq!(
        dataset.series(),
        vec!["Cozy Anime", "DIY Shorts", "True Crime"]
    );
}

#[test]
fn value_bounds_cover_the_whole_record_set() {
    let dataset = DataSet::from_records(vec![
        Record::new("2021", "CA", 300.0),
        Record::new("2021", "TX", 100.0),
        Record::new("2022", "CA", 500.0),
    ]);

    let bounds = dataset.value_bounds().expect("bounds for non-empty set");
    assert_eq!(bounds.min, 100.0);
    assert_eq!(bounds.max, 500.0);
}

#[test]
fn value_bounds_are_none_for_empty_set() {
    assert!(DataSet::new().value_bounds().is_none());
}
