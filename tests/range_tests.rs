use chart_scale::core::{
    AxisDimension, HighLow, RangeOptions, SeriesValue, find_range, find_series_range,
};

#[test]
fn all_zero_data_widens_upwards() {
    let range = find_range(&[0.0, 0.0, 0.0], &RangeOptions::default());
    assert_eq!(range, HighLow::new(1.0, 0.0));
}

#[test]
fn equal_negative_data_raises_high_to_zero() {
    let range = find_range(&[-5.0, -5.0], &RangeOptions::default());
    assert_eq!(range, HighLow::new(0.0, -5.0));
}

#[test]
fn equal_positive_data_lowers_low_to_zero() {
    let range = find_range(&[5.0, 5.0], &RangeOptions::default());
    assert_eq!(range, HighLow::new(5.0, 0.0));
}

#[test]
fn empty_data_falls_back_to_unit_range() {
    let range = find_range(&[], &RangeOptions::default());
    assert_eq!(range, HighLow::new(1.0, 0.0));
}

#[test]
fn reference_value_is_always_inside_range() {
    let options = RangeOptions::default().with_reference_value(0.0);
    let range = find_range(&[1.0, 2.0, 3.0], &options);
    assert_eq!(range, HighLow::new(3.0, 0.0));

    let range = find_range(&[-7.0, -2.0], &options);
    assert_eq!(range, HighLow::new(0.0, -7.0));
}

#[test]
fn explicit_bounds_skip_the_scan() {
    let options = RangeOptions::default().with_high(10.0).with_low(0.0);
    let range = find_range(&[100.0, -100.0], &options);
    assert_eq!(range, HighLow::new(10.0, 0.0));
}

#[test]
fn single_explicit_bound_is_combined_with_scanned_one() {
    let options = RangeOptions::default().with_high(10.0);
    let range = find_range(&[1.0, 5.0, -3.0], &options);
    assert_eq!(range, HighLow::new(10.0, -3.0));
}

#[test]
fn reference_value_overrides_explicit_bounds() {
    let options = RangeOptions::default()
        .with_high(10.0)
        .with_low(2.0)
        .with_reference_value(0.0);
    let range = find_range(&[], &options);
    assert_eq!(range, HighLow::new(10.0, 0.0));
}

#[test]
fn inverted_explicit_bounds_are_corrected() {
    let options = RangeOptions::default().with_high(2.0).with_low(5.0);
    let range = find_range(&[], &options);
    assert_eq!(range, HighLow::new(2.0, 0.0));
}

#[test]
fn non_finite_values_are_holes() {
    let range = find_range(
        &[f64::NAN, 2.0, f64::INFINITY, 4.0, f64::NEG_INFINITY],
        &RangeOptions::default(),
    );
    assert_eq!(range, HighLow::new(4.0, 2.0));
}

#[test]
fn repeated_lookup_is_identical() {
    let values = [3.5, -1.25, 8.0];
    let options = RangeOptions::default().with_reference_value(0.0);
    assert_eq!(find_range(&values, &options), find_range(&values, &options));
}

#[test]
fn json_series_are_scanned_per_dimension() {
    let series: Vec<SeriesValue> = serde_json::from_str(
        r#"[
            [1, "2", null, {"value": 7}],
            {"data": [{"x": 1, "y": -4}, {"x": 3, "y": 9}]},
            "not a number"
        ]"#,
    )
    .expect("series json");

    let y = find_series_range(&series, Some(AxisDimension::Y), &RangeOptions::default());
    assert_eq!(y, HighLow::new(9.0, -4.0));

    let x = find_series_range(&series, Some(AxisDimension::X), &RangeOptions::default());
    assert_eq!(x, HighLow::new(3.0, 1.0));
}

#[test]
fn json_ingestion_resolves_wire_shapes_once() {
    let series: Vec<SeriesValue> =
        serde_json::from_str(r#"[[1.5, null, "x", {"x": 2}]]"#).expect("series json");

    assert_eq!(
        series,
        vec![SeriesValue::Series(vec![
            SeriesValue::Scalar(1.5),
            SeriesValue::Missing,
            SeriesValue::Missing,
            SeriesValue::Point {
                x: Some(2.0),
                y: None
            },
        ])]
    );
}

#[test]
fn dimensionless_scan_reads_bare_numbers_only() {
    let series = vec![
        SeriesValue::series_of(&[4.0, 6.0]),
        SeriesValue::Series(vec![SeriesValue::point(100.0, 200.0)]),
    ];
    let range = find_series_range(&series, None, &RangeOptions::default());
    assert_eq!(range, HighLow::new(6.0, 4.0));
}
