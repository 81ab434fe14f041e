use approx::assert_relative_eq;
use chart_scale::ChartError;
use chart_scale::core::bounds::{STEP_ITERATION_LIMIT, order_of_magnitude};
use chart_scale::core::{HighLow, compute_bounds};

#[test]
fn mid_length_axis_snaps_to_twenty_unit_steps() {
    let bounds = compute_bounds(150.0, HighLow::new(97.0, 3.0), 20.0, false).expect("bounds");

    assert_eq!(bounds.step, 20.0);
    assert_eq!(bounds.min, 0.0);
    assert_eq!(bounds.max, 100.0);
    assert_eq!(bounds.range, 100.0);
    assert_eq!(bounds.number_of_steps, 5);
    assert_eq!(bounds.values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn long_axis_halves_step_down_to_minimum_spacing() {
    let bounds = compute_bounds(400.0, HighLow::new(97.0, 3.0), 20.0, false).expect("bounds");

    assert_eq!(bounds.value_range, 94.0);
    assert_eq!(bounds.order_of_magnitude, 1);
    assert_eq!(bounds.step, 5.0);
    assert_eq!(bounds.min, 0.0);
    assert_eq!(bounds.max, 100.0);
    assert_eq!(bounds.values.len(), 21);
    assert_eq!(bounds.values.first().copied(), Some(0.0));
    assert_eq!(bounds.values.last().copied(), Some(100.0));
}

#[test]
fn exact_power_of_ten_range_keeps_its_endpoints() {
    let bounds = compute_bounds(300.0, HighLow::new(100.0, 0.0), 20.0, false).expect("bounds");

    assert_eq!(bounds.order_of_magnitude, 2);
    assert_eq!(bounds.step, 12.5);
    assert_eq!(
        bounds.values,
        vec![0.0, 12.5, 25.0, 37.5, 50.0, 62.5, 75.0, 87.5, 100.0]
    );
}

#[test]
fn integer_axis_stops_halving_before_fractional_step() {
    let bounds = compute_bounds(300.0, HighLow::new(100.0, 0.0), 20.0, true).expect("bounds");

    assert_eq!(bounds.step, 25.0);
    assert_eq!(bounds.values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn integer_axis_prefers_unit_step_when_it_fits() {
    let bounds = compute_bounds(300.0, HighLow::new(3.0, 0.0), 20.0, true).expect("bounds");

    assert_eq!(bounds.step, 1.0);
    assert_eq!(bounds.values, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn integer_axis_uses_smallest_factor_of_range() {
    let bounds = compute_bounds(1000.0, HighLow::new(90.0, 0.0), 20.0, true).expect("bounds");

    assert_eq!(bounds.step, 2.0);
    assert_eq!(bounds.values.len(), 46);
    assert!(bounds.values.iter().all(|value| value.fract() == 0.0));
}

#[test]
fn integer_axis_over_sub_unit_range_still_emits_integers() {
    let bounds = compute_bounds(300.0, HighLow::new(0.5, 0.1), 20.0, true).expect("bounds");

    assert_eq!(bounds.step, 1.0);
    assert_eq!(bounds.values, vec![0.0, 1.0]);
    assert!(bounds.min <= 0.1);
    assert!(bounds.max >= 0.5);
}

#[test]
fn negative_range_snaps_outward_and_encloses_data() {
    let bounds = compute_bounds(150.0, HighLow::new(-3.0, -97.0), 20.0, false).expect("bounds");

    assert_eq!(bounds.step, 20.0);
    assert_eq!(bounds.min, -100.0);
    assert_eq!(bounds.values, vec![-100.0, -80.0, -60.0, -40.0, -20.0, 0.0]);
    assert!(bounds.min <= -97.0);
    assert!(bounds.max >= -3.0);
}

#[test]
fn narrowing_drops_ticks_outside_the_raw_range() {
    let bounds = compute_bounds(200.0, HighLow::new(5.0, -5.0), 20.0, false).expect("bounds");

    assert_eq!(bounds.step, 2.5);
    assert_eq!(bounds.min, -5.0);
    assert_eq!(bounds.max, 5.0);
    assert_eq!(bounds.range, 10.0);
    assert_eq!(bounds.values, vec![-5.0, -2.5, 0.0, 2.5, 5.0]);
}

#[test]
fn fractional_ranges_round_tick_values() {
    let bounds = compute_bounds(100.0, HighLow::new(0.3, 0.1), 20.0, false).expect("bounds");

    for value in &bounds.values {
        let scaled = value * 1e8;
        assert_relative_eq!(scaled, scaled.round(), epsilon = 1e-6);
    }
    assert!(bounds.values.windows(2).all(|pair| pair[0] < pair[1]));
}

fn next_representable(value: f64) -> f64 {
    let bits = value.to_bits();
    if value >= 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

#[test]
fn one_ulp_ranges_stay_enclosed_and_keep_ticks() {
    for base in [4.0, 1000.0, -1000.0] {
        for integer_only in [false, true] {
            let high_low = HighLow::new(next_representable(base), base);
            let bounds = compute_bounds(300.0, high_low, 20.0, integer_only).expect("bounds");

            assert!(bounds.min <= high_low.low, "min {} above low {base}", bounds.min);
            assert!(bounds.max >= high_low.high, "max {} below high {}", bounds.max, high_low.high);
            assert!(bounds.min < bounds.max);
            assert!(!bounds.values.is_empty());
            assert_relative_eq!(bounds.values[0], bounds.min, max_relative = 1e-12);
        }
    }
}

#[test]
fn huge_ranges_keep_finite_tick_values() {
    let high_low = HighLow::new(1.5e301, 1.0e301);
    let bounds = compute_bounds(300.0, high_low, 20.0, false).expect("bounds");

    assert!(!bounds.values.is_empty());
    assert!(bounds.values.iter().all(|value| value.is_finite()));
    assert_eq!(bounds.values[0], bounds.min);
    assert!(bounds.min <= high_low.low);
    assert!(bounds.max >= high_low.high);
}

#[test]
fn repeated_computation_is_bit_identical() {
    let first = compute_bounds(333.0, HighLow::new(12.7, -4.2), 24.0, false).expect("first");
    let second = compute_bounds(333.0, HighLow::new(12.7, -4.2), 24.0, false).expect("second");
    assert_eq!(first, second);
}

#[test]
fn non_positive_axis_length_is_invalid_geometry() {
    let result = compute_bounds(0.0, HighLow::new(1.0, 0.0), 20.0, false);
    assert!(matches!(
        result,
        Err(ChartError::InvalidGeometry { axis_length }) if axis_length == 0.0
    ));

    let result = compute_bounds(f64::NAN, HighLow::new(1.0, 0.0), 20.0, false);
    assert!(matches!(result, Err(ChartError::InvalidGeometry { .. })));
}

#[test]
fn zero_width_range_is_rejected() {
    let result = compute_bounds(300.0, HighLow::new(4.0, 4.0), 20.0, false);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn negative_spacing_is_rejected() {
    let result = compute_bounds(300.0, HighLow::new(4.0, 0.0), -1.0, false);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn zero_spacing_never_converges() {
    let result = compute_bounds(100.0, HighLow::new(10.0, 0.0), 0.0, false);
    assert!(matches!(
        result,
        Err(ChartError::IterationLimitExceeded { iterations }) if iterations == STEP_ITERATION_LIMIT
    ));
}

#[test]
fn unbounded_spacing_never_converges() {
    let result = compute_bounds(100.0, HighLow::new(10.0, 0.0), f64::INFINITY, false);
    assert!(matches!(
        result,
        Err(ChartError::IterationLimitExceeded { .. })
    ));
}

#[test]
fn order_of_magnitude_matches_decimal_exponent() {
    assert_eq!(order_of_magnitude(94.0), 1);
    assert_eq!(order_of_magnitude(100.0), 2);
    assert_eq!(order_of_magnitude(0.05), -2);
    assert_eq!(order_of_magnitude(-250.0), 2);
}
