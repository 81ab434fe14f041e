use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::HighLow;
use crate::error::{ChartError, ChartResult};

/// Smallest step the tick loop accepts, slightly above `f64::EPSILON`.
pub const EPSILON: f64 = 2.221e-16;
/// Decimal digits tick values are rounded to before they are emitted.
pub const DEFAULT_PRECISION: i32 = 8;
/// Upper bound on step doublings/halvings per computation.
pub const STEP_ITERATION_LIMIT: usize = 1000;
/// 2^53, above which every `f64` is an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Snapped axis range and the tick values derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub high: f64,
    pub low: f64,
    pub value_range: f64,
    pub order_of_magnitude: i32,
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub number_of_steps: usize,
    pub values: Vec<f64>,
}

/// Computes a human-readable tick layout for `high_low` on an axis that is
/// `axis_length` pixels long.
///
/// The starting step is the power of ten matching the value range. It is then
/// doubled until adjacent ticks are more than `min_tick_spacing` apart, or
/// halved while they stay at least that far apart. With `integer_only` the
/// step never becomes fractional; a unit step or the smallest factor of the
/// snapped range is preferred when either is wide enough.
pub fn compute_bounds(
    axis_length: f64,
    high_low: HighLow,
    min_tick_spacing: f64,
    integer_only: bool,
) -> ChartResult<Bounds> {
    if !axis_length.is_finite() || axis_length <= 0.0 {
        return Err(ChartError::InvalidGeometry { axis_length });
    }
    if min_tick_spacing.is_nan() || min_tick_spacing < 0.0 {
        return Err(ChartError::InvalidData(
            "minimum tick spacing must be >= 0".to_owned(),
        ));
    }

    let HighLow { high, low } = high_low;
    let value_range = high - low;
    if !high.is_finite() || !low.is_finite() || !value_range.is_finite() || value_range <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "bounds range must be finite and > 0 (high={high}, low={low})"
        )));
    }

    let order_of_magnitude = order_of_magnitude(value_range);
    // Integer axes never start from a fractional step.
    let initial_magnitude = if integer_only {
        order_of_magnitude.max(0)
    } else {
        order_of_magnitude
    };
    let initial_step = 10_f64.powi(initial_magnitude);
    let mut snapped_min = (low / initial_step).floor() * initial_step;
    let mut snapped_max = (high / initial_step).ceil() * initial_step;
    // Quotient rounding can land inside the raw range.
    while snapped_min > low {
        snapped_min = safe_increment(snapped_min, -initial_step);
    }
    while snapped_max < high {
        snapped_max = safe_increment(snapped_max, initial_step);
    }
    let snapped_range = snapped_max - snapped_min;

    let project = |length: f64| project_length(axis_length, length, snapped_range);
    let scale_up = project(initial_step) < min_tick_spacing;

    let step = if integer_only && project(1.0) >= min_tick_spacing {
        1.0
    } else if let Some(factor) = integer_only
        .then(|| smallest_factor(snapped_range))
        .flatten()
        .filter(|&factor| factor < initial_step && project(factor) >= min_tick_spacing)
    {
        factor
    } else {
        optimize_step(
            initial_step,
            scale_up,
            integer_only,
            min_tick_spacing,
            project,
        )?
    };
    let step = step.max(EPSILON);

    // Advance only while the candidate itself stays outside the raw range;
    // below the ulp of the bounds `safe_increment` moves further than `step`.
    let mut min = snapped_min;
    loop {
        let next = safe_increment(min, step);
        if next > low {
            break;
        }
        min = next;
    }
    let mut max = snapped_max;
    loop {
        let next = safe_increment(max, -step);
        if next < high {
            break;
        }
        max = next;
    }
    let range = max - min;
    let number_of_steps = (range / step).round() as usize;

    let mut values: Vec<f64> = Vec::with_capacity(number_of_steps.saturating_add(1).min(4096));
    let mut cursor = min;
    while cursor <= max {
        let value = round_with_precision(cursor, DEFAULT_PRECISION);
        if values.last() != Some(&value) {
            values.push(value);
        }
        cursor = safe_increment(cursor, step);
    }

    debug!(
        high,
        low,
        step,
        min,
        max,
        ticks = values.len(),
        "computed axis bounds"
    );

    Ok(Bounds {
        high,
        low,
        value_range,
        order_of_magnitude,
        step,
        min,
        max,
        range,
        number_of_steps,
        values,
    })
}

/// `floor(log10(|value|))`.
#[must_use]
pub fn order_of_magnitude(value: f64) -> i32 {
    value.abs().log10().floor() as i32
}

/// Pixel length of `length` value units on an axis spanning `range` units.
#[must_use]
pub fn project_length(axis_length: f64, length: f64, range: f64) -> f64 {
    length / range * axis_length
}

/// Rounds half-up to `digits` decimal places.
///
/// Values too large to carry `digits` fractional digits are returned as is.
#[must_use]
pub fn round_with_precision(value: f64, digits: i32) -> f64 {
    let precision = 10_f64.powi(digits);
    let scaled = value * precision;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        return value;
    }
    (scaled + 0.5).floor() / precision
}

/// Adds `increment`, nudging by a relative epsilon when the sum would not
/// change `value` so loops over tiny steps always advance.
#[must_use]
pub fn safe_increment(value: f64, increment: f64) -> f64 {
    let next = value + increment;
    if next != value {
        return next;
    }
    let direction = increment.signum() * value.signum();
    value * (1.0 + direction * EPSILON)
}

fn optimize_step(
    mut step: f64,
    scale_up: bool,
    integer_only: bool,
    min_tick_spacing: f64,
    project: impl Fn(f64) -> f64,
) -> ChartResult<f64> {
    let mut iterations = 0_usize;
    loop {
        if scale_up && project(step) <= min_tick_spacing {
            step *= 2.0;
        } else if !scale_up && project(step / 2.0) >= min_tick_spacing {
            step /= 2.0;
            if integer_only && step.fract() != 0.0 {
                step *= 2.0;
                break;
            }
        } else {
            break;
        }

        iterations += 1;
        trace!(iterations, step, scale_up, "optimizing scale step");
        if iterations > STEP_ITERATION_LIMIT {
            warn!(
                step,
                min_tick_spacing, "scale step optimization did not converge"
            );
            return Err(ChartError::IterationLimitExceeded {
                iterations: STEP_ITERATION_LIMIT,
            });
        }
    }
    Ok(step)
}

/// Non-trivial factor of an integral `range`, `None` when `range` is not a
/// positive integer that fits the exact `f64` integer range.
fn smallest_factor(range: f64) -> Option<f64> {
    if !range.is_finite() || range < 1.0 || range.fract() != 0.0 || range > MAX_EXACT_INTEGER {
        return None;
    }
    Some(rho(range as u64) as f64)
}

/// Pollard's rho with Floyd cycle detection. Returns `num` itself for primes
/// and whenever the walk collides before exposing a proper divisor.
fn rho(num: u64) -> u64 {
    if num == 1 {
        return 1;
    }
    if num % 2 == 0 {
        return 2;
    }

    let modulus = u128::from(num);
    let next = |x: u64| ((u128::from(x) * u128::from(x) + 1) % modulus) as u64;
    let mut slow = 2_u64;
    let mut fast = 2_u64;
    loop {
        slow = next(slow);
        fast = next(next(fast));
        let divisor = gcd(slow.abs_diff(fast), num);
        if divisor != 1 {
            return divisor;
        }
    }
}

fn gcd(mut p: u64, mut q: u64) -> u64 {
    while q != 0 {
        (p, q) = (q, p % q);
    }
    p
}
