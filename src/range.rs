//! Frame-index and stepped numeric range generation.

/// Inclusive integer range `[start, end]`.
///
/// Returns an empty vector when `start > end`, never an error.
pub fn number_array(start: i64, end: i64) -> Vec<i64> {
    (start..=end).collect()
}

/// Stepped numeric range.
///
/// Two call shapes are supported:
///
/// * `number_array_step(n, None, _)` treats `n` as an exclusive upper bound
///   with start 0 and step 1, so `number_array_step(4.0, None, None)` is
///   `[0.0, 1.0, 2.0, 3.0]`. Any supplied step is ignored in this shape.
/// * `number_array_step(start, Some(end), step)` walks from `start` toward
///   `end` in `step` increments, with `step` defaulting to 1.
///
/// The element count is `round((end - start) / step)` with ties rounded
/// away from zero, clamped at 0. A step of 0 counts as 1 in that division
/// but each emitted element is still incremented by the real step, so
/// `number_array_step(1.0, Some(4.0), Some(0.0))` is `[1.0, 1.0, 1.0]`.
/// NaN arguments degrade to 0 instead of poisoning the walk.
pub fn number_array_step(start: f64, end: Option<f64>, step: Option<f64>) -> Vec<f64> {
    let (start, end, step) = match end {
        None => (0.0, coerce(start), 1.0),
        Some(end) => (coerce(start), coerce(end), step.map_or(1.0, coerce)),
    };

    // The zero-step substitution applies to the length computation only.
    let divisor = if step == 0.0 { 1.0 } else { step };
    let length = ((end - start) / divisor).round().max(0.0) as usize;

    let mut values = Vec::with_capacity(length);
    let mut value = start;
    for _ in 0..length {
        values.push(value);
        value += step;
    }
    values
}

fn coerce(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
