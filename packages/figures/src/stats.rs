//! Aggregate helpers shared by the figure builders.

/// Arithmetic mean of an iterator of values.
///
/// Returns `None` for an empty input instead of the `0.0 / 0` NaN that
/// a naive sum-divide would produce; callers decide how an absent mean
/// renders (the trend builder substitutes a placeholder figure).
#[must_use]
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count: u32 = 0;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}
