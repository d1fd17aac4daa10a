//! Numeric helpers

/// Linear interpolation between `start` and `end`
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * end
}

/// Restrict `value` to `[min, max]`.
///
/// Never panics: with `min > max` the result is `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
