//! Numeric range refinement.

use crate::validator::Validator;
use crate::value::Value;

/// Accepts numbers within inclusive bounds.
///
/// The value must be kind-number, at least `min` when present, and at most
/// `max` when present. Both bounds are inclusive; omitting both accepts
/// every number. A reversed range (`min > max`) is not rejected at
/// construction; it simply yields a validator no value satisfies.
///
/// # Example
///
/// ```rust
/// use attest::{number_range, Value};
///
/// let percent = number_range(Some(0.0), Some(100.0));
/// assert!(percent.check(&Value::Number(0.0)));
/// assert!(percent.check(&Value::Number(100.0)));
/// assert!(!percent.check(&Value::Number(100.5)));
///
/// let non_negative = number_range(Some(0.0), None);
/// assert!(non_negative.check(&Value::Number(1e9)));
/// assert!(!non_negative.check(&Value::Number(-1.0)));
/// ```
pub fn number_range(min: Option<f64>, max: Option<f64>) -> Validator {
    Validator::from_fn(move |value| {
        let Value::Number(n) = value else {
            return false;
        };
        min.map_or(true, |lo| *n >= lo) && max.map_or(true, |hi| *n <= hi)
    })
}
