//! Logical combinators and nullability modifiers.
//!
//! [`union`] and [`intersection`] combine child validators with OR and AND;
//! both evaluate children in list order and may short-circuit, which is
//! sound because validators are pure. [`optional`] and [`nullable`] widen a
//! validator's accepted set with nullish values; the two are deliberately
//! asymmetric.

use crate::validator::Validator;
use crate::value::Value;

/// Accepts values the inner validator accepts, plus `null` and `undefined`.
///
/// # Example
///
/// ```rust
/// use attest::{optional, string, Value};
///
/// let v = optional(string());
/// assert!(v.check(&Value::from("hi")));
/// assert!(v.check(&Value::Null));
/// assert!(v.check(&Value::Undefined));
/// assert!(!v.check(&Value::Number(1.0)));
/// ```
pub fn optional(inner: Validator) -> Validator {
    Validator::from_fn(move |value| value.is_nullish() || inner.check(value))
}

/// Accepts values the inner validator accepts, plus `null` only.
///
/// Unlike [`optional`], `undefined` is not admitted by the modifier itself;
/// it passes only if the inner validator accepts it.
///
/// # Example
///
/// ```rust
/// use attest::{nullable, string, Value};
///
/// let v = nullable(string());
/// assert!(v.check(&Value::from("hi")));
/// assert!(v.check(&Value::Null));
/// assert!(!v.check(&Value::Undefined));
/// ```
pub fn nullable(inner: Validator) -> Validator {
    Validator::from_fn(move |value| value.is_null() || inner.check(value))
}

/// Accepts values accepted by any member validator.
///
/// Members are evaluated in list order with a short-circuit on the first
/// acceptance. Order affects performance only, never the result. An empty
/// member list accepts nothing.
///
/// # Example
///
/// ```rust
/// use attest::{number, string, union, Value};
///
/// let id = union([string(), number()]);
/// assert!(id.check(&Value::from("abc")));
/// assert!(id.check(&Value::Number(42.0)));
/// assert!(!id.check(&Value::Bool(true)));
/// ```
pub fn union(members: impl IntoIterator<Item = Validator>) -> Validator {
    let members: Vec<Validator> = members.into_iter().collect();
    Validator::from_fn(move |value| members.iter().any(|member| member.check(value)))
}

/// Accepts values accepted by every member validator.
///
/// Members are evaluated in list order, short-circuiting on the first
/// rejection; evaluation never has side effects, so skipping the rest is
/// sound. An empty member list accepts everything.
///
/// # Example
///
/// ```rust
/// use attest::{intersection, number, number_range, Value};
///
/// let score = intersection([number(), number_range(Some(0.0), Some(10.0))]);
/// assert!(score.check(&Value::Number(7.0)));
/// assert!(!score.check(&Value::Number(11.0)));
/// ```
pub fn intersection(members: impl IntoIterator<Item = Validator>) -> Validator {
    let members: Vec<Validator> = members.into_iter().collect();
    Validator::from_fn(move |value| members.iter().all(|member| member.check(value)))
}
