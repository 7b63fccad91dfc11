//! Atomic kind validators.
//!
//! One zero-argument factory per primitive kind, each checking the exact
//! runtime kind tag of the value with no coercion: a numeric-looking string
//! is not a number, `true` is not `1`, and `null` is not `undefined`.

use crate::validator::Validator;
use crate::value::{Kind, Value};

fn kind_is(kind: Kind) -> Validator {
    Validator::from_fn(move |value| value.kind() == kind)
}

/// Accepts exactly number values.
///
/// # Example
///
/// ```rust
/// use attest::{number, Value};
///
/// assert!(number().check(&Value::Number(1.5)));
/// assert!(!number().check(&Value::from("1.5")));
/// assert!(!number().check(&Value::Bool(true)));
/// ```
pub fn number() -> Validator {
    kind_is(Kind::Number)
}

/// Accepts exactly string values.
///
/// # Example
///
/// ```rust
/// use attest::{string, Value};
///
/// assert!(string().check(&Value::from("hello")));
/// assert!(!string().check(&Value::Number(1.0)));
/// assert!(!string().check(&Value::Null));
/// ```
pub fn string() -> Validator {
    kind_is(Kind::String)
}

/// Accepts exactly boolean values.
pub fn boolean() -> Validator {
    kind_is(Kind::Boolean)
}

/// Accepts exactly the null value, not `undefined`.
pub fn null() -> Validator {
    kind_is(Kind::Null)
}

/// Accepts exactly the undefined value, not `null`.
pub fn undefined() -> Validator {
    kind_is(Kind::Undefined)
}

/// Accepts exactly symbol values.
pub fn symbol() -> Validator {
    kind_is(Kind::Symbol)
}

/// Accepts exactly bigint values.
pub fn bigint() -> Validator {
    kind_is(Kind::BigInt)
}

/// Accepts every value.
///
/// The catch-all closes the algebra: it is the identity element for
/// [`intersection`](crate::intersection) and the escape hatch for shapes
/// whose fields carry no constraint.
///
/// # Example
///
/// ```rust
/// use attest::{any, Value};
///
/// assert!(any().check(&Value::Null));
/// assert!(any().check(&Value::Undefined));
/// assert!(any().check(&Value::from("anything")));
/// ```
pub fn any() -> Validator {
    Validator::from_fn(|_| true)
}
