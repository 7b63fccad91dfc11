//! Literal value validator.

use crate::validator::Validator;
use crate::value::Value;

/// Accepts only values strictly identical to the configured scalar.
///
/// Strict identity follows the value model's equality rules for scalars:
/// numbers compare by IEEE equality (so a `NaN` literal matches nothing),
/// strings and booleans by value, symbols by identity. Two symbols created
/// with the same description are distinct literals.
///
/// Composite values (arrays, objects) compare by reference identity, which
/// this value model does not carry, so a composite literal yields a
/// validator that always rejects.
///
/// # Example
///
/// ```rust
/// use attest::{literal, Value};
///
/// let admin = literal("admin");
/// assert!(admin.check(&Value::from("admin")));
/// assert!(!admin.check(&Value::from("user")));
///
/// let one = literal(1.0);
/// assert!(one.check(&Value::Number(1.0)));
/// assert!(!one.check(&Value::from("1"))); // no coercion
/// ```
pub fn literal(expected: impl Into<Value>) -> Validator {
    let expected = expected.into();
    Validator::from_fn(move |value| match (&expected, value) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::BigInt(a), Value::BigInt(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Symbol(a), Value::Symbol(b)) => a == b,
        _ => false,
    })
}
