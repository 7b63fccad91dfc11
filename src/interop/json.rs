//! Conversion to and from `serde_json::Value`.
//!
//! JSON to [`Value`] is total: every JSON value has a counterpart in the
//! value model. The reverse direction is fallible because `undefined`,
//! symbols, bigints, and non-finite numbers have no JSON representation.
//!
//! [`Value`]: crate::Value

use indexmap::IndexMap;

use crate::value::Value;

/// An error converting a [`Value`](crate::Value) to JSON.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsonError {
    /// The value's kind has no JSON counterpart.
    #[error("{0} has no JSON representation")]
    UnrepresentableKind(&'static str),
    /// The number is NaN or infinite.
    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

impl From<serde_json::Value> for Value {
    /// Converts a JSON value losslessly.
    ///
    /// JSON numbers become `Value::Number` (integers outside the exact
    /// `f64` range lose precision the same way they would in the source
    /// domain). Object key order is taken as `serde_json` yields it.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<IndexMap<String, Value>>(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = JsonError;

    /// Converts back to JSON where a representation exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::{interop::JsonError, Value};
    ///
    /// let json = serde_json::Value::try_from(&Value::from("hi")).unwrap();
    /// assert_eq!(json, serde_json::json!("hi"));
    ///
    /// let err = serde_json::Value::try_from(&Value::Undefined).unwrap_err();
    /// assert_eq!(err, JsonError::UnrepresentableKind("undefined"));
    /// ```
    fn try_from(value: &Value) -> Result<Self, JsonError> {
        match value {
            Value::Undefined | Value::Symbol(_) | Value::BigInt(_) => {
                Err(JsonError::UnrepresentableKind(value.kind_name()))
            }
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or(JsonError::NonFiniteNumber(*n)),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Array(items) => Ok(serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::Object(entries) => Ok(serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| {
                        serde_json::Value::try_from(value).map(|json| (key.clone(), json))
                    })
                    .collect::<Result<serde_json::Map<String, serde_json::Value>, _>>()?,
            )),
        }
    }
}
