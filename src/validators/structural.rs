//! Structural combinators: objects, arrays, tuples, records, string enums.
//!
//! Object-shaped combinators share one defensive rule: the key literally
//! named `__proto__` is always skipped, both when declared in a shape and
//! when found on a validated value. The skip is a named invariant of the
//! algebra (see the prototype-key tests), not an implementation accident.

use indexmap::{IndexMap, IndexSet};

use crate::validator::Validator;
use crate::value::Value;

/// The key skipped by [`object`] and [`record`] to avoid prototype-chain
/// interaction in data that round-trips through hostile sources.
const PROTO_KEY: &str = "__proto__";

/// Accepts objects whose declared fields all validate.
///
/// Every declared key in `shape` is checked against the corresponding
/// property of the value; a missing property is validated as `undefined`,
/// so wrapping a field validator in [`optional`](crate::optional) makes the
/// field omissible. A declared key named `__proto__` is always ignored.
///
/// With `exact = true` the value must additionally have no own keys beyond
/// the declared set; with `exact = false` extra keys are ignored.
///
/// # Example
///
/// ```rust
/// use attest::{number, object, optional, string, Value};
///
/// let user = object(
///     [
///         ("name", string()),
///         ("age", number()),
///         ("email", optional(string())),
///     ],
///     true,
/// );
///
/// let ok = Value::from(serde_json::json!({"name": "Alice", "age": 30}));
/// assert!(user.check(&ok));
///
/// let extra = Value::from(serde_json::json!({"name": "A", "age": 1, "x": 1}));
/// assert!(!user.check(&extra)); // exact: no undeclared keys
/// ```
pub fn object<K, I>(shape: I, exact: bool) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    let shape: IndexMap<String, Validator> = shape
        .into_iter()
        .map(|(key, field)| (key.into(), field))
        .filter(|(key, _)| key != PROTO_KEY)
        .collect();
    Validator::from_fn(move |value| {
        let Value::Object(entries) = value else {
            return false;
        };
        if exact && entries.keys().any(|key| !shape.contains_key(key)) {
            return false;
        }
        shape
            .iter()
            .all(|(key, field)| field.check(entries.get(key).unwrap_or(&Value::Undefined)))
    })
}

/// Accepts arrays whose every element validates.
///
/// An empty array always passes.
///
/// # Example
///
/// ```rust
/// use attest::{array, number, Value};
///
/// let v = array(number());
/// assert!(v.check(&Value::from(serde_json::json!([1, 2, 3]))));
/// assert!(v.check(&Value::from(serde_json::json!([]))));
/// assert!(!v.check(&Value::from(serde_json::json!([1, "2"]))));
/// ```
pub fn array(item: Validator) -> Validator {
    Validator::from_fn(move |value| {
        let Value::Array(items) = value else {
            return false;
        };
        items.iter().all(|element| item.check(element))
    })
}

/// Accepts arrays of `item` with an inclusive element-count range.
///
/// The element check and the length check are independent: both must hold.
/// Omitted bounds are unconstrained.
///
/// # Example
///
/// ```rust
/// use attest::{array_length, number, Value};
///
/// let v = array_length(Some(2), Some(4), number());
/// assert!(v.check(&Value::from(serde_json::json!([1, 2, 3]))));
/// assert!(!v.check(&Value::from(serde_json::json!([1]))));
/// assert!(!v.check(&Value::from(serde_json::json!([1, 2, 3, 4, 5]))));
/// ```
pub fn array_length(min: Option<usize>, max: Option<usize>, item: Validator) -> Validator {
    let items_ok = array(item);
    Validator::from_fn(move |value| {
        let Value::Array(items) = value else {
            return false;
        };
        let len = items.len();
        min.map_or(true, |lo| len >= lo)
            && max.map_or(true, |hi| len <= hi)
            && items_ok.check(value)
    })
}

/// Accepts arrays whose length and element types match positionally.
///
/// The arity must equal the member count exactly; a wrong arity is rejected
/// regardless of how the elements would validate.
///
/// # Example
///
/// ```rust
/// use attest::{boolean, number, string, tuple, Value};
///
/// let v = tuple([string(), number(), boolean()]);
/// assert!(v.check(&Value::from(serde_json::json!(["x", 1, true]))));
/// assert!(!v.check(&Value::from(serde_json::json!(["x", 1])))); // arity
/// ```
pub fn tuple(members: impl IntoIterator<Item = Validator>) -> Validator {
    let members: Vec<Validator> = members.into_iter().collect();
    Validator::from_fn(move |value| {
        let Value::Array(items) = value else {
            return false;
        };
        items.len() == members.len()
            && members
                .iter()
                .zip(items)
                .all(|(member, element)| member.check(element))
    })
}

/// Accepts objects whose every own value validates.
///
/// Keys in this value model are always strings, so no key-kind check is
/// needed. The own key `__proto__` is skipped, as in [`object`].
///
/// # Example
///
/// ```rust
/// use attest::{record, string, Value};
///
/// let v = record(string());
/// assert!(v.check(&Value::from(serde_json::json!({"k": "v"}))));
/// assert!(!v.check(&Value::from(serde_json::json!({"k": 1}))));
/// ```
pub fn record(values: Validator) -> Validator {
    Validator::from_fn(move |value| {
        let Value::Object(entries) = value else {
            return false;
        };
        entries
            .iter()
            .filter(|(key, _)| key.as_str() != PROTO_KEY)
            .all(|(_, entry)| values.check(entry))
    })
}

/// Accepts strings belonging to a fixed closed set.
///
/// Comparison is exact string equality; non-string input always rejects.
///
/// # Example
///
/// ```rust
/// use attest::{enum_of, Value};
///
/// let level = enum_of(["debug", "info", "warn", "error"]);
/// assert!(level.check(&Value::from("info")));
/// assert!(!level.check(&Value::from("trace")));
/// assert!(!level.check(&Value::Number(1.0)));
/// ```
pub fn enum_of<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Validator {
    let values: IndexSet<String> = values.into_iter().map(Into::into).collect();
    Validator::from_fn(move |value| value.as_str().is_some_and(|s| values.contains(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::logical::optional;
    use crate::validators::primitive::{boolean, number, string};

    fn val(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_object_partial_vs_exact() {
        let shape = || [("name", string()), ("age", number())];

        let loose = object(shape(), false);
        let strict = object(shape(), true);
        let with_extra = val(serde_json::json!({"name": "A", "age": 1, "extra": 1}));

        assert!(loose.check(&with_extra));
        assert!(!strict.check(&with_extra));

        let missing_age = val(serde_json::json!({"name": "A"}));
        assert!(!loose.check(&missing_age));
        assert!(!strict.check(&missing_age));
    }

    #[test]
    fn test_object_missing_field_validated_as_undefined() {
        let v = object([("note", optional(string()))], false);
        assert!(v.check(&val(serde_json::json!({}))));
        assert!(v.check(&val(serde_json::json!({"note": "hi"}))));
        assert!(!v.check(&val(serde_json::json!({"note": 1}))));
    }

    #[test]
    fn test_object_rejects_non_object() {
        let v = object([("a", string())], false);
        assert!(!v.check(&Value::Null));
        assert!(!v.check(&Value::Undefined));
        assert!(!v.check(&Value::from("str")));
        assert!(!v.check(&Value::Array(vec![])));
    }

    #[test]
    fn test_object_skips_declared_proto_key() {
        // A shape declaring __proto__ must behave as if it never did.
        let v = object([("__proto__", string()), ("a", number())], false);
        assert!(v.check(&val(serde_json::json!({"a": 1}))));
        assert!(v.check(&val(serde_json::json!({"a": 1, "__proto__": 9}))));
    }

    #[test]
    fn test_array_elements() {
        let v = array(number());
        assert!(v.check(&val(serde_json::json!([]))));
        assert!(v.check(&val(serde_json::json!([1, 2.5, -3]))));
        assert!(!v.check(&val(serde_json::json!([1, null]))));
        assert!(!v.check(&val(serde_json::json!({"0": 1}))));
    }

    #[test]
    fn test_array_length_bounds() {
        let v = array_length(Some(2), Some(4), number());
        assert!(v.check(&val(serde_json::json!([1, 2]))));
        assert!(v.check(&val(serde_json::json!([1, 2, 3, 4]))));
        assert!(!v.check(&val(serde_json::json!([1]))));
        assert!(!v.check(&val(serde_json::json!([1, 2, 3, 4, 5]))));
        // Length alone is not enough.
        assert!(!v.check(&val(serde_json::json!([1, "2"]))));
    }

    #[test]
    fn test_array_length_unbounded_sides() {
        let at_least = array_length(Some(1), None, number());
        assert!(at_least.check(&val(serde_json::json!([1, 2, 3, 4, 5, 6]))));
        assert!(!at_least.check(&val(serde_json::json!([]))));

        let at_most = array_length(None, Some(1), number());
        assert!(at_most.check(&val(serde_json::json!([]))));
        assert!(!at_most.check(&val(serde_json::json!([1, 2]))));
    }

    #[test]
    fn test_tuple_arity() {
        let v = tuple([string(), number(), boolean()]);
        assert!(v.check(&val(serde_json::json!(["x", 1, true]))));
        // Wrong arity rejects even when the prefix validates.
        assert!(!v.check(&val(serde_json::json!(["x", 1]))));
        assert!(!v.check(&val(serde_json::json!(["x", 1, true, 0]))));
        assert!(!v.check(&val(serde_json::json!([1, "x", true]))));
    }

    #[test]
    fn test_empty_tuple() {
        let v = tuple([]);
        assert!(v.check(&val(serde_json::json!([]))));
        assert!(!v.check(&val(serde_json::json!([1]))));
    }

    #[test]
    fn test_record_values() {
        let v = record(string());
        assert!(v.check(&val(serde_json::json!({}))));
        assert!(v.check(&val(serde_json::json!({"a": "x", "b": "y"}))));
        assert!(!v.check(&val(serde_json::json!({"a": "x", "b": 1}))));
        assert!(!v.check(&val(serde_json::json!([1, 2]))));
        assert!(!v.check(&Value::Null));
    }

    #[test]
    fn test_record_skips_proto_key() {
        let v = record(string());
        // The __proto__ entry's value is not validated.
        assert!(v.check(&val(serde_json::json!({"a": "x", "__proto__": 1}))));
    }

    #[test]
    fn test_enum_of() {
        let v = enum_of(["A", "B", "C"]);
        assert!(v.check(&Value::from("A")));
        assert!(!v.check(&Value::from("D")));
        assert!(!v.check(&Value::from("a")));
        assert!(!v.check(&Value::Number(0.0)));
        assert!(!v.check(&Value::Null));
    }
}
