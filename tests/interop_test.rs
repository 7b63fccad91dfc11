use attest::interop::JsonError;
use attest::{array, number, object, record, string, Symbol, Value};
use serde_json::json;

#[test]
fn test_json_payload_flows_into_validation() {
    let config = object(
        [
            ("host", string()),
            ("port", number()),
            ("labels", record(string())),
        ],
        true,
    );

    let raw = r#"{"host": "example.com", "port": 8080, "labels": {"env": "prod"}}"#;
    let json: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert!(config.check(&Value::from(json)));
}

#[test]
fn test_json_null_maps_to_null_not_undefined() {
    let value = Value::from(json!(null));
    assert!(value.is_null());
    assert!(!value.is_undefined());
}

#[test]
fn test_object_key_order_preserved() {
    let value = Value::from(json!({"z": 1, "a": 2, "m": 3}));
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_round_trip_preserves_structure() {
    let json = json!({
        "items": [1, "two", null, true, [2.5]],
        "nested": {"deep": {"deeper": "value"}}
    });
    let value = Value::from(json.clone());
    assert_eq!(serde_json::Value::try_from(&value).unwrap(), json);
}

#[test]
fn test_values_without_json_representation() {
    assert_eq!(
        serde_json::Value::try_from(&Value::Undefined),
        Err(JsonError::UnrepresentableKind("undefined"))
    );
    assert_eq!(
        serde_json::Value::try_from(&Value::from(Symbol::new("s"))),
        Err(JsonError::UnrepresentableKind("symbol"))
    );
    assert_eq!(
        serde_json::Value::try_from(&Value::BigInt(10)),
        Err(JsonError::UnrepresentableKind("bigint"))
    );
}

#[test]
fn test_validators_still_apply_to_non_json_values() {
    // The value model is wider than JSON; validators stay total over it.
    let v = array(number());
    assert!(!v.check(&Value::from(Symbol::anonymous())));
    assert!(!v.check(&Value::BigInt(3)));
    assert!(!v.check(&Value::Array(vec![Value::BigInt(3)])));
}
