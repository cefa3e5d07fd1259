#![cfg(feature = "serde")]

use gvm_errors::{ErrorKind, GvmError};
use serde_json::json;

#[test]
fn serializes_with_kind_tag() {
    let err = GvmError::required_argument().argument("foo").function("bar").build();

    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(value, json!({
        "kind": "required_argument",
        "message": null,
        "argument": "foo",
        "function": "bar",
    }));
}

#[test]
fn deserialized_error_renders_the_same_text() {
    let raw = json!({
        "kind": "invalid_argument",
        "argument": "foo",
        "function": "bar",
        "message": null,
    });

    let err: GvmError = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "Invalid argument foo for bar");
}

#[test]
fn kind_uses_snake_case() {
    let value = serde_json::to_value(ErrorKind::InvalidArgumentType).expect("serialize");
    assert_eq!(value, json!("invalid_argument_type"));
}
