//! Primitive type validators
//!
//! One validator per column type an insert schema can declare. Each checks a
//! single non-null JSON value and reports a message naming what it expected
//! and what it received.

use chrono::DateTime;
use serde_json::Value;

/// Signature shared by all validators: `(field_name, value) -> Result<(), message>`
pub type Validator = fn(&str, &Value) -> Result<(), String>;

/// JSON type name used in error messages
pub fn received(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validator: value is a JSON integer that fits in 32 bits
pub fn integer(_field: &str, value: &Value) -> Result<(), String> {
    match value.as_i64() {
        Some(n) if i32::try_from(n).is_ok() => Ok(()),
        Some(n) => Err(format!("Integer {} is out of range", n)),
        None => Err(format!("Expected integer, received {}", received(value))),
    }
}

/// Validator: value is a string
pub fn text(_field: &str, value: &Value) -> Result<(), String> {
    if value.is_string() {
        Ok(())
    } else {
        Err(format!("Expected string, received {}", received(value)))
    }
}

/// Validator: value is a boolean
pub fn boolean(_field: &str, value: &Value) -> Result<(), String> {
    if value.is_boolean() {
        Ok(())
    } else {
        Err(format!("Expected boolean, received {}", received(value)))
    }
}

/// Validator: value is an RFC 3339 timestamp string
pub fn timestamp(_field: &str, value: &Value) -> Result<(), String> {
    let Some(s) = value.as_str() else {
        return Err(format!("Expected date, received {}", received(value)));
    };

    DateTime::parse_from_rfc3339(s)
        .map(|_| ())
        .map_err(|_| format!("Invalid date '{}', expected RFC 3339", s))
}
