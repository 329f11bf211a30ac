//! Conversions between `Value` and serde types.

use serde::de::DeserializeOwned;
use serde::Serialize;

use keyward_core::Value;

use crate::error::Error;

/// Convert a Rust type to a `Value` via serde.
pub fn to_value<T: Serialize>(data: &T) -> Result<Value, Error> {
    // Serialize to serde_json::Value first, then convert to Value
    let json = serde_json::to_value(data).map_err(Error::Serialize)?;
    Ok(json_to_value(&json))
}

/// Convert a `Value` to a Rust type via serde.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    // Convert Value to serde_json::Value first, then deserialize
    let json = value_to_json(&value);
    serde_json::from_value(json).map_err(Error::Deserialize)
}

/// Convert our `Value` to `serde_json::Value`.
///
/// Total: floats JSON cannot carry (NaN, infinities) become `null`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(flag) => serde_json::Value::Bool(*flag),
        Value::Integer(number) => serde_json::Value::Number((*number).into()),
        Value::Float(number) => serde_json::Number::from_f64(*number)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(text) => serde_json::Value::String(text.clone()),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        Value::Map(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, child)| (key.clone(), value_to_json(child)))
                .collect(),
        ),
    }
}

/// Convert `serde_json::Value` to our `Value`.
///
/// Total: a number that fits neither `i64` nor `f64` keeps its string form.
pub fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(flag) => Value::Bool(*flag),
        serde_json::Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Value::Integer(integer)
            } else if let Some(float) = number.as_f64() {
                Value::Float(float)
            } else {
                // Fallback for numbers outside both ranges
                Value::String(number.to_string())
            }
        }
        serde_json::Value::String(text) => Value::String(text.clone()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, child)| (key.clone(), json_to_value(child)))
                .collect(),
        ),
    }
}
