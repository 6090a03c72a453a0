//! Field deserializers for documents written by other services.
//!
//! A field holding an unexpected type reads as absent instead of failing the
//! whole document.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Whether a JSON value counts as supplied.
///
/// `null`, `false`, zero and the empty string count as not supplied; every
/// other value, including empty arrays and objects, does.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Deserialize an optional field, treating a value of the wrong type as `None`.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Deserialize an optional list, dropping entries of the wrong type.
///
/// A value that is not an array reads as `None`.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}
