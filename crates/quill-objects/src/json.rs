//! JSON helpers.
//!
//! Decoding takes the target shape as a type parameter: the decoded value
//! is an instance of that type, so the type's methods work on it directly.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

/// Failure to encode or decode JSON text.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The input is valid JSON but does not fit the requested shape
    /// (missing field, wrong type).
    #[error("JSON does not match the expected shape: {0}")]
    Shape(#[source] serde_json::Error),

    /// The value has no JSON representation.
    #[error("cannot encode value as JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed(err),
            Category::Data => Self::Shape(err),
        }
    }
}

/// Encode `value` as compact JSON text. Struct fields keep their
/// declaration order.
///
/// # Errors
///
/// [`JsonError::Encode`] if the value cannot be represented as JSON (for
/// example a map with non-string keys).
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Decode `json` into an instance of `T`.
///
/// ```
/// use quill_objects::{Rectangle, from_json_text};
///
/// let r: Rectangle = from_json_text(r#"{"width":10,"height":20}"#)?;
/// assert!((r.area() - 200.0).abs() < 1e-9);
/// # Ok::<(), quill_objects::JsonError>(())
/// ```
///
/// # Errors
///
/// [`JsonError::Malformed`] if `json` is not well-formed,
/// [`JsonError::Shape`] if it does not describe a `T`.
pub fn from_json_text<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode `json` into a plain value with no attached shape.
///
/// # Errors
///
/// [`JsonError::Malformed`] if `json` is not well-formed.
pub fn from_json_value(json: &str) -> Result<serde_json::Value, JsonError> {
    from_json_text(json)
}
