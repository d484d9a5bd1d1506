//! Object form: the nested-map representation of a message.
//!
//! Field names are lower camel case. Sub-messages nest recursively,
//! repeated fields become arrays in order, absent optional fields are
//! omitted, enums stay raw integers (so unknown values survive), bytes are
//! base64 and timestamps are `{ "seconds", "nanos" }`. The set member of a
//! oneof appears beside the ordinary fields under its own name, e.g.
//! `{ "file": "AAEC" }`; when input names several members, the one declared
//! last wins. On input, unknown keys are ignored and missing keys take their
//! defaults.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::Result;

/// Converts a message to its object form.
///
/// # Errors
///
/// Returns [`crate::SchemaError::Object`] if serialization fails.
pub fn to_object<M: Serialize>(message: &M) -> Result<JsonValue> {
    Ok(serde_json::to_value(message)?)
}

/// Builds a message from its object form.
///
/// # Errors
///
/// Returns [`crate::SchemaError::Object`] if a present key has the wrong
/// shape (for example a string where a number is expected).
pub fn from_object<M: DeserializeOwned>(object: &JsonValue) -> Result<M> {
    Ok(M::deserialize(object)?)
}

/// Parses object-form JSON text into a message.
///
/// # Errors
///
/// Returns [`crate::SchemaError::Object`] on malformed JSON or shape errors.
pub fn from_json_str<M: DeserializeOwned>(text: &str) -> Result<M> {
    Ok(serde_json::from_str(text)?)
}

/// Renders a message's object form as pretty-printed JSON text.
///
/// # Errors
///
/// Returns [`crate::SchemaError::Object`] if serialization fails.
pub fn to_json_string_pretty<M: Serialize>(message: &M) -> Result<String> {
    Ok(serde_json::to_string_pretty(message)?)
}
