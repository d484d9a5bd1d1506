//! `google.protobuf.Struct` object form and JSON conversions.
//!
//! Robot configs, fragment bodies and log fields travel as free-form
//! structs. Their object form is plain JSON; every JSON number becomes a
//! double on the wire, as in the well-known type.

use prost_types::value::Kind;
use prost_types::{ListValue, NullValue, Struct, Value};
use serde::de::Error as _;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};
use serde_with::{DeserializeAs, SerializeAs};

/// Object-form adapter for struct fields: a plain JSON object.
#[derive(Debug, Clone, Copy)]
pub struct StructObject;

impl SerializeAs<Struct> for StructObject {
    fn serialize_as<S: Serializer>(source: &Struct, serializer: S) -> Result<S::Ok, S::Error> {
        StructRef(source).serialize(serializer)
    }
}

impl<'de> DeserializeAs<'de, Struct> for StructObject {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Struct, D::Error> {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Object(map) => Ok(Struct::from_json(map)),
            other => Err(D::Error::custom(format!(
                "expected a JSON object for google.protobuf.Struct, got {other}"
            ))),
        }
    }
}

struct StructRef<'a>(&'a Struct);
struct ValueRef<'a>(&'a Value);
struct ListRef<'a>(&'a ListValue);

impl Serialize for StructRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.fields.len()))?;
        for (key, value) in &self.0.fields {
            map.serialize_entry(key, &ValueRef(value))?;
        }
        map.end()
    }
}

impl Serialize for ValueRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0.kind {
            None | Some(Kind::NullValue(_)) => serializer.serialize_unit(),
            Some(Kind::NumberValue(n)) if n.is_finite() => serializer.serialize_f64(*n),
            Some(Kind::NumberValue(_)) => serializer.serialize_unit(),
            Some(Kind::StringValue(s)) => serializer.serialize_str(s),
            Some(Kind::BoolValue(b)) => serializer.serialize_bool(*b),
            Some(Kind::StructValue(s)) => StructRef(s).serialize(serializer),
            Some(Kind::ListValue(l)) => ListRef(l).serialize(serializer),
        }
    }
}

impl Serialize for ListRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.values.len()))?;
        for value in &self.0.values {
            seq.serialize_element(&ValueRef(value))?;
        }
        seq.end()
    }
}

/// JSON conversions for [`Struct`].
pub trait StructExt {
    /// Builds a struct from a JSON object.
    fn from_json(map: JsonMap<String, JsonValue>) -> Self;

    /// Converts to a JSON object.
    fn to_json(&self) -> JsonMap<String, JsonValue>;
}

impl StructExt for Struct {
    fn from_json(map: JsonMap<String, JsonValue>) -> Self {
        Struct {
            fields: map.into_iter().map(|(k, v)| (k, Value::from_json(v))).collect(),
        }
    }

    fn to_json(&self) -> JsonMap<String, JsonValue> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}

/// JSON conversions for [`Value`].
pub trait ValueExt {
    /// Builds a value from JSON. Numbers become doubles.
    fn from_json(json: JsonValue) -> Self;

    /// Converts to JSON. Non-finite numbers become null.
    fn to_json(&self) -> JsonValue;
}

impl ValueExt for Value {
    fn from_json(json: JsonValue) -> Self {
        let kind = match json {
            JsonValue::Null => Kind::NullValue(NullValue::NullValue.into()),
            JsonValue::Bool(b) => Kind::BoolValue(b),
            JsonValue::Number(n) => Kind::NumberValue(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Kind::StringValue(s),
            JsonValue::Array(items) => Kind::ListValue(ListValue {
                values: items.into_iter().map(Value::from_json).collect(),
            }),
            JsonValue::Object(map) => Kind::StructValue(Struct::from_json(map)),
        };
        Value::from(kind)
    }

    fn to_json(&self) -> JsonValue {
        match &self.kind {
            None | Some(Kind::NullValue(_)) => JsonValue::Null,
            Some(Kind::NumberValue(n)) => JsonNumber::from_f64(*n).map_or(JsonValue::Null, JsonValue::Number),
            Some(Kind::StringValue(s)) => JsonValue::String(s.clone()),
            Some(Kind::BoolValue(b)) => JsonValue::Bool(*b),
            Some(Kind::StructValue(s)) => JsonValue::Object(s.to_json()),
            Some(Kind::ListValue(l)) => JsonValue::Array(l.values.iter().map(Value::to_json).collect()),
        }
    }
}
