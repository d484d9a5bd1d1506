//! Well-known protobuf types used by the app schema.
//!
//! The types themselves are [`prost_types`]'. This module adds what the
//! schema needs on top: the object-form adapters the generated messages
//! attach to their timestamp and struct fields, calendar conversions and
//! `serde_json` conversions.

pub mod structure;
pub mod timestamp;

pub use prost_types::{ListValue, NullValue, Struct, Timestamp, Value, value};
pub use structure::{StructExt, StructObject, ValueExt};
pub use timestamp::{TimestampExt, TimestampObject};
