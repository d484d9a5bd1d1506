//! `google.protobuf.Timestamp` object form and calendar conversions.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

use crate::error::SchemaError;

/// Object-form adapter for timestamp fields: `{ "seconds": n, "nanos": n }`.
///
/// Parsed values are normalized, so `nanos` always ends up in
/// `0..1_000_000_000` with the overflow carried into `seconds`.
#[derive(Debug, Clone, Copy)]
pub struct TimestampObject;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct Parts {
    seconds: i64,
    nanos: i32,
}

impl SerializeAs<Timestamp> for TimestampObject {
    fn serialize_as<S: Serializer>(source: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        Parts {
            seconds: source.seconds,
            nanos: source.nanos,
        }
        .serialize(serializer)
    }
}

impl<'de> DeserializeAs<'de, Timestamp> for TimestampObject {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let Parts { seconds, nanos } = Parts::deserialize(deserializer)?;
        Ok(Timestamp { seconds, nanos }.normalized())
    }
}

/// Calendar conversions for [`Timestamp`].
pub trait TimestampExt: Sized {
    /// Converts a calendar time.
    fn from_datetime(value: DateTime<Utc>) -> Self;

    /// Converts to a calendar time.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidTimestamp`] if the value is outside the
    /// range `chrono` can represent.
    fn to_datetime(&self) -> Result<DateTime<Utc>, SchemaError>;
}

impl TimestampExt for Timestamp {
    fn from_datetime(value: DateTime<Utc>) -> Self {
        // leap seconds report 1_000_000_000 or more
        let nanos = i32::try_from(value.timestamp_subsec_nanos()).unwrap_or(999_999_999);
        Timestamp {
            seconds: value.timestamp(),
            nanos,
        }
        .normalized()
    }

    fn to_datetime(&self) -> Result<DateTime<Utc>, SchemaError> {
        let invalid = || SchemaError::InvalidTimestamp {
            seconds: self.seconds,
            nanos: self.nanos,
        };
        let normalized = self.normalized();
        let nanos = u32::try_from(normalized.nanos).map_err(|_| invalid())?;
        DateTime::from_timestamp(normalized.seconds, nanos).ok_or_else(invalid)
    }
}
