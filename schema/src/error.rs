//! Error types for schema operations.
//!
//! Every fallible operation in this crate (binary decode, object-form
//! conversion, catalog lookup) reports through [`SchemaError`].

use thiserror::Error;

/// Errors that can occur while encoding, decoding or resolving messages.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The binary input is not a valid encoding of the requested message.
    #[error("Decode failed: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A length-delimited payload does not end where its prefix says.
    #[error("Length prefix declares {declared} bytes but {actual} follow")]
    FrameLength {
        /// Body length declared by the varint prefix.
        declared: usize,
        /// Bytes actually present after the prefix.
        actual: usize,
    },

    /// The object form could not be produced or parsed.
    #[error("Object form error: {0}")]
    Object(#[from] serde_json::Error),

    /// Hex text could not be turned back into bytes.
    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    /// No message with this name is registered.
    #[error("Unknown message: {0}")]
    UnknownMessage(String),

    /// A short name matched more than one registered message.
    #[error("Ambiguous message name '{name}', candidates: {}", candidates.join(", "))]
    AmbiguousMessage {
        /// The name that was looked up.
        name: String,
        /// Every full name sharing that short name.
        candidates: Vec<String>,
    },

    /// The input exceeds the configured size limit.
    #[error("Message of {size} bytes exceeds the {limit} byte limit")]
    MessageTooLarge {
        /// Size of the rejected input.
        size: usize,
        /// Configured limit.
        limit: usize,
    },

    /// A timestamp lies outside the representable calendar range.
    #[error("Timestamp out of range: {seconds}s {nanos}ns")]
    InvalidTimestamp {
        /// Whole seconds since the Unix epoch.
        seconds: i64,
        /// Nanosecond fraction.
        nanos: i32,
    },
}

impl SchemaError {
    /// Returns `true` if the error came from malformed input rather than a
    /// lookup or configuration problem.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::Decode(_)
                | Self::FrameLength { .. }
                | Self::Object(_)
                | Self::Hex(_)
                | Self::InvalidTimestamp { .. }
        )
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SchemaError>;
