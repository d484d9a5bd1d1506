//! Binary codec for catalog messages.
//!
//! Encoding is the standard protobuf wire format with fields in tag order.
//! Decoding substitutes defaults for missing fields and skips unknown tags
//! without keeping them; truncated buffers, bad varints, invalid wire types
//! and bad length prefixes are rejected.

use prost::{Message, Name};
use tracing::{debug, trace};

use crate::error::{Result, SchemaError};

/// Default upper bound on a single encoded message (4 MiB, the usual gRPC
/// receive limit).
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 4 * 1024 * 1024;

/// Encodes a message to its canonical binary form.
#[must_use]
pub fn encode<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Encodes a message preceded by its varint length.
#[must_use]
pub fn encode_length_delimited<M: Message>(message: &M) -> Vec<u8> {
    message.encode_length_delimited_to_vec()
}

/// Decodes a message from its binary form.
///
/// # Errors
///
/// Returns [`SchemaError::Decode`] if the bytes are not a valid encoding.
pub fn decode<M: Message + Name + Default>(bytes: &[u8]) -> Result<M> {
    M::decode(bytes).map_err(|e| {
        debug!(message = %M::full_name(), error = %e, "Binary decode failed");
        SchemaError::from(e)
    })
}

/// Decodes a single length-delimited message. The prefix must account for
/// every byte that follows it.
///
/// # Errors
///
/// Returns [`SchemaError::FrameLength`] if the body is shorter or longer
/// than the prefix declares, or [`SchemaError::Decode`] if the prefix or
/// body is malformed.
pub fn decode_length_delimited<M: Message + Name + Default>(bytes: &[u8]) -> Result<M> {
    let mut body = bytes;
    let declared = prost::encoding::decode_length_delimiter(&mut body).map_err(|e| {
        debug!(message = %M::full_name(), error = %e, "Framed decode failed");
        SchemaError::from(e)
    })?;
    if declared != body.len() {
        debug!(message = %M::full_name(), declared, actual = body.len(), "Frame length mismatch");
        return Err(SchemaError::FrameLength {
            declared,
            actual: body.len(),
        });
    }
    decode(body)
}

/// A codec with an input size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    max_message_bytes: usize,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGE_BYTES)
    }
}

impl Codec {
    /// Creates a codec that refuses inputs above `max_message_bytes`.
    #[must_use]
    pub fn new(max_message_bytes: usize) -> Self {
        Self { max_message_bytes }
    }

    /// The configured limit.
    #[must_use]
    pub fn max_message_bytes(&self) -> usize {
        self.max_message_bytes
    }

    /// Fails if `size` exceeds the limit.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MessageTooLarge`] when over the limit.
    pub fn check_size(&self, size: usize) -> Result<()> {
        if size > self.max_message_bytes {
            return Err(SchemaError::MessageTooLarge {
                size,
                limit: self.max_message_bytes,
            });
        }
        Ok(())
    }

    /// Encodes a message, refusing outputs above the limit.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MessageTooLarge`] if the encoding is too big.
    pub fn encode<M: Message>(&self, message: &M) -> Result<Vec<u8>> {
        self.check_size(message.encoded_len())?;
        Ok(encode(message))
    }

    /// Decodes a message after checking the input size.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MessageTooLarge`] or [`SchemaError::Decode`].
    pub fn decode<M: Message + Name + Default>(&self, bytes: &[u8]) -> Result<M> {
        self.check_size(bytes.len())?;
        trace!(message = %M::full_name(), len = bytes.len(), "Decoding");
        decode(bytes)
    }

    /// Encodes a message with a length prefix.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MessageTooLarge`] if the body is too big.
    pub fn encode_length_delimited<M: Message>(&self, message: &M) -> Result<Vec<u8>> {
        self.check_size(message.encoded_len())?;
        Ok(encode_length_delimited(message))
    }

    /// Decodes a length-prefixed message after checking the input size.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MessageTooLarge`], [`SchemaError::FrameLength`]
    /// or [`SchemaError::Decode`].
    pub fn decode_length_delimited<M: Message + Name + Default>(&self, bytes: &[u8]) -> Result<M> {
        self.check_size(bytes.len())?;
        decode_length_delimited(bytes)
    }
}
