//! Type-erased catalog entries.

use prost::{Message, Name};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::codec::Codec;
use crate::error::Result;
use crate::object;

/// How binary payloads are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// The bytes are exactly one message.
    #[default]
    Bare,
    /// The message is preceded by its varint length.
    LengthDelimited,
}

/// Everything a message type needs to be served from the catalog.
pub trait CatalogMessage: Message + Name + Default + Serialize + DeserializeOwned + 'static {}

impl<M> CatalogMessage for M where M: Message + Name + Default + Serialize + DeserializeOwned + 'static {}

type DecodeFn = fn(&Codec, &[u8], Framing) -> Result<JsonValue>;
type EncodeFn = fn(&Codec, &JsonValue, Framing) -> Result<Vec<u8>>;
type DefaultFn = fn() -> Result<JsonValue>;

/// A registered message type, usable without knowing it statically.
#[derive(Clone)]
pub struct MessageEntry {
    full_name: String,
    short_name: &'static str,
    package: &'static str,
    decode: DecodeFn,
    encode: EncodeFn,
    default: DefaultFn,
}

impl std::fmt::Debug for MessageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageEntry")
            .field("full_name", &self.full_name)
            .finish_non_exhaustive()
    }
}

impl MessageEntry {
    /// Builds the entry for `M`.
    #[must_use]
    pub fn of<M: CatalogMessage>() -> Self {
        Self {
            full_name: M::full_name(),
            short_name: M::NAME,
            package: M::PACKAGE,
            decode: decode_as::<M>,
            encode: encode_as::<M>,
            default: default_as::<M>,
        }
    }

    /// Fully-qualified protobuf name, e.g. `viam.app.v1.Robot`.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Name without the package, e.g. `Robot`.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.short_name
    }

    /// Protobuf package, e.g. `viam.app.v1`.
    #[must_use]
    pub fn package(&self) -> &'static str {
        self.package
    }

    /// Decodes binary input into the object form.
    ///
    /// # Errors
    ///
    /// Fails on oversized or malformed input.
    pub fn decode_to_object(&self, codec: &Codec, bytes: &[u8], framing: Framing) -> Result<JsonValue> {
        (self.decode)(codec, bytes, framing)
    }

    /// Encodes an object form into binary.
    ///
    /// # Errors
    ///
    /// Fails if the object has the wrong shape or the result is oversized.
    pub fn encode_from_object(&self, codec: &Codec, object: &JsonValue, framing: Framing) -> Result<Vec<u8>> {
        (self.encode)(codec, object, framing)
    }

    /// The object form of a freshly constructed message.
    ///
    /// # Errors
    ///
    /// Fails only if serialization itself fails.
    pub fn default_object(&self) -> Result<JsonValue> {
        (self.default)()
    }
}

fn decode_as<M: CatalogMessage>(codec: &Codec, bytes: &[u8], framing: Framing) -> Result<JsonValue> {
    let message: M = match framing {
        Framing::Bare => codec.decode(bytes)?,
        Framing::LengthDelimited => codec.decode_length_delimited(bytes)?,
    };
    object::to_object(&message)
}

fn encode_as<M: CatalogMessage>(codec: &Codec, value: &JsonValue, framing: Framing) -> Result<Vec<u8>> {
    let message: M = object::from_object(value)?;
    match framing {
        Framing::Bare => codec.encode(&message),
        Framing::LengthDelimited => codec.encode_length_delimited(&message),
    }
}

fn default_as<M: CatalogMessage>() -> Result<JsonValue> {
    object::to_object(&M::default())
}
