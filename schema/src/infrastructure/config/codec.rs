//! Codec configuration.
//!
//! Controls size limits and how the CLI reads and writes binary payloads.

use serde::Deserialize;

use crate::catalog::Framing;
use crate::codec::{Codec, DEFAULT_MAX_MESSAGE_BYTES};

/// How binary payloads are represented on the command line.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BinaryFormat {
    /// Hex text, whitespace tolerated on input.
    #[default]
    Hex,
    /// Raw bytes.
    Raw,
}

/// Codec settings.
#[derive(Debug, Deserialize, Clone)]
pub struct CodecSettings {
    /// Largest accepted message, in bytes.
    #[serde(default = "default_max_message_bytes")]
    pub max_message_bytes: usize,
    /// Binary representation for CLI input and output.
    #[serde(default)]
    pub binary_format: BinaryFormat,
    /// Whether payloads carry a varint length prefix.
    #[serde(default)]
    pub framed: bool,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            max_message_bytes: default_max_message_bytes(),
            binary_format: BinaryFormat::default(),
            framed: false,
        }
    }
}

impl CodecSettings {
    /// Builds the codec these settings describe.
    #[must_use]
    pub fn codec(&self) -> Codec {
        Codec::new(self.max_message_bytes)
    }

    /// The framing these settings select.
    #[must_use]
    pub fn framing(&self) -> Framing {
        if self.framed {
            Framing::LengthDelimited
        } else {
            Framing::Bare
        }
    }
}

pub(super) fn default_max_message_bytes() -> usize {
    DEFAULT_MAX_MESSAGE_BYTES
}
