//! The message catalog: every record type, addressable by name.
//!
//! Tools that only know a message by its protobuf name (the CLI, test
//! fixtures, log inspectors) go through [`Catalog`] to decode binary
//! payloads into the object form and back.
//!
//! # Example
//!
//! ```
//! use app_schema::catalog::{Catalog, Framing};
//! use app_schema::codec::Codec;
//!
//! let catalog = Catalog::global();
//! let entry = catalog.resolve("Organization").expect("registered");
//! let bytes = entry
//!     .encode_from_object(&Codec::default(), &serde_json::json!({ "id": "org1" }), Framing::Bare)
//!     .expect("encodes");
//! let object = entry.decode_to_object(&Codec::default(), &bytes, Framing::Bare).expect("decodes");
//! assert_eq!(object["id"], "org1");
//! ```

mod builtin;
pub mod entry;

pub use entry::{CatalogMessage, Framing, MessageEntry};

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use crate::error::{Result, SchemaError};

static GLOBAL: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Registry of message types keyed by fully-qualified name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, MessageEntry>,
    by_short_name: HashMap<&'static str, Vec<String>>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding every message compiled into this crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        builtin::register_app(&mut catalog);
        builtin::register_components(&mut catalog);
        debug!(messages = catalog.len(), "Built message catalog");
        catalog
    }

    /// The shared built-in catalog.
    #[must_use]
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    /// Registers `M`. Registering the same type twice is a no-op.
    pub fn register<M: CatalogMessage>(&mut self) -> &mut Self {
        let entry = MessageEntry::of::<M>();
        let full_name = entry.full_name().to_string();
        if self.entries.contains_key(&full_name) {
            warn!(message = %full_name, "Message registered twice");
            return self;
        }
        self.by_short_name
            .entry(entry.short_name())
            .or_default()
            .push(full_name.clone());
        self.entries.insert(full_name, entry);
        self
    }

    /// Finds an entry by full name, or by short name when that is unique.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownMessage`] if nothing matches and
    /// [`SchemaError::AmbiguousMessage`] if a short name matches several.
    pub fn resolve(&self, name: &str) -> Result<&MessageEntry> {
        let name = name.trim().trim_start_matches('.');
        if let Some(entry) = self.entries.get(name) {
            return Ok(entry);
        }
        match self.by_short_name.get(name).map(Vec::as_slice) {
            Some([full_name]) => self
                .entries
                .get(full_name)
                .ok_or_else(|| SchemaError::UnknownMessage(name.to_string())),
            Some(candidates) if candidates.len() > 1 => {
                let mut candidates = candidates.to_vec();
                candidates.sort();
                Err(SchemaError::AmbiguousMessage {
                    name: name.to_string(),
                    candidates,
                })
            }
            _ => Err(SchemaError::UnknownMessage(name.to_string())),
        }
    }

    /// Returns `true` if `name` resolves to exactly one entry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Full names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in full-name order.
    pub fn entries(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.values()
    }

    /// Entries belonging to one protobuf package.
    pub fn package<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a MessageEntry> + 'a {
        self.entries.values().filter(move |e| e.package() == package)
    }

    /// Number of registered messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Robot;
    use crate::codec::Codec;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    /// A second `Robot` in another package, to provoke short-name clashes.
    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    struct OtherRobot {
        #[prost(string, tag = "1")]
        id: String,
    }

    impl prost::Name for OtherRobot {
        const NAME: &'static str = "Robot";
        const PACKAGE: &'static str = "test.v1";

        fn full_name() -> String {
            "test.v1.Robot".to_string()
        }
    }

    #[test]
    fn test_builtin_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.package("viam.app.v1").count(), 138);
        assert_eq!(catalog.package("viam.component.servo.v1").count(), 9);
        assert_eq!(catalog.package("viam.common.v1").count(), 10);
        assert_eq!(catalog.len(), 157);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_resolve_by_full_and_short_name() {
        let catalog = Catalog::global();
        assert_eq!(catalog.resolve("viam.app.v1.Robot").map(MessageEntry::short_name).ok(), Some("Robot"));
        assert_eq!(
            catalog.resolve(".viam.app.v1.SharedSecret").map(MessageEntry::full_name).ok(),
            Some("viam.app.v1.SharedSecret")
        );
        assert_eq!(
            catalog.resolve("GetUserIDByEmailRequest").map(MessageEntry::package).ok(),
            Some("viam.app.v1")
        );
        assert!(matches!(catalog.resolve("Nope"), Err(SchemaError::UnknownMessage(_))));
    }

    #[test]
    fn test_ambiguous_short_name() {
        let mut catalog = Catalog::new();
        catalog.register::<Robot>().register::<OtherRobot>();
        let err = catalog.resolve("Robot").unwrap_err();
        match err {
            SchemaError::AmbiguousMessage { candidates, .. } => {
                assert_eq!(candidates, vec!["test.v1.Robot", "viam.app.v1.Robot"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(catalog.contains("test.v1.Robot"));
    }

    #[test]
    fn test_double_registration_is_ignored() {
        let mut catalog = Catalog::new();
        catalog.register::<Robot>().register::<Robot>();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Robot"));
    }

    #[test]
    fn test_erased_round_trip() {
        let codec = Codec::default();
        let entry = Catalog::global().resolve("Robot").expect("registered");
        let object = json!({ "id": "r1", "name": "rover", "lastAccess": { "seconds": 9, "nanos": 0 } });

        for framing in [Framing::Bare, Framing::LengthDelimited] {
            let bytes = entry.encode_from_object(&codec, &object, framing).expect("encode");
            let back = entry.decode_to_object(&codec, &bytes, framing).expect("decode");
            assert_eq!(back["id"], "r1");
            assert_eq!(back["lastAccess"]["seconds"], 9);
            assert!(back.get("createdOn").is_none());
        }
    }

    #[test]
    fn test_default_object() {
        let entry = Catalog::global().resolve("ListOrganizationsRequest").expect("registered");
        assert_eq!(entry.default_object().expect("object"), json!({}));
    }
}
