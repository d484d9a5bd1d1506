//! App Schema - message catalog for the app API.
//!
//! This crate provides the record types exchanged with the app service
//! (organizations, locations, robots, parts, fragments, authorizations,
//! modules, keys and the servo component), their protobuf binary codec,
//! the camelCase object form, and a name-addressable catalog.
//!
//! Each message type gives you construction with defaults, typed field
//! access, binary encode and decode, and conversion to the object form:
//!
//! ```
//! use app_schema::app::Organization;
//! use app_schema::{codec, object};
//!
//! let org = Organization {
//!     id: "org1".to_string(),
//!     name: "Acme".to_string(),
//!     ..Default::default()
//! };
//! let bytes = codec::encode(&org);
//! let back: Organization = codec::decode(&bytes).expect("valid bytes");
//! assert_eq!(back, org);
//! assert_eq!(object::to_object(&org).expect("object")["name"], "Acme");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Name-addressable registry of every message type.
pub mod catalog;
/// Binary encode and decode with size limits.
pub mod codec;
/// Error types.
pub mod error;
/// Helpers for lists, enums and exclusive groups.
pub mod fields;
/// Infrastructure components (config, telemetry).
pub mod infrastructure;
/// Conversion to and from the object form.
pub mod object;
pub mod proto;
/// Well-known protobuf types and their object form.
pub mod wkt;

pub use error::{Result, SchemaError};
pub use proto::viam::app::v1 as app;
pub use proto::viam::common::v1 as common;
pub use proto::viam::component::servo::v1 as servo;
