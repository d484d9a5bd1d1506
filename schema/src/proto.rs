//! Generated protobuf bindings.
//!
//! The module tree mirrors the protobuf package names so cross-package
//! references emitted by the generator resolve. Messages carry `serde`
//! derives for the object form. Well-known types are [`prost_types`]'; their
//! object-form adapters live in [`crate::wkt`].

#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::derive_partial_eq_without_eq)]
#![allow(clippy::large_enum_variant)]

/// Packages under `viam`.
pub mod viam {
    /// `viam.app`.
    pub mod app {
        /// `viam.app.v1`: the app API message catalog and service.
        pub mod v1 {
            tonic::include_proto!("viam.app.v1");
        }
    }

    /// `viam.common`.
    pub mod common {
        /// `viam.common.v1`: payloads shared by component services.
        pub mod v1 {
            tonic::include_proto!("viam.common.v1");
        }
    }

    /// `viam.component`.
    pub mod component {
        /// `viam.component.servo`.
        pub mod servo {
            /// `viam.component.servo.v1`: servo component messages and service.
            pub mod v1 {
                tonic::include_proto!("viam.component.servo.v1");
            }
        }
    }
}
