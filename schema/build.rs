//! Compiles the app schema and the component schemas that ride along with it.
//!
//! The descriptor set is loaded first so every field needing an object-form
//! adapter (bytes, timestamps, structs, exclusive groups) is found by walking
//! the schema instead of being listed by hand.

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FileDescriptorSet};
use std::path::PathBuf;

const PROTOS: [&str; 3] = [
    "proto/viam/app/v1/app.proto",
    "proto/viam/common/v1/common.proto",
    "proto/viam/component/servo/v1/servo.proto",
];

const SERDE_MESSAGE: &str = "#[serde_with::skip_serializing_none]\n\
    #[derive(serde::Serialize, serde::Deserialize)]\n\
    #[serde(rename_all = \"camelCase\", default)]";

const SERDE_ONEOF: &str = "#[derive(serde::Serialize, serde::Deserialize)]\n\
    #[serde(rename_all = \"camelCase\")]";

/// Exclusive groups and the function that reads each one's flattened members.
const ONEOFS: [(&str, &str); 2] = [
    (
        "viam.app.v1.UploadModuleFileRequest.module_file",
        "crate::fields::deserialize_module_file",
    ),
    (
        "viam.common.v1.Geometry.geometry_type",
        "crate::fields::deserialize_geometry_type",
    ),
];

type BuildResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> BuildResult<()> {
    if std::env::var("PROTOC").is_err() {
        // SAFETY: build scripts are single threaded at this point.
        unsafe {
            std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
        }
    }

    let protos: Vec<PathBuf> = PROTOS.iter().map(PathBuf::from).collect();
    let includes = [PathBuf::from("proto"), protoc_bin_vendored::include_path()?];

    let mut config = prost_build::Config::new();
    config
        .enable_type_names()
        .message_attribute(".viam", SERDE_MESSAGE);

    for (oneof, deserializer) in ONEOFS {
        config.enum_attribute(format!(".{oneof}"), SERDE_ONEOF);
        // The suffix form matches only the group's own field, never its members.
        config.field_attribute(
            oneof,
            format!("#[serde(flatten, deserialize_with = \"{deserializer}\")]"),
        );
    }

    let fds = config.load_fds(&protos, &includes)?;
    annotate_fields(&mut config, &fds)?;

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_fds_with_config(fds, config)?;

    for proto in PROTOS {
        println!("cargo:rerun-if-changed={proto}");
    }

    Ok(())
}

fn annotate_fields(config: &mut prost_build::Config, fds: &FileDescriptorSet) -> BuildResult<()> {
    for file in &fds.file {
        let package = file.package();
        if !package.starts_with("viam.") {
            continue;
        }
        for message in &file.message_type {
            annotate_message(config, &format!(".{package}.{}", message.name()), message)?;
        }
    }
    Ok(())
}

fn annotate_message(
    config: &mut prost_build::Config,
    path: &str,
    message: &DescriptorProto,
) -> BuildResult<()> {
    for field in &message.field {
        let group = match field.oneof_index {
            Some(index) if !field.proto3_optional() => {
                let oneof = message
                    .oneof_decl
                    .get(usize::try_from(index)?)
                    .ok_or_else(|| format!("{path}.{} names a missing oneof", field.name()))?;
                let group = format!("{path}.{}", oneof.name());
                if !ONEOFS.iter().any(|(known, _)| group.strip_prefix('.') == Some(*known)) {
                    return Err(format!("oneof {group} has no object-form reader").into());
                }
                Some(group)
            }
            _ => None,
        };

        let adapter = match (field.r#type(), field.type_name()) {
            (Type::Bytes, _) => "serde_with::base64::Base64",
            (Type::Message, ".google.protobuf.Timestamp") => "crate::wkt::TimestampObject",
            (Type::Message, ".google.protobuf.Struct") => "crate::wkt::StructObject",
            _ => continue,
        };

        let (field_path, adapter) = match group {
            Some(group) => (format!("{group}.{}", field.name()), adapter.to_string()),
            None if field.label() == Label::Repeated => {
                (format!("{path}.{}", field.name()), format!("Vec<{adapter}>"))
            }
            None if field.r#type() == Type::Message || field.proto3_optional() => {
                (format!("{path}.{}", field.name()), format!("Option<{adapter}>"))
            }
            None => (format!("{path}.{}", field.name()), adapter.to_string()),
        };
        config.field_attribute(
            field_path,
            format!("#[serde(with = \"serde_with::As::<{adapter}>\")]"),
        );
    }

    for nested in &message.nested_type {
        annotate_message(config, &format!("{path}.{}", nested.name()), nested)?;
    }
    Ok(())
}
