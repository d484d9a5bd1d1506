//! Field-level helpers the generated structs do not provide.
//!
//! Repeated fields are plain `Vec`s, presence is `Option`, and enums are
//! stored as raw `i32`. What remains is positional insertion into lists,
//! the exclusive-group accessors for `UploadModuleFileRequest`, the readers
//! for flattened exclusive groups in the object form, and a way to ask
//! whether a raw enum value is one the schema knows.

use serde::{Deserialize, Deserializer};

use crate::app::upload_module_file_request::ModuleFile;
use crate::app::{ModuleFileInfo, UploadModuleFileRequest};
use crate::common::geometry::GeometryType;
use crate::common::{Capsule, RectangularPrism, Sphere};

/// Inserts `value` at `index` when the index is inside the list, otherwise
/// appends it.
pub fn add_at<T>(list: &mut Vec<T>, value: T, index: Option<usize>) {
    match index {
        Some(i) if i < list.len() => list.insert(i, value),
        _ => list.push(value),
    }
}

/// Returns the typed enum for a raw value, or `None` if the value is not in
/// the known set. The raw value itself is never altered.
pub fn known<E: TryFrom<i32>>(raw: i32) -> Option<E> {
    E::try_from(raw).ok()
}

/// Which member of `UploadModuleFileRequest.module_file` is set. The
/// discriminants equal the members' field tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ModuleFileCase {
    /// Neither member is set.
    NotSet = 0,
    /// `module_file_info` is set.
    ModuleFileInfo = 1,
    /// `file` is set.
    File = 2,
}

impl UploadModuleFileRequest {
    /// Reports which member of the exclusive group is set.
    #[must_use]
    pub fn module_file_case(&self) -> ModuleFileCase {
        match self.module_file {
            None => ModuleFileCase::NotSet,
            Some(ModuleFile::ModuleFileInfo(_)) => ModuleFileCase::ModuleFileInfo,
            Some(ModuleFile::File(_)) => ModuleFileCase::File,
        }
    }

    /// Returns `true` if `module_file_info` is the set member.
    #[must_use]
    pub fn has_module_file_info(&self) -> bool {
        matches!(self.module_file, Some(ModuleFile::ModuleFileInfo(_)))
    }

    /// Returns `true` if `file` is the set member.
    #[must_use]
    pub fn has_file(&self) -> bool {
        matches!(self.module_file, Some(ModuleFile::File(_)))
    }

    /// The file metadata, if that member is set.
    #[must_use]
    pub fn module_file_info(&self) -> Option<&ModuleFileInfo> {
        match &self.module_file {
            Some(ModuleFile::ModuleFileInfo(info)) => Some(info),
            _ => None,
        }
    }

    /// The file chunk, or an empty slice if that member is not set.
    #[must_use]
    pub fn file(&self) -> &[u8] {
        match &self.module_file {
            Some(ModuleFile::File(bytes)) => bytes,
            _ => &[],
        }
    }

    /// Sets `module_file_info`, clearing `file`.
    pub fn set_module_file_info(&mut self, info: ModuleFileInfo) {
        self.module_file = Some(ModuleFile::ModuleFileInfo(info));
    }

    /// Sets `file`, clearing `module_file_info`.
    pub fn set_file(&mut self, bytes: impl Into<Vec<u8>>) {
        self.module_file = Some(ModuleFile::File(bytes.into()));
    }

    /// Clears `module_file_info` if it is the set member.
    pub fn clear_module_file_info(&mut self) {
        if self.has_module_file_info() {
            self.module_file = None;
        }
    }

    /// Clears `file` if it is the set member.
    pub fn clear_file(&mut self) {
        if self.has_file() {
            self.module_file = None;
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModuleFileMembers {
    #[serde(default)]
    module_file_info: Option<ModuleFileInfo>,
    #[serde(default, with = "serde_with::As::<Option<serde_with::base64::Base64>>")]
    file: Option<Vec<u8>>,
}

/// Reads `UploadModuleFileRequest.module_file` from the keys of the
/// enclosing object. If both members are present, `file` wins.
///
/// # Errors
///
/// Fails if a present member has the wrong shape.
pub fn deserialize_module_file<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ModuleFile>, D::Error> {
    let members = ModuleFileMembers::deserialize(deserializer)?;
    Ok(members
        .file
        .map(ModuleFile::File)
        .or_else(|| members.module_file_info.map(ModuleFile::ModuleFileInfo)))
}

#[derive(Deserialize)]
struct GeometryMembers {
    #[serde(default)]
    sphere: Option<Sphere>,
    #[serde(default, rename = "box")]
    rectangular_prism: Option<RectangularPrism>,
    #[serde(default)]
    capsule: Option<Capsule>,
}

/// Reads `Geometry.geometry_type` from the keys of the enclosing object.
/// If several members are present, the one declared last wins
/// (`capsule`, then `box`, then `sphere`).
///
/// # Errors
///
/// Fails if a present member has the wrong shape.
pub fn deserialize_geometry_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<GeometryType>, D::Error> {
    let members = GeometryMembers::deserialize(deserializer)?;
    Ok(members
        .capsule
        .map(GeometryType::Capsule)
        .or_else(|| members.rectangular_prism.map(GeometryType::Box))
        .or_else(|| members.sphere.map(GeometryType::Sphere)))
}
