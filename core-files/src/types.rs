//! Value shapes returned across the bridge.

use bridge_traits::DeviceMetadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::Metadata;

/// A regular file found by a directory listing.
///
/// Built fresh on every listing; carries no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Base name of the file
    pub name: String,
    /// Absolute path
    pub path: String,
    /// Length in bytes
    pub size: u64,
    /// Modification time in epoch milliseconds, 0 when the OS does not report one
    pub last_modified: i64,
}

impl FileInfo {
    pub(crate) fn from_metadata(name: String, path: String, metadata: &Metadata) -> Self {
        let last_modified = metadata
            .modified()
            .ok()
            .map(|time| DateTime::<Utc>::from(time).timestamp_millis())
            .unwrap_or(0);

        Self {
            name,
            path,
            size: metadata.len(),
            last_modified,
        }
    }
}

/// Static platform/device identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub platform: String,
    pub manufacturer: String,
    pub model: String,
    pub version: String,
    pub sdk_version: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl DeviceInfo {
    pub fn from_metadata(platform: &str, metadata: DeviceMetadata) -> Self {
        Self {
            platform: platform.to_string(),
            manufacturer: metadata.manufacturer,
            model: metadata.model,
            version: metadata.version,
            sdk_version: metadata.sdk_version,
            system_name: metadata.system_name,
            identifier: metadata.identifier,
        }
    }
}
