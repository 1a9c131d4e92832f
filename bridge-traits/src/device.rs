//! Device Metadata Abstractions
//!
//! Static identifiers read from the host's build/version metadata. Values are
//! fixed for the process lifetime, but the facade reads them on every call
//! instead of caching.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Build/device identifiers reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMetadata {
    pub manufacturer: String,
    pub model: String,
    /// User-visible OS release, e.g. `"14"` or `"17.2"`
    pub version: String,
    /// Numeric platform API level (Android `SDK_INT`), 0 where the host has none
    pub sdk_version: i32,
    /// OS name as reported by the host, when it differs from the platform tag
    pub system_name: Option<String>,
    /// Stable device identifier, when the host exposes one
    pub identifier: Option<String>,
}

impl DeviceMetadata {
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        version: impl Into<String>,
        sdk_version: i32,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            version: version.into(),
            sdk_version,
            system_name: None,
            identifier: None,
        }
    }

    pub fn with_system_name(mut self, system_name: impl Into<String>) -> Self {
        self.system_name = Some(system_name.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

/// Device metadata provider trait
///
/// - Android: `android.os.Build` / `Build.VERSION`
/// - iOS: `UIDevice`
/// - Desktop: OS release files and DMI tables
#[async_trait]
pub trait DeviceMetadataProvider: Send + Sync {
    /// Fixed platform tag, e.g. `"android"`, `"ios"`, `"linux"`.
    fn platform(&self) -> &'static str;

    /// Snapshot the host's build metadata.
    async fn device_metadata(&self) -> Result<DeviceMetadata>;
}

/// Metadata supplied by the host at construction time.
#[derive(Debug, Clone)]
pub struct StaticDeviceMetadata {
    platform: &'static str,
    metadata: DeviceMetadata,
}

impl StaticDeviceMetadata {
    pub fn new(platform: &'static str, metadata: DeviceMetadata) -> Self {
        Self { platform, metadata }
    }
}

#[async_trait]
impl DeviceMetadataProvider for StaticDeviceMetadata {
    fn platform(&self) -> &'static str {
        self.platform
    }

    async fn device_metadata(&self) -> Result<DeviceMetadata> {
        Ok(self.metadata.clone())
    }
}
