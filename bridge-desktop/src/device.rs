//! Device metadata for desktop hosts.
//!
//! Desktop operating systems have no single build-metadata API, so the
//! identifiers are probed from well-known files: `/etc/os-release` for the OS
//! release and the DMI tables under `/sys/class/dmi/id` for vendor and model.
//! Anything that cannot be read falls back to `"unknown"`.

use async_trait::async_trait;
use bridge_traits::{
    device::{DeviceMetadata, DeviceMetadataProvider},
    error::Result,
};
use core_async::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const UNKNOWN: &str = "unknown";

/// Desktop device metadata provider
pub struct DesktopDeviceMetadata {
    os_release: PathBuf,
    dmi_dir: PathBuf,
}

impl DesktopDeviceMetadata {
    pub fn new() -> Self {
        Self {
            os_release: PathBuf::from("/etc/os-release"),
            dmi_dir: PathBuf::from("/sys/class/dmi/id"),
        }
    }

    /// Probe alternative locations (used by tests and sandboxed hosts).
    pub fn with_sources(os_release: PathBuf, dmi_dir: PathBuf) -> Self {
        Self {
            os_release,
            dmi_dir,
        }
    }

    async fn read_trimmed(path: &Path) -> Option<String> {
        let data = fs::read(path).await.ok()?;
        let value = String::from_utf8_lossy(&data).trim().to_string();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

impl Default for DesktopDeviceMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up `key` in os-release formatted text, stripping optional quotes.
fn os_release_value(contents: &str, key: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        if k.trim() != key {
            return None;
        }
        let v = v.trim().trim_matches('"').trim_matches('\'');
        if v.is_empty() {
            None
        } else {
            Some(v.to_string())
        }
    })
}

#[async_trait]
impl DeviceMetadataProvider for DesktopDeviceMetadata {
    fn platform(&self) -> &'static str {
        std::env::consts::OS
    }

    async fn device_metadata(&self) -> Result<DeviceMetadata> {
        let os_release = Self::read_trimmed(&self.os_release).await.unwrap_or_default();

        let manufacturer = Self::read_trimmed(&self.dmi_dir.join("sys_vendor"))
            .await
            .unwrap_or_else(|| UNKNOWN.to_string());
        let model = Self::read_trimmed(&self.dmi_dir.join("product_name"))
            .await
            .unwrap_or_else(|| std::env::consts::ARCH.to_string());
        let version =
            os_release_value(&os_release, "VERSION_ID").unwrap_or_else(|| UNKNOWN.to_string());

        let mut metadata = DeviceMetadata::new(manufacturer, model, version, 0);
        if let Some(name) = os_release_value(&os_release, "NAME") {
            metadata = metadata.with_system_name(name);
        }

        debug!(
            platform = self.platform(),
            manufacturer = %metadata.manufacturer,
            model = %metadata.model,
            "Probed desktop device metadata"
        );
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_release_value() {
        let contents = "NAME=\"Ubuntu\"\nVERSION_ID=\"24.04\"\nID=ubuntu\n";
        assert_eq!(os_release_value(contents, "NAME"), Some("Ubuntu".into()));
        assert_eq!(os_release_value(contents, "VERSION_ID"), Some("24.04".into()));
        assert_eq!(os_release_value(contents, "ID"), Some("ubuntu".into()));
        assert_eq!(os_release_value(contents, "BUILD_ID"), None);
    }

    #[core_async::test]
    async fn test_probe_from_custom_sources() {
        let dir = tempfile::tempdir().unwrap();
        let os_release = dir.path().join("os-release");
        let dmi = dir.path().join("dmi");
        std::fs::create_dir_all(&dmi).unwrap();
        std::fs::write(&os_release, "NAME=\"Fedora Linux\"\nVERSION_ID=40\n").unwrap();
        std::fs::write(dmi.join("sys_vendor"), "LENOVO\n").unwrap();
        std::fs::write(dmi.join("product_name"), "ThinkPad X1\n").unwrap();

        let provider = DesktopDeviceMetadata::with_sources(os_release, dmi);
        let metadata = provider.device_metadata().await.unwrap();

        assert_eq!(metadata.manufacturer, "LENOVO");
        assert_eq!(metadata.model, "ThinkPad X1");
        assert_eq!(metadata.version, "40");
        assert_eq!(metadata.sdk_version, 0);
        assert_eq!(metadata.system_name.as_deref(), Some("Fedora Linux"));
    }

    #[core_async::test]
    async fn test_missing_sources_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DesktopDeviceMetadata::with_sources(
            dir.path().join("absent"),
            dir.path().join("absent-dmi"),
        );

        let metadata = provider.device_metadata().await.unwrap();
        assert_eq!(metadata.manufacturer, UNKNOWN);
        assert_eq!(metadata.model, std::env::consts::ARCH);
        assert_eq!(metadata.version, UNKNOWN);
        assert!(metadata.system_name.is_none());
    }
}
