//! # Bridge Configuration Module
//!
//! Provides configuration management for the release logger bridge.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `BridgeConfig` holding the host capabilities the file access facade needs.
//! It fails fast when a capability is missing so that a misconfigured host
//! finds out at startup rather than on the first log write.
//!
//! ## Required Dependencies
//!
//! - `StorageRootProvider` - Resolves the private and shared storage roots
//! - `DeviceMetadataProvider` - Supplies static build/device identifiers
//!
//! When the `desktop-shims` feature is enabled, desktop defaults for both are
//! injected automatically if not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_traits::{DeviceMetadata, FixedStorageRoots, StaticDeviceMetadata};
//! use core_runtime::config::BridgeConfig;
//! use std::sync::Arc;
//!
//! let config = BridgeConfig::builder()
//!     .app_name("com.example.app")
//!     .storage_roots(Arc::new(FixedStorageRoots::new("/data/data/com.example.app/files")))
//!     .device_metadata(Arc::new(StaticDeviceMetadata::new(
//!         "android",
//!         DeviceMetadata::new("Google", "Pixel 8", "14", 34),
//!     )))
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use bridge_traits::{DeviceMetadataProvider, StorageRootProvider};
use std::sync::Arc;

/// Application name used for desktop storage roots when none is set.
pub const DEFAULT_APP_NAME: &str = "release-logger";

/// Configuration for the release logger bridge.
///
/// Use [`BridgeConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct BridgeConfig {
    /// Host application name; names the desktop private storage directory
    pub app_name: String,

    /// Storage root resolution (required)
    pub storage_roots: Arc<dyn StorageRootProvider>,

    /// Build/device metadata (required)
    pub device_metadata: Arc<dyn DeviceMetadataProvider>,

    /// Logging setup the host may pass to [`crate::logging::init_logging`]
    pub logging: LoggingConfig,
}

impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("app_name", &self.app_name)
            .field("storage_roots", &"StorageRootProvider { ... }")
            .field(
                "device_metadata",
                &format_args!(
                    "DeviceMetadataProvider {{ platform: {} }}",
                    self.device_metadata.platform()
                ),
            )
            .field("logging", &self.logging.format)
            .finish()
    }
}

impl BridgeConfig {
    /// Creates a new builder for constructing a `BridgeConfig`.
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(Error::Config("App name cannot be empty".to_string()));
        }

        if self.app_name.contains(['/', '\\']) {
            return Err(Error::Config(
                "App name must not contain path separators".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn storage_roots_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "StorageRootProvider".to_string(),
        message: "StorageRootProvider implementation is required to resolve storage paths. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use DesktopStorageRoots. \
                 Mobile: inject an adapter over the host's storage context, or FixedStorageRoots."
            .to_string(),
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn device_metadata_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "DeviceMetadataProvider".to_string(),
        message: "DeviceMetadataProvider implementation is required for device info. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use DesktopDeviceMetadata. \
                 Mobile: inject an adapter over the host's build metadata, or StaticDeviceMetadata."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_storage_roots(app_name: &str) -> Result<Arc<dyn StorageRootProvider>> {
    use bridge_desktop::DesktopStorageRoots;

    let roots: Arc<dyn StorageRootProvider> = Arc::new(DesktopStorageRoots::new(app_name));
    Ok(roots)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_storage_roots(_app_name: &str) -> Result<Arc<dyn StorageRootProvider>> {
    Err(storage_roots_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_device_metadata() -> Result<Arc<dyn DeviceMetadataProvider>> {
    use bridge_desktop::DesktopDeviceMetadata;

    let provider: Arc<dyn DeviceMetadataProvider> = Arc::new(DesktopDeviceMetadata::new());
    Ok(provider)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_device_metadata() -> Result<Arc<dyn DeviceMetadataProvider>> {
    Err(device_metadata_missing_error())
}

/// Builder for constructing [`BridgeConfig`] instances.
#[derive(Default)]
pub struct BridgeConfigBuilder {
    app_name: Option<String>,
    storage_roots: Option<Arc<dyn StorageRootProvider>>,
    device_metadata: Option<Arc<dyn DeviceMetadataProvider>>,
    logging: Option<LoggingConfig>,
}

impl BridgeConfigBuilder {
    /// Sets the host application name.
    ///
    /// Default: [`DEFAULT_APP_NAME`]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Sets the storage root provider.
    pub fn storage_roots(mut self, provider: Arc<dyn StorageRootProvider>) -> Self {
        self.storage_roots = Some(provider);
        self
    }

    /// Sets the device metadata provider.
    pub fn device_metadata(mut self, provider: Arc<dyn DeviceMetadataProvider>) -> Self {
        self.device_metadata = Some(provider);
        self
    }

    /// Sets the logging configuration.
    pub fn logging(mut self, config: LoggingConfig) -> Self {
        self.logging = Some(config);
        self
    }

    /// Builds the final `BridgeConfig` instance.
    ///
    /// Returns an error if a required provider is missing (and no desktop
    /// default is available) or the app name is invalid.
    pub fn build(self) -> Result<BridgeConfig> {
        let app_name = self
            .app_name
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let storage_roots = match self.storage_roots {
            Some(provider) => provider,
            None => provide_default_storage_roots(&app_name)?,
        };

        let device_metadata = match self.device_metadata {
            Some(provider) => provider,
            None => provide_default_device_metadata()?,
        };

        let config = BridgeConfig {
            app_name,
            storage_roots,
            device_metadata,
            logging: self.logging.unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use bridge_traits::{DeviceMetadata, FixedStorageRoots, StaticDeviceMetadata};

    fn test_device() -> Arc<dyn DeviceMetadataProvider> {
        Arc::new(StaticDeviceMetadata::new(
            "android",
            DeviceMetadata::new("Google", "Pixel 8", "14", 34),
        ))
    }

    fn test_roots() -> Arc<dyn StorageRootProvider> {
        Arc::new(FixedStorageRoots::new("/data/app/files"))
    }

    #[test]
    fn test_builder_with_explicit_providers() {
        let config = BridgeConfig::builder()
            .app_name("com.example.app")
            .storage_roots(test_roots())
            .device_metadata(test_device())
            .logging(LoggingConfig::default().with_format(LogFormat::Compact))
            .build()
            .unwrap();

        assert_eq!(config.app_name, "com.example.app");
        assert_eq!(config.device_metadata.platform(), "android");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_default_app_name() {
        let config = BridgeConfig::builder()
            .storage_roots(test_roots())
            .device_metadata(test_device())
            .build()
            .unwrap();

        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn test_empty_app_name_rejected() {
        let result = BridgeConfig::builder()
            .app_name("  ")
            .storage_roots(test_roots())
            .device_metadata(test_device())
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_app_name_with_separator_rejected() {
        let result = BridgeConfig::builder()
            .app_name("../escape")
            .storage_roots(test_roots())
            .device_metadata(test_device())
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_hides_providers() {
        let config = BridgeConfig::builder()
            .storage_roots(test_roots())
            .device_metadata(test_device())
            .build()
            .unwrap();

        let debug = format!("{:?}", config);
        assert!(debug.contains("StorageRootProvider { ... }"));
        assert!(debug.contains("platform: android"));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_missing_storage_roots_fails_fast() {
        let result = BridgeConfig::builder().device_metadata(test_device()).build();

        match result {
            Err(Error::CapabilityMissing { capability, .. }) => {
                assert_eq!(capability, "StorageRootProvider");
            }
            other => panic!("expected CapabilityMissing, got {:?}", other.map(|_| ())),
        }
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_missing_device_metadata_fails_fast() {
        let result = BridgeConfig::builder().storage_roots(test_roots()).build();

        match result {
            Err(Error::CapabilityMissing { capability, .. }) => {
                assert_eq!(capability, "DeviceMetadataProvider");
            }
            other => panic!("expected CapabilityMissing, got {:?}", other.map(|_| ())),
        }
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_desktop_defaults_injected() {
        let config = BridgeConfig::builder().build().unwrap();
        assert_eq!(config.device_metadata.platform(), std::env::consts::OS);
    }
}
