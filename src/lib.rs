//! Umbrella crate for the release logger bridge.
//!
//! Host applications depend on `release-logger` and get the file access
//! facade, the host module dispatcher and the runtime configuration in one
//! place. The `desktop-shims` feature (default) wires desktop storage roots and
//! device metadata so `BridgeConfig::builder().build()` works without any
//! host-provided adapters.

pub use bridge_traits::{
    BridgeError, DeviceMetadata, DeviceMetadataProvider, FixedStorageRoots, StaticDeviceMetadata,
    StorageRootProvider,
};
pub use core_files::{
    bootstrap, promise, DeviceInfo, FileAccessError, FileAccessFacade, FileInfo, Promise,
    Rejection, ReleaseLoggerModule, Settlement, ERROR_CODE,
};
#[cfg(feature = "desktop-shims")]
pub use core_files::bootstrap_desktop;
pub use core_runtime::config::{BridgeConfig, BridgeConfigBuilder};
pub use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
