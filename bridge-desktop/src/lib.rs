//! # Desktop Bridge Implementations
//!
//! Default implementations of the host bridge traits for desktop platforms
//! (macOS, Windows, Linux):
//! - `StorageRootProvider` using the `dirs` crate (per-user data directory as
//!   the private root, documents directory as the shared root)
//! - `DeviceMetadataProvider` probing OS release files and DMI tables
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{DesktopDeviceMetadata, DesktopStorageRoots};
//! use std::sync::Arc;
//!
//! let roots = Arc::new(DesktopStorageRoots::new("my-app"));
//! let device = Arc::new(DesktopDeviceMetadata::new());
//! // Hand both to `BridgeConfig::builder()`
//! ```

mod device;
mod storage;

pub use device::DesktopDeviceMetadata;
pub use storage::DesktopStorageRoots;
