//! # Host Bridge Traits
//!
//! Capabilities the release logger bridge needs from its host platform.
//!
//! ## Overview
//!
//! The file access facade is platform-agnostic. Everything that differs per
//! host is hidden behind a narrow trait defined here and injected at
//! construction time:
//!
//! - [`StorageRootProvider`](storage::StorageRootProvider) - Private and shared storage roots
//! - [`DeviceMetadataProvider`](device::DeviceMetadataProvider) - Static build/device identifiers
//! - [`LoggerSink`](logging::LoggerSink) - Forward diagnostic traces to the host log (Logcat, os_log)
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation | Status |
//! |----------|----------------|--------|
//! | Desktop  | `bridge-desktop` | ✅ Available |
//! | Android  | host adapter over `Context::getFilesDir` / `android.os.Build` | 📋 Host-provided |
//! | iOS      | host adapter over `NSDocumentDirectory` / `UIDevice` | 📋 Host-provided |
//!
//! Hosts that already know their roots and build constants can use
//! [`FixedStorageRoots`] and [`StaticDeviceMetadata`] instead of writing an
//! adapter.
//!
//! ## Error Handling
//!
//! All traits report failures as [`BridgeError`](error::BridgeError). The
//! facade wraps them into its own uniform rejection, keeping the bridge error
//! as the source.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so providers can be shared behind `Arc`
//! across spawned bridge calls.

pub mod device;
pub mod error;
pub mod logging;
pub mod storage;

pub use error::BridgeError;

pub use device::{DeviceMetadata, DeviceMetadataProvider, StaticDeviceMetadata};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use storage::{FixedStorageRoots, StorageRootProvider};
