//! File access facade for the release logger.
//!
//! The facade gives a cross-platform logging layer the handful of file-system
//! primitives it needs to persist logs on a device: resolve storage roots,
//! append entries, read, size, list and delete log files, create directories
//! and describe the device. Every call is independent and stateless.
//!
//! Hosts normally talk to the [`ReleaseLoggerModule`], which takes method
//! names with JSON arguments and settles a [`Promise`] with the JSON result
//! or a [`Rejection`] carrying the shared `"ERROR"` code.

pub mod error;
pub mod facade;
pub mod module;
pub mod promise;
pub mod types;

pub use error::{FileAccessError, Result, ERROR_CODE};
pub use facade::FileAccessFacade;
pub use module::ReleaseLoggerModule;
pub use promise::{promise, Promise, Rejection, Settlement};
pub use types::{DeviceInfo, FileInfo};

use core_runtime::config::BridgeConfig;

/// Build the host module from a validated configuration.
pub fn bootstrap(config: &BridgeConfig) -> ReleaseLoggerModule {
    ReleaseLoggerModule::new(FileAccessFacade::from_config(config))
}

/// Build the host module with desktop storage roots and device metadata.
///
/// ```no_run
/// # async fn example() -> core_runtime::Result<()> {
/// let module = core_files::bootstrap_desktop("my-app")?;
/// let documents = module.dispatch("getDocumentsPath", vec![]).await;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "desktop-shims")]
pub fn bootstrap_desktop(app_name: &str) -> core_runtime::Result<ReleaseLoggerModule> {
    let config = BridgeConfig::builder().app_name(app_name).build()?;
    Ok(bootstrap(&config))
}
