//! Storage roots for desktop hosts.

use async_trait::async_trait;
use bridge_traits::{error::Result, storage::StorageRootProvider};
use core_async::fs;
use std::path::PathBuf;
use tracing::debug;

/// Desktop storage roots
///
/// - Private root: `<data_dir>/<app_name>` (e.g. `~/.local/share/<app>`)
/// - Shared root: the user's documents directory, when one is configured
pub struct DesktopStorageRoots {
    internal: PathBuf,
    external: Option<PathBuf>,
}

impl DesktopStorageRoots {
    /// Resolve default directories for `app_name`.
    pub fn new(app_name: &str) -> Self {
        let internal = dirs::data_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".local")
                    .join("share")
            })
            .join(app_name);

        Self {
            internal,
            external: dirs::document_dir(),
        }
    }

    /// Use explicit directories instead of the platform defaults.
    pub fn with_directories(internal: PathBuf, external: Option<PathBuf>) -> Self {
        Self { internal, external }
    }
}

#[async_trait]
impl StorageRootProvider for DesktopStorageRoots {
    async fn internal_root(&self) -> Result<PathBuf> {
        // The private root always exists on mobile hosts; mirror that here.
        if !fs::try_exists(&self.internal).await? {
            fs::create_dir_all(&self.internal).await?;
            debug!(path = ?self.internal, "Created private storage root");
        }
        Ok(self.internal.clone())
    }

    async fn external_root(&self) -> Result<Option<PathBuf>> {
        Ok(self.external.clone())
    }
}
