//! Storage Root Abstractions
//!
//! The facade never guesses where the host keeps its files. It asks a
//! [`StorageRootProvider`] for the application's private root and, when
//! available, a shared root visible to other applications or the user.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::Result;

/// Storage root resolution trait
///
/// Abstracts the host application's storage context:
/// - Android: `Context::getFilesDir` / `Environment::getExternalStorageDirectory`
/// - iOS: `NSDocumentDirectory` (no shared root)
/// - Desktop: per-user data directory / documents directory
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::StorageRootProvider;
///
/// async fn log_dir(roots: &dyn StorageRootProvider) -> Result<PathBuf> {
///     Ok(roots.internal_root().await?.join("logs"))
/// }
/// ```
#[async_trait]
pub trait StorageRootProvider: Send + Sync {
    /// Private storage root scoped to the hosting application.
    async fn internal_root(&self) -> Result<PathBuf>;

    /// Shared storage root, or `Ok(None)` when the host has none mounted.
    async fn external_root(&self) -> Result<Option<PathBuf>>;
}

/// Storage roots known up front.
///
/// Used by hosts that resolve their directories before constructing the
/// bridge, and by tests pointing the facade at a scratch directory.
#[derive(Debug, Clone)]
pub struct FixedStorageRoots {
    internal: PathBuf,
    external: Option<PathBuf>,
}

impl FixedStorageRoots {
    /// Roots with no shared storage.
    pub fn new(internal: impl Into<PathBuf>) -> Self {
        Self {
            internal: internal.into(),
            external: None,
        }
    }

    /// Add a shared storage root.
    pub fn with_external(mut self, external: impl Into<PathBuf>) -> Self {
        self.external = Some(external.into());
        self
    }
}

#[async_trait]
impl StorageRootProvider for FixedStorageRoots {
    async fn internal_root(&self) -> Result<PathBuf> {
        Ok(self.internal.clone())
    }

    async fn external_root(&self) -> Result<Option<PathBuf>> {
        Ok(self.external.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[core_async::test]
    async fn test_fixed_roots_without_external() {
        let roots = FixedStorageRoots::new("/data/app/files");

        assert_eq!(
            roots.internal_root().await.unwrap(),
            PathBuf::from("/data/app/files")
        );
        assert_eq!(roots.external_root().await.unwrap(), None);
    }

    #[core_async::test]
    async fn test_fixed_roots_with_external() {
        let roots = FixedStorageRoots::new("/data/app/files").with_external("/sdcard");

        assert_eq!(
            roots.external_root().await.unwrap(),
            Some(PathBuf::from("/sdcard"))
        );
    }
}
