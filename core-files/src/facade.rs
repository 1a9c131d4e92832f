//! File access facade.
//!
//! Each operation performs one native file-system call against a
//! caller-supplied path and reports either a typed value or a
//! [`FileAccessError`]. Paths are opaque: nothing is normalized, sandboxed or
//! checked for traversal; permissions are left to the file system.
//!
//! Absent files and directories are not errors. They map to defined defaults:
//! size 0, empty content, `true` for delete, an empty listing.
//!
//! Concurrent appends to the same path are not coordinated. Each write opens
//! its own append handle and interleaving follows the OS.

use bridge_traits::{BridgeError, DeviceMetadataProvider, StorageRootProvider};
use core_async::fs::{self, AsyncWriteExt};
use core_runtime::config::BridgeConfig;
use core_runtime::logging::strip_path;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::error::{FileAccessError, Result};
use crate::types::{DeviceInfo, FileInfo};

/// Stateless facade over the host's file system.
#[derive(Clone)]
pub struct FileAccessFacade {
    storage_roots: Arc<dyn StorageRootProvider>,
    device_metadata: Arc<dyn DeviceMetadataProvider>,
}

/// Logs the failure and wraps it under `context`.
fn io_failure<'a>(
    context: &'static str,
    path: &'a str,
) -> impl FnOnce(io::Error) -> FileAccessError + 'a {
    move |source| {
        error!(file = strip_path(path), error = %source, "{}", context);
        FileAccessError::Io { context, source }
    }
}

fn provider_failure(context: &'static str) -> impl FnOnce(BridgeError) -> FileAccessError {
    move |source| {
        error!(error = %source, "{}", context);
        FileAccessError::Provider { context, source }
    }
}

/// Whether `path` exists, treating a non-directory ancestor as absence.
async fn exists(path: impl AsRef<Path>) -> io::Result<bool> {
    match fs::try_exists(path).await {
        Ok(found) => Ok(found),
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

fn absolute_string(path: &Path) -> io::Result<String> {
    Ok(std::path::absolute(path)?.to_string_lossy().into_owned())
}

impl FileAccessFacade {
    pub fn new(
        storage_roots: Arc<dyn StorageRootProvider>,
        device_metadata: Arc<dyn DeviceMetadataProvider>,
    ) -> Self {
        Self {
            storage_roots,
            device_metadata,
        }
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(
            Arc::clone(&config.storage_roots),
            Arc::clone(&config.device_metadata),
        )
    }

    /// Absolute path of the application's private storage root.
    pub async fn get_documents_path(&self) -> Result<String> {
        const CONTEXT: &str = "Failed to get documents path";

        let root = self
            .storage_roots
            .internal_root()
            .await
            .map_err(provider_failure(CONTEXT))?;
        self.root_string(&root, CONTEXT)
    }

    /// Absolute path of the shared storage root, or of the private root when
    /// the host has no shared storage.
    pub async fn get_external_storage_path(&self) -> Result<String> {
        const CONTEXT: &str = "Failed to get external storage path";

        let root = match self
            .storage_roots
            .external_root()
            .await
            .map_err(provider_failure(CONTEXT))?
        {
            Some(external) => external,
            None => {
                debug!("No shared storage root, falling back to private storage");
                self.storage_roots
                    .internal_root()
                    .await
                    .map_err(provider_failure(CONTEXT))?
            }
        };
        self.root_string(&root, CONTEXT)
    }

    fn root_string(&self, root: &Path, context: &'static str) -> Result<String> {
        absolute_string(root).map_err(|source| {
            error!(error = %source, "{}", context);
            FileAccessError::Io { context, source }
        })
    }

    /// Append `log_entry` to `file_path`, creating missing parent directories.
    ///
    /// Never truncates. The handle is flushed and closed before returning.
    pub async fn write_log_entry(&self, file_path: &str, log_entry: &str) -> Result<bool> {
        let path = Path::new(file_path);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !matches!(exists(parent).await, Ok(true)) {
                fs::create_dir_all(parent).await.map_err(|source| {
                    error!(
                        file = strip_path(file_path),
                        error = %source,
                        "Failed to create log directory"
                    );
                    FileAccessError::DirectoryCreation {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
                debug!(path = ?parent, "Created log directory");
            }
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(io_failure("Failed to write log entry", file_path))?;

        file.write_all(log_entry.as_bytes())
            .await
            .map_err(io_failure("Failed to write log entry", file_path))?;
        file.flush()
            .await
            .map_err(io_failure("Failed to write log entry", file_path))?;

        debug!(path = file_path, size = log_entry.len(), "Appended log entry");
        Ok(true)
    }

    /// Byte length of `file_path`, 0 when absent.
    pub async fn get_file_size(&self, file_path: &str) -> Result<u64> {
        const CONTEXT: &str = "Failed to get file size";

        if !exists(file_path)
            .await
            .map_err(io_failure(CONTEXT, file_path))?
        {
            return Ok(0);
        }

        let metadata = fs::metadata(file_path)
            .await
            .map_err(io_failure(CONTEXT, file_path))?;
        Ok(metadata.len())
    }

    /// Whole file as UTF-8 text, empty when absent.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing.
    pub async fn read_log_file(&self, file_path: &str) -> Result<String> {
        const CONTEXT: &str = "Failed to read log file";

        if !exists(file_path)
            .await
            .map_err(io_failure(CONTEXT, file_path))?
        {
            return Ok(String::new());
        }

        let data = fs::read(file_path)
            .await
            .map_err(io_failure(CONTEXT, file_path))?;
        debug!(path = file_path, size = data.len(), "Read log file");
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    /// Delete `file_path` and report whether it is gone.
    ///
    /// An absent path reports `true`. A delete the OS refuses reports `false`
    /// instead of failing.
    pub async fn delete_log_file(&self, file_path: &str) -> Result<bool> {
        const CONTEXT: &str = "Failed to delete log file";

        if !exists(file_path)
            .await
            .map_err(io_failure(CONTEXT, file_path))?
        {
            return Ok(true);
        }

        let metadata = fs::symlink_metadata(file_path)
            .await
            .map_err(io_failure(CONTEXT, file_path))?;

        // Empty directories are deletable too, matching a plain `delete` on the host.
        let removal = if metadata.is_dir() {
            fs::remove_dir(file_path).await
        } else {
            fs::remove_file(file_path).await
        };

        match removal {
            Ok(()) => {
                debug!(path = file_path, "Deleted log file");
                Ok(true)
            }
            Err(err) => {
                warn!(file = strip_path(file_path), error = %err, "Delete refused");
                Ok(false)
            }
        }
    }

    /// Regular files directly inside `directory_path`.
    ///
    /// A missing path or a non-directory yields an empty list. Order is
    /// whatever directory enumeration yields.
    pub async fn list_log_files(&self, directory_path: &str) -> Result<Vec<FileInfo>> {
        const CONTEXT: &str = "Failed to list log files";

        let directory = Path::new(directory_path);
        if !exists(directory)
            .await
            .map_err(io_failure(CONTEXT, directory_path))?
        {
            return Ok(Vec::new());
        }

        let metadata = fs::metadata(directory)
            .await
            .map_err(io_failure(CONTEXT, directory_path))?;
        if !metadata.is_dir() {
            return Ok(Vec::new());
        }

        let mut read_dir = fs::read_dir(directory)
            .await
            .map_err(io_failure(CONTEXT, directory_path))?;
        let mut files = Vec::new();

        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(io_failure(CONTEXT, directory_path))?
        {
            let entry_path: PathBuf = entry.path();
            let metadata = match fs::metadata(&entry_path).await {
                Ok(metadata) => metadata,
                // Removed between enumeration and stat.
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    warn!(
                        file = %entry.file_name().to_string_lossy(),
                        error = %err,
                        "Skipping unreadable entry"
                    );
                    continue;
                }
            };

            if !metadata.is_file() {
                continue;
            }

            let path =
                absolute_string(&entry_path).map_err(io_failure(CONTEXT, directory_path))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            files.push(FileInfo::from_metadata(name, path, &metadata));
        }

        debug!(path = directory_path, count = files.len(), "Listed log files");
        Ok(files)
    }

    /// Create `directory_path` and any missing ancestors.
    ///
    /// Reports `true` when the path already exists. A creation the OS refuses
    /// reports `false` instead of failing.
    pub async fn create_directory(&self, directory_path: &str) -> Result<bool> {
        const CONTEXT: &str = "Failed to create directory";

        if exists(directory_path)
            .await
            .map_err(io_failure(CONTEXT, directory_path))?
        {
            return Ok(true);
        }

        match fs::create_dir_all(directory_path).await {
            Ok(()) => {
                debug!(path = directory_path, "Created directory");
                Ok(true)
            }
            Err(err) => {
                warn!(
                    file = strip_path(directory_path),
                    error = %err,
                    "Directory creation refused"
                );
                Ok(false)
            }
        }
    }

    pub async fn file_exists(&self, file_path: &str) -> Result<bool> {
        exists(file_path)
            .await
            .map_err(io_failure("Failed to check file existence", file_path))
    }

    /// Snapshot of the host's device identifiers, read on every call.
    pub async fn get_device_info(&self) -> Result<DeviceInfo> {
        let metadata = self
            .device_metadata
            .device_metadata()
            .await
            .map_err(provider_failure("Failed to get device info"))?;

        Ok(DeviceInfo::from_metadata(
            self.device_metadata.platform(),
            metadata,
        ))
    }
}
