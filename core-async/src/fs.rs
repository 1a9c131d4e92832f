//! Async filesystem functions re-exported from Tokio.
//!
//! Only the calls the bridge actually performs are exposed. Each one maps to a
//! single native file-system call executed on Tokio's blocking pool.

pub use tokio::fs::{
    create_dir_all, metadata, read, read_dir, remove_dir, remove_file, symlink_metadata,
    try_exists, DirEntry, File, OpenOptions, ReadDir,
};

/// Write extensions for [`File`], re-exported so callers can `write_all` and
/// `flush` without naming Tokio.
pub use tokio::io::AsyncWriteExt;
