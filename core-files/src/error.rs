use bridge_traits::BridgeError;
use std::path::PathBuf;
use thiserror::Error;

/// Rejection code shared by every failure the bridge reports.
pub const ERROR_CODE: &str = "ERROR";

/// Failure of a single bridge call.
///
/// Hosts see one failure kind: [`code`](FileAccessError::code) is always
/// [`ERROR_CODE`], `Display` is the human-readable message and
/// [`source`](std::error::Error::source) is the low-level error behind it.
#[derive(Error, Debug)]
pub enum FileAccessError {
    #[error("Failed to create log directory")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}")]
    Provider {
        context: &'static str,
        #[source]
        source: BridgeError,
    },

    #[error("{0}")]
    InvalidCall(String),

    #[error("Failed to encode bridge result")]
    Encode(#[from] serde_json::Error),
}

impl FileAccessError {
    pub fn code(&self) -> &'static str {
        ERROR_CODE
    }
}

pub type Result<T> = std::result::Result<T, FileAccessError>;
