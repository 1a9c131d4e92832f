//! Runtime abstraction layer for the release logger bridge.
//!
//! Every other crate in the workspace reaches the async runtime through this
//! crate instead of depending on Tokio directly. The surface is deliberately
//! narrow: the file-system functions the facade passes calls through to, the
//! oneshot channel behind settle-once promises, task spawning for the host
//! dispatcher, and a `block_on` used by the attribute macros.
//!
//! # Examples
//!
//! ```rust
//! use core_async::{fs, runtime};
//!
//! let exists = runtime::block_on(async { fs::try_exists("/").await.unwrap_or(false) });
//! assert!(exists);
//! ```

// Re-export the async entry-point/test macros so downstream crates never need
// direct Tokio dependencies.
pub use core_async_macros::{main, test};

pub mod fs;
pub mod runtime;
pub mod sync;
pub mod task;

pub use task::spawn;
