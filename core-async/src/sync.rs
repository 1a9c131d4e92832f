//! Synchronization primitives.
//!
//! Only `oneshot` is needed by the bridge: every host call settles exactly one
//! completion channel.
//!
//! ```rust
//! use core_async::sync::oneshot;
//!
//! # async fn example() {
//! let (tx, rx) = oneshot::channel();
//! tx.send(7).unwrap();
//! assert_eq!(rx.await.unwrap(), 7);
//! # }
//! ```

pub use tokio::sync::oneshot;
