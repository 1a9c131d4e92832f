//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the release logger bridge:
//! - Logging and tracing infrastructure
//! - Configuration management with fail-fast capability checks
//!
//! ## Overview
//!
//! The file access facade is constructed from a [`config::BridgeConfig`].
//! Hosts that want the bridge's diagnostic traces routed into their own log
//! pipeline call [`logging::init_logging`] once at startup.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
