//! Release logger bridge demonstration
//!
//! Drives the host module the way a JavaScript logging layer would: resolve
//! the documents path, append a few entries, list and read them back, then
//! clean up.
//!
//! Run with:
//! ```bash
//! cargo run -p core-files --example release_log_demo
//!
//! # JSON traces, with every file operation logged
//! cargo run -p core-files --example release_log_demo -- json
//! ```

use bridge_traits::{ConsoleLogger, LogLevel};
use core_files::bootstrap;
use core_runtime::config::BridgeConfig;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use serde_json::json;
use std::env;
use std::sync::Arc;
use tracing::info;

#[core_async::main]
async fn main() -> anyhow::Result<()> {
    let format = match env::args().nth(1).as_deref() {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    };

    let logging = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Debug)
        .with_filter("info,core_files=debug,bridge_desktop=debug")
        .with_logger_sink(Arc::new(ConsoleLogger::default()));
    init_logging(logging.clone())?;

    let config = BridgeConfig::builder()
        .app_name("release-logger-demo")
        .logging(logging)
        .build()?;
    info!(?config, "Bridge configured");

    let module = bootstrap(&config);

    let documents = module.dispatch("getDocumentsPath", vec![]).await?;
    let documents = documents.as_str().unwrap_or(".").to_string();
    let log_dir = format!("{documents}/logs");
    let log_file = format!("{log_dir}/app-log.log");

    module
        .dispatch("createDirectory", vec![json!(log_dir)])
        .await?;
    for line in ["[INFO] app started\n", "[WARN] cache miss\n"] {
        module
            .dispatch("writeLogEntry", vec![json!(log_file), json!(line)])
            .await?;
    }

    let listing = module.dispatch("listLogFiles", vec![json!(log_dir)]).await?;
    info!(%listing, "Log files");

    let content = module.dispatch("readLogFile", vec![json!(log_file)]).await?;
    info!(content = content.as_str().unwrap_or_default(), "Log content");

    let device = module.dispatch("getDeviceInfo", vec![]).await?;
    info!(%device, "Device info");

    module
        .dispatch("deleteLogFile", vec![json!(log_file)])
        .await?;
    info!("=== Demo Complete ===");

    Ok(())
}
