//! Host-facing module.
//!
//! Hosts call the bridge by method name with positional JSON arguments and
//! receive a JSON value through a [`Promise`]. Argument arity and types are
//! checked before any file-system work; a malformed call rejects with the
//! shared error code like any other failure.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{FileAccessError, Result};
use crate::facade::FileAccessFacade;
use crate::promise::{promise, Promise, Settlement};

/// Bridge module exposed to the host under [`ReleaseLoggerModule::NAME`].
#[derive(Clone)]
pub struct ReleaseLoggerModule {
    facade: Arc<FileAccessFacade>,
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Extract exactly `N` string arguments for `method`.
fn string_args<'a, const N: usize>(method: &str, args: &'a [Value]) -> Result<[&'a str; N]> {
    if args.len() != N {
        return Err(FileAccessError::InvalidCall(format!(
            "{method} expects {N} argument(s), got {}",
            args.len()
        )));
    }

    let mut out = [""; N];
    for (index, (slot, arg)) in out.iter_mut().zip(args).enumerate() {
        *slot = arg.as_str().ok_or_else(|| {
            FileAccessError::InvalidCall(format!("{method} argument {index} must be a string"))
        })?;
    }
    Ok(out)
}

impl ReleaseLoggerModule {
    /// Name the host registers the module under.
    pub const NAME: &'static str = "ReleaseLogger";

    /// Methods the module answers, in host naming.
    pub const METHODS: [&'static str; 10] = [
        "getDocumentsPath",
        "getExternalStoragePath",
        "writeLogEntry",
        "getFileSize",
        "readLogFile",
        "deleteLogFile",
        "listLogFiles",
        "createDirectory",
        "fileExists",
        "getDeviceInfo",
    ];

    pub fn new(facade: FileAccessFacade) -> Self {
        Self {
            facade: Arc::new(facade),
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn facade(&self) -> &FileAccessFacade {
        &self.facade
    }

    /// Run `method` and settle `promise` with its outcome.
    ///
    /// Returns `false` when the promise had already been settled.
    pub async fn invoke(&self, method: &str, args: &[Value], promise: &Promise<Value>) -> bool {
        let result = self.call(method, args).await;
        if let Err(err) = &result {
            debug!(method, error = %err, "Bridge call rejected");
        }
        promise.complete(result)
    }

    /// Run `method` on a spawned task; the returned settlement resolves when it
    /// finishes.
    pub fn dispatch(&self, method: impl Into<String>, args: Vec<Value>) -> Settlement<Value> {
        let (promise, settlement) = promise();
        let module = self.clone();
        let method = method.into();

        core_async::spawn(async move {
            module.invoke(&method, &args, &promise).await;
        });

        settlement
    }

    /// Run `method` and return its JSON result.
    pub async fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        let facade = &self.facade;

        match method {
            "getDocumentsPath" => {
                string_args::<0>(method, args)?;
                to_json(facade.get_documents_path().await?)
            }
            "getExternalStoragePath" => {
                string_args::<0>(method, args)?;
                to_json(facade.get_external_storage_path().await?)
            }
            "writeLogEntry" => {
                let [file_path, log_entry] = string_args(method, args)?;
                to_json(facade.write_log_entry(file_path, log_entry).await?)
            }
            "getFileSize" => {
                let [file_path] = string_args(method, args)?;
                to_json(facade.get_file_size(file_path).await?)
            }
            "readLogFile" => {
                let [file_path] = string_args(method, args)?;
                to_json(facade.read_log_file(file_path).await?)
            }
            "deleteLogFile" => {
                let [file_path] = string_args(method, args)?;
                to_json(facade.delete_log_file(file_path).await?)
            }
            "listLogFiles" => {
                let [directory_path] = string_args(method, args)?;
                to_json(facade.list_log_files(directory_path).await?)
            }
            "createDirectory" => {
                let [directory_path] = string_args(method, args)?;
                to_json(facade.create_directory(directory_path).await?)
            }
            "fileExists" => {
                let [file_path] = string_args(method, args)?;
                to_json(facade.file_exists(file_path).await?)
            }
            "getDeviceInfo" => {
                string_args::<0>(method, args)?;
                to_json(facade.get_device_info().await?)
            }
            unknown => {
                warn!(method = unknown, "Unknown bridge method");
                Err(FileAccessError::InvalidCall(format!(
                    "Unknown method: {unknown}"
                )))
            }
        }
    }
}

impl std::fmt::Debug for ReleaseLoggerModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseLoggerModule")
            .field("name", &Self::NAME)
            .finish()
    }
}
