//! Settle-once completion channel between a bridge call and its host caller.
//!
//! [`promise`] returns a [`Promise`] for the side doing the work and a
//! [`Settlement`] future for the side waiting on it. The first `resolve` or
//! `reject` wins; later attempts are ignored and report `false`. Dropping a
//! promise without settling it makes the settlement yield a rejection, so a
//! waiting host is never left hanging.

use core_async::sync::oneshot;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};
use thiserror::Error;

use crate::error::{FileAccessError, ERROR_CODE};

/// Failure delivered to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct Rejection {
    pub code: String,
    pub message: String,
    /// Rendered low-level error, when there was one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl Rejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: ERROR_CODE.to_string(),
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    fn abandoned() -> Self {
        Self::new("Promise dropped without being settled")
    }
}

impl From<FileAccessError> for Rejection {
    fn from(err: FileAccessError) -> Self {
        let rejection = Rejection {
            code: err.code().to_string(),
            message: err.to_string(),
            cause: None,
        };

        match std::error::Error::source(&err) {
            Some(source) => rejection.with_cause(source.to_string()),
            None => rejection,
        }
    }
}

type Outcome<T> = std::result::Result<T, Rejection>;

/// Create a connected promise/settlement pair.
pub fn promise<T>() -> (Promise<T>, Settlement<T>) {
    let (sender, receiver) = oneshot::channel();
    (
        Promise {
            sender: Mutex::new(Some(sender)),
        },
        Settlement { receiver },
    )
}

/// Producer half: settles at most once.
pub struct Promise<T> {
    sender: Mutex<Option<oneshot::Sender<Outcome<T>>>>,
}

impl<T> Promise<T> {
    /// Resolve with `value`. Returns `false` if already settled.
    pub fn resolve(&self, value: T) -> bool {
        self.settle(Ok(value))
    }

    /// Reject with `rejection`. Returns `false` if already settled.
    pub fn reject(&self, rejection: impl Into<Rejection>) -> bool {
        self.settle(Err(rejection.into()))
    }

    /// Resolve or reject from a facade result.
    pub fn complete(&self, result: crate::error::Result<T>) -> bool {
        self.settle(result.map_err(Rejection::from))
    }

    pub fn is_settled(&self) -> bool {
        match self.sender.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }

    fn settle(&self, outcome: Outcome<T>) -> bool {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        match sender {
            Some(sender) => {
                // The waiting side may be gone; the promise still counts as settled.
                let _ = sender.send(outcome);
                true
            }
            None => false,
        }
    }
}

impl<T> std::fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Promise")
            .field("settled", &self.is_settled())
            .finish()
    }
}

/// Consumer half: resolves to the first settled outcome.
#[derive(Debug)]
pub struct Settlement<T> {
    receiver: oneshot::Receiver<Outcome<T>>,
}

impl<T> Future for Settlement<T> {
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| Err(Rejection::abandoned())))
    }
}
