//! # Callback Bridge
//!
//! Converts a native, completion-callback style call into one awaitable
//! result.
//!
//! ## Overview
//!
//! Host SDKs (browser games portals, store SDKs) report completion by
//! invoking exactly one of an "on success" or "on error" callback, possibly
//! much later and from another execution context. [`bridge`] creates a
//! per-call slot holding the status and result payload, hands the native side
//! a [`Callback`] handle, and returns a [`PendingCall`] the adapter awaits.
//!
//! ```text
//!  adapter ──bridge(op, |cb| host.call(cb))──> PendingCall ──await──> Result<T>
//!                          │                        ▲
//!                          └── Callback ── succeed/fail (once) ──┘
//! ```
//!
//! ## Guarantees
//!
//! - The status leaves `Waiting` exactly once; later completions are ignored
//!   and logged at debug level.
//! - Completion may happen on any thread, before or after the caller starts
//!   awaiting.
//! - If every `Callback` clone is dropped without completing, the call
//!   resolves to [`BridgeError::CallbackDropped`].
//! - A host that keeps the handle but never completes it leaves the caller
//!   suspended forever. Bounded waits belong to the caller:
//!
//! ```ignore
//! let call = bridge("purchases.catalog", |cb| host.get_catalog(cb));
//! let catalog = tokio::time::timeout(Duration::from_secs(10), call).await;
//! ```
//!
//! ## Synthetic path
//!
//! Without a native backend, [`synthetic`] completes the call inside the
//! issue step so the orchestration above it still runs end to end.

use parking_lot::Mutex;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::debug;

use crate::error::{BridgeError, Result};

/// Status of one in-flight bridged call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Waiting,
    Success,
    Error,
}

struct Slot<T> {
    status: CallStatus,
    sender: Option<oneshot::Sender<Result<T>>>,
}

impl<T> Slot<T> {
    /// Flip out of `Waiting` and hand back the sender, or `None` if the call
    /// already finished.
    fn settle(&mut self, status: CallStatus) -> Option<oneshot::Sender<Result<T>>> {
        if self.status != CallStatus::Waiting {
            return None;
        }
        self.status = status;
        self.sender.take()
    }
}

struct Handle<T> {
    operation: &'static str,
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Drop for Handle<T> {
    fn drop(&mut self) {
        // Dropping the sender wakes the waiting side with a receive error.
        let abandoned = self.slot.lock().settle(CallStatus::Error);
        if abandoned.is_some() {
            debug!(
                operation = self.operation,
                "Completion handle dropped without a callback"
            );
        }
    }
}

/// Completion handle given to the native side of a bridged call.
///
/// Cloning is cheap; all clones complete the same call.
pub struct Callback<T> {
    handle: Arc<Handle<T>>,
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            handle: Arc::clone(&self.handle),
        }
    }
}

impl<T> std::fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("operation", &self.handle.operation)
            .field("status", &self.status())
            .finish()
    }
}

impl<T> Callback<T> {
    /// Complete the call successfully.
    ///
    /// Returns `false` when the call had already been completed.
    pub fn succeed(&self, value: T) -> bool {
        self.complete(CallStatus::Success, Ok(value))
    }

    /// Complete the call with a host-side failure.
    ///
    /// Returns `false` when the call had already been completed.
    pub fn fail(&self, reason: impl Into<String>) -> bool {
        self.complete(
            CallStatus::Error,
            Err(BridgeError::Rejected(reason.into())),
        )
    }

    pub fn status(&self) -> CallStatus {
        self.handle.slot.lock().status
    }

    pub fn operation(&self) -> &'static str {
        self.handle.operation
    }

    fn complete(&self, status: CallStatus, outcome: Result<T>) -> bool {
        let sender = {
            let mut slot = self.handle.slot.lock();
            if slot.status != CallStatus::Waiting {
                debug!(
                    operation = self.handle.operation,
                    ?status,
                    "Ignoring duplicate completion"
                );
                return false;
            }
            slot.settle(status)
        };

        if let Some(sender) = sender {
            if sender.send(outcome).is_err() {
                debug!(
                    operation = self.handle.operation,
                    "Caller stopped waiting before completion"
                );
            }
        }
        true
    }
}

/// The awaiting side of a bridged call.
///
/// Resolves once the native side completes its [`Callback`].
#[must_use = "a pending call does nothing unless awaited"]
pub struct PendingCall<T> {
    operation: &'static str,
    slot: Arc<Mutex<Slot<T>>>,
    receiver: oneshot::Receiver<Result<T>>,
}

impl<T> PendingCall<T> {
    pub fn status(&self) -> CallStatus {
        self.slot.lock().status
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl<T> Future for PendingCall<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => Poll::Ready(Err(BridgeError::CallbackDropped)),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Issue a native call and return the future of its single completion.
///
/// The slot is `Waiting` before `issue` runs, so hosts that complete
/// synchronously inside `issue` are handled like asynchronous ones.
pub fn bridge<T, F>(operation: &'static str, issue: F) -> PendingCall<T>
where
    F: FnOnce(Callback<T>),
{
    let (sender, receiver) = oneshot::channel();
    let slot = Arc::new(Mutex::new(Slot {
        status: CallStatus::Waiting,
        sender: Some(sender),
    }));

    let callback = Callback {
        handle: Arc::new(Handle {
            operation,
            slot: Arc::clone(&slot),
        }),
    };
    issue(callback);

    PendingCall {
        operation,
        slot,
        receiver,
    }
}

/// Deterministic stand-in for a native call that always succeeds.
pub fn synthetic<T>(operation: &'static str, value: T) -> PendingCall<T> {
    bridge(operation, move |callback| {
        callback.succeed(value);
    })
}
