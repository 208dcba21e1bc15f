//! Initialization state machine shared by every facade.
//!
//! ```text
//!            begin()                complete()
//!   None ───────────────> Waiting ─────────────> Initialized
//!    ▲  ▲                   │  │
//!    │  │  halt(None/Wait)  │  │ fail() / halt(Error)
//!    │  └───────────────────┘  └───────────────> Error ──begin()──> Waiting
//! ```
//!
//! Only `fail()` publishes `InitializeError`. A status an adapter reports
//! through `halt` is adopted silently.
//!
//! `begin` on `Initialized` is a logged no-op. The ready flag sits beside the
//! status and can only be raised while the status is `Initialized`.
//!
//! Concurrent `begin` calls while an attempt is `Waiting` are not guarded:
//! callers serialize their own `initialize` invocations. An overlapping call
//! is logged and starts another pass.

use bridge_traits::{InitializationStatus, PlatformId};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use crate::events::{Domain, EventBus, LifecycleEvent, SdkEvent};

pub struct Lifecycle {
    domain: Domain,
    status: RwLock<InitializationStatus>,
    ready: AtomicBool,
    events: EventBus,
}

impl Lifecycle {
    pub fn new(domain: Domain, events: EventBus) -> Self {
        Self {
            domain,
            status: RwLock::new(InitializationStatus::None),
            ready: AtomicBool::new(false),
            events,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn status(&self) -> InitializationStatus {
        *self.status.read()
    }

    pub fn is_initialized(&self) -> bool {
        self.status() == InitializationStatus::Initialized
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Start an initialization attempt.
    ///
    /// Returns `false` when the facade is already initialized; the caller must
    /// then return without touching adapters.
    pub fn begin(&self) -> bool {
        let mut status = self.status.write();
        if status.can_begin() {
            *status = InitializationStatus::Waiting;
            return true;
        }

        if *status == InitializationStatus::Initialized {
            debug!(facade = %self.domain, "SDK has already been initialized");
            return false;
        }

        warn!(
            facade = %self.domain,
            "Initialization requested while another attempt is in flight"
        );
        true
    }

    /// Every adapter succeeded.
    pub fn complete(&self) {
        *self.status.write() = InitializationStatus::Initialized;
        info!(facade = %self.domain, "Initialized");
        self.events
            .emit(SdkEvent::Lifecycle(LifecycleEvent::Initialized {
                domain: self.domain,
            }));
    }

    /// An adapter faulted; the attempt ends in `Error`.
    pub fn fail(&self, platform: Option<PlatformId>) {
        *self.status.write() = InitializationStatus::Error;
        self.emit_error(platform);
    }

    /// An adapter finished but reported `reported` instead of `Initialized`.
    ///
    /// The facade adopts the adapter's status without publishing an event. A
    /// reported `Waiting` means the adapter never reached an answer and is
    /// stored as `None` so the next `begin` can start a fresh attempt.
    pub fn halt(&self, platform: PlatformId, reported: InitializationStatus) {
        let status = match reported {
            InitializationStatus::Waiting | InitializationStatus::Initialized => {
                InitializationStatus::None
            }
            other => other,
        };
        *self.status.write() = status;

        warn!(
            facade = %self.domain,
            %platform,
            reported = %reported,
            "Adapter did not initialize"
        );
    }

    /// Raise the ready flag. Returns `false` if the facade is not initialized.
    pub fn mark_ready(&self) -> bool {
        if !self.is_initialized() {
            warn!(facade = %self.domain, "Cannot become ready before initialization");
            return false;
        }

        if !self.ready.swap(true, Ordering::AcqRel) {
            info!(facade = %self.domain, "Game ready");
            self.events
                .emit(SdkEvent::Lifecycle(LifecycleEvent::Ready {
                    domain: self.domain,
                }));
        }
        true
    }

    pub fn clear_ready(&self) {
        self.ready.store(false, Ordering::Release);
    }

    fn emit_error(&self, platform: Option<PlatformId>) {
        self.events
            .emit(SdkEvent::Lifecycle(LifecycleEvent::InitializeError {
                domain: self.domain,
                platform,
                status: InitializationStatus::Error,
            }));
    }
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("domain", &self.domain)
            .field("status", &self.status())
            .field("ready", &self.is_ready())
            .finish()
    }
}
