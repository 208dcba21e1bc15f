//! # Event Bus System
//!
//! Lifecycle and domain events published by the SDK facades over
//! `tokio::sync::broadcast`.
//!
//! ## Overview
//!
//! - **Event Types**: [`SdkEvent`] wraps one enum per concern
//! - **EventBus**: one broadcast channel shared by every facade of a `GameSdk`
//! - **EventStream**: a receiver that can be narrowed to a single [`Domain`]
//!
//! `OnInitialized` / `OnInitializeError` from the facade contract map to
//! [`LifecycleEvent::Initialized`] and [`LifecycleEvent::InitializeError`].
//! Both are published only after the facade's status reached its terminal
//! value, at most once per initialization attempt.
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{Domain, EventBus, LifecycleEvent, SdkEvent};
//!
//! let bus = EventBus::new(16);
//! let mut stream = bus.subscribe_domain(Domain::Leaderboard);
//!
//! bus.emit(SdkEvent::Lifecycle(LifecycleEvent::Initialized {
//!     domain: Domain::Leaderboard,
//! }));
//!
//! assert!(stream.try_recv().is_ok());
//! ```
//!
//! ## Error Handling
//!
//! - **`RecvError::Lagged(n)`**: the subscriber missed `n` events; it can keep
//!   receiving.
//! - **`RecvError::Closed`**: every sender is gone (the SDK was dropped).

use bridge_traits::{InitializationStatus, PlatformId, SignInType};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

pub use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// Default buffer size for the event bus channel.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

/// Capability area a facade is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    App,
    Auth,
    Leaderboard,
    Purchases,
    Storage,
    Feedback,
    RemoteConfig,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::App => "app",
            Domain::Auth => "auth",
            Domain::Leaderboard => "leaderboard",
            Domain::Purchases => "purchases",
            Domain::Storage => "storage",
            Domain::Feedback => "feedback",
            Domain::RemoteConfig => "remote_config",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Event Types
// ============================================================================

/// Top-level event published through the [`EventBus`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum SdkEvent {
    Lifecycle(LifecycleEvent),
    Auth(AuthEvent),
    Purchases(PurchaseEvent),
    Game(GameEvent),
}

impl SdkEvent {
    /// Facade that published the event.
    pub fn domain(&self) -> Domain {
        match self {
            SdkEvent::Lifecycle(event) => event.domain(),
            SdkEvent::Auth(_) => Domain::Auth,
            SdkEvent::Purchases(_) => Domain::Purchases,
            SdkEvent::Game(_) => Domain::App,
        }
    }
}

/// Initialization state machine transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum LifecycleEvent {
    /// Every registered adapter initialized.
    Initialized { domain: Domain },
    /// The attempt ended in `Error`.
    InitializeError {
        domain: Domain,
        /// Adapter that failed, `None` when the failure was not adapter-specific.
        platform: Option<PlatformId>,
        status: InitializationStatus,
    },
    /// Every adapter acknowledged the post-initialization ready phase.
    Ready { domain: Domain },
}

impl LifecycleEvent {
    pub fn domain(&self) -> Domain {
        match self {
            LifecycleEvent::Initialized { domain }
            | LifecycleEvent::InitializeError { domain, .. }
            | LifecycleEvent::Ready { domain } => *domain,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum AuthEvent {
    /// A sign-in pass reached the requested level.
    SignedIn { level: SignInType },
    /// A sign-in pass ended below the requested level.
    SignInFailed { platform: Option<PlatformId> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum PurchaseEvent {
    Purchased {
        product_id: String,
        platform: PlatformId,
    },
    Consumed {
        product_id: String,
        platform: PlatformId,
    },
}

/// Gameplay markers sent by the core app facade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum GameEvent {
    Started,
    Stopped,
}

// ============================================================================
// Event Bus
// ============================================================================

/// Broadcast channel shared by all facades.
///
/// Cloning is cheap; clones publish into the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SdkEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// Subscribers lagging more than `capacity` events behind receive
    /// `RecvError::Lagged`. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event and returns the number of receivers.
    ///
    /// Having no subscribers is not an error for the SDK: events are
    /// notifications, never control flow.
    pub fn emit(&self, event: SdkEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Receive every future event.
    pub fn subscribe(&self) -> EventStream {
        EventStream {
            receiver: self.sender.subscribe(),
            domain: None,
        }
    }

    /// Receive future events published by one facade only.
    pub fn subscribe_domain(&self, domain: Domain) -> EventStream {
        EventStream {
            receiver: self.sender.subscribe(),
            domain: Some(domain),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

/// Receiver side of the bus, optionally narrowed to one [`Domain`].
#[derive(Debug)]
pub struct EventStream {
    receiver: broadcast::Receiver<SdkEvent>,
    domain: Option<Domain>,
}

impl EventStream {
    fn accepts(&self, event: &SdkEvent) -> bool {
        self.domain.map_or(true, |domain| event.domain() == domain)
    }

    /// Wait for the next matching event.
    pub async fn recv(&mut self) -> Result<SdkEvent, RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            if self.accepts(&event) {
                return Ok(event);
            }
        }
    }

    /// Take the next matching event if one is already buffered.
    pub fn try_recv(&mut self) -> Result<SdkEvent, TryRecvError> {
        loop {
            let event = self.receiver.try_recv()?;
            if self.accepts(&event) {
                return Ok(event);
            }
        }
    }

    /// Drain every buffered matching event.
    pub fn drain(&mut self) -> Vec<SdkEvent> {
        let mut events = Vec::new();
        loop {
            match self.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => return events,
            }
        }
    }
}
