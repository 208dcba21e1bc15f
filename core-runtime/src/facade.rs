//! Generic domain facade.
//!
//! Bundles one [`AdapterRegistry`], one [`Lifecycle`] and a handle on the
//! shared [`EventBus`]. Domain crates wrap a `Facade<dyn TheirTrait>` and add
//! their operations on top of the policies in [`crate::orchestrate`].

use async_trait::async_trait;
use bridge_traits::{InitializationStatus, PlatformId, PlatformService};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::bootstrap::{ensure, Prerequisite};
use crate::events::{Domain, EventBus, EventStream};
use crate::lifecycle::Lifecycle;
use crate::orchestrate::{all_required, PassOutcome, Step};
use crate::registry::{AdapterRegistry, AdapterSnapshot};

pub struct Facade<A: ?Sized> {
    registry: AdapterRegistry<A>,
    lifecycle: Lifecycle,
    events: EventBus,
    upstream: Option<Arc<dyn Prerequisite>>,
}

impl<A> Facade<A>
where
    A: ?Sized + PlatformService + 'static,
{
    pub fn new(domain: Domain, events: EventBus) -> Self {
        Self {
            registry: AdapterRegistry::new(domain),
            lifecycle: Lifecycle::new(domain, events.clone()),
            events,
            upstream: None,
        }
    }

    /// Require `upstream` to hold before this facade initializes.
    pub fn with_upstream(mut self, upstream: Arc<dyn Prerequisite>) -> Self {
        self.upstream = Some(upstream);
        self
    }

    pub fn domain(&self) -> Domain {
        self.registry.domain()
    }

    pub fn register(&self, adapter: Arc<A>) -> bool {
        self.registry.register(adapter)
    }

    pub fn registry(&self) -> &AdapterRegistry<A> {
        &self.registry
    }

    pub fn adapters(&self) -> AdapterSnapshot<A> {
        self.registry.all()
    }

    pub fn primary(&self) -> Option<Arc<A>> {
        self.registry.primary()
    }

    pub fn resolve(&self, platform: PlatformId) -> Option<Arc<A>> {
        self.registry.resolve(platform)
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Events of this facade's domain only.
    pub fn subscribe(&self) -> EventStream {
        self.events.subscribe_domain(self.domain())
    }

    pub fn status(&self) -> InitializationStatus {
        self.lifecycle.status()
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle.is_initialized()
    }

    /// Initialize every adapter with [`PlatformService::initialize`].
    pub async fn initialize_adapters(&self) -> InitializationStatus {
        self.initialize_with(|adapter| async move {
            adapter
                .initialize()
                .await
                .map(|()| initialized_step(adapter.initialization_status()))
        })
        .await
    }

    /// Run one initialization attempt with a custom per-adapter step.
    ///
    /// Returns the status stored at the end of the attempt.
    pub async fn initialize_with<F, Fut>(&self, step: F) -> InitializationStatus
    where
        F: FnMut(Arc<A>) -> Fut,
        Fut: Future<Output = bridge_traits::error::Result<Step<InitializationStatus>>>,
    {
        let domain = self.domain();

        if self.is_initialized() {
            debug!(facade = %domain, "SDK has already been initialized");
            return InitializationStatus::Initialized;
        }

        if let Some(upstream) = &self.upstream {
            if !ensure(upstream.as_ref(), domain, "initialize").await {
                return self.status();
            }
        }

        if !self.lifecycle.begin() {
            return self.status();
        }

        match all_required(domain, "initialize", &self.registry.all(), step).await {
            PassOutcome::Completed => self.lifecycle.complete(),
            PassOutcome::Halted { platform, status } => self.lifecycle.halt(platform, status),
            PassOutcome::Aborted { platform, .. } => self.lifecycle.fail(Some(platform)),
        }
        self.status()
    }

    /// Bootstrap this facade for `action`; `false` means "return neutral".
    pub async fn ensure_initialized(&self, action: &str) -> bool {
        if ensure(self, self.domain(), action).await {
            return true;
        }
        warn!(
            facade = %self.domain(),
            action,
            "Before {action}, initialize the facade"
        );
        false
    }
}

/// Map an adapter's post-initialize status to an all-required step.
pub fn initialized_step(status: InitializationStatus) -> Step<InitializationStatus> {
    if status == InitializationStatus::Initialized {
        Step::Proceed
    } else {
        Step::Halt(status)
    }
}

#[async_trait]
impl<A> Prerequisite for Facade<A>
where
    A: ?Sized + PlatformService + 'static,
{
    fn describe(&self) -> &'static str {
        "facade initialization"
    }

    fn is_satisfied(&self) -> bool {
        self.is_initialized()
    }

    async fn satisfy(&self) {
        self.initialize_adapters().await;
    }
}

impl<A: ?Sized> std::fmt::Debug for Facade<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Facade")
            .field("lifecycle", &self.lifecycle)
            .field("has_upstream", &self.upstream.is_some())
            .finish()
    }
}
