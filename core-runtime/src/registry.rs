//! Per-domain adapter registry.
//!
//! Maps [`PlatformId`] to one adapter. Insertion order is preserved and is the
//! orchestration order: the first registered adapter is authoritative for
//! "primary" queries (device type, language, sign-in level). Registries only
//! grow; there is no removal.

use bridge_traits::{PlatformId, PlatformService};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::events::Domain;

pub struct AdapterRegistry<A: ?Sized> {
    domain: Domain,
    adapters: RwLock<IndexMap<PlatformId, Arc<A>>>,
}

impl<A: ?Sized + PlatformService> AdapterRegistry<A> {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            adapters: RwLock::new(IndexMap::new()),
        }
    }

    /// Insert an adapter under its platform.
    ///
    /// A second adapter for an already registered platform is ignored; the
    /// return value tells whether the adapter was inserted.
    pub fn register(&self, adapter: Arc<A>) -> bool {
        let platform = adapter.platform();
        let mut adapters = self.adapters.write();

        if adapters.contains_key(&platform) {
            debug!(
                facade = %self.domain,
                %platform,
                "The platform has already been registered"
            );
            return false;
        }

        adapters.insert(platform, adapter);
        debug!(facade = %self.domain, %platform, "Platform is registered");
        true
    }

    pub fn resolve(&self, platform: PlatformId) -> Option<Arc<A>> {
        self.adapters.read().get(&platform).cloned()
    }

    /// First registered adapter.
    pub fn primary(&self) -> Option<Arc<A>> {
        self.adapters
            .read()
            .first()
            .map(|(_, adapter)| Arc::clone(adapter))
    }

    /// Snapshot of every `(platform, adapter)` pair in registration order.
    ///
    /// Orchestration iterates the snapshot so no lock is held across `.await`.
    pub fn all(&self) -> AdapterSnapshot<A> {
        let entries = self
            .adapters
            .read()
            .iter()
            .map(|(platform, adapter)| (*platform, Arc::clone(adapter)))
            .collect();
        AdapterSnapshot { entries }
    }

    pub fn platforms(&self) -> Vec<PlatformId> {
        self.adapters.read().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.adapters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.read().is_empty()
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }
}

/// Ordered, finite, restartable view of a registry at one point in time.
pub struct AdapterSnapshot<A: ?Sized> {
    entries: Vec<(PlatformId, Arc<A>)>,
}

impl<A: ?Sized> AdapterSnapshot<A> {
    pub fn iter(&self) -> impl Iterator<Item = (PlatformId, &Arc<A>)> + '_ {
        self.entries
            .iter()
            .map(|(platform, adapter)| (*platform, adapter))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: ?Sized> Clone for AdapterSnapshot<A> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<A: ?Sized> IntoIterator for AdapterSnapshot<A> {
    type Item = (PlatformId, Arc<A>);
    type IntoIter = std::vec::IntoIter<(PlatformId, Arc<A>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
