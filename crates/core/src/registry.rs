// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer registry: weakly held observers with ordered fan-out

use crate::event::{EventKind, EventName};
use crate::observer::{Observer, ObserverError, ObserverId};
use crate::params::ParameterStore;
use serde::Deserialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, RwLock, Weak};

/// Registry behavior settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Convert a panicking handler into an `ObserverError::Panicked`
    /// instead of unwinding through the emitting call
    pub catch_panics: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { catch_panics: true }
    }
}

/// A failed delivery to one observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverFailure {
    pub id: ObserverId,
    pub observer: String,
    pub error: ObserverError,
}

/// Outcome of one notify pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Observers whose handler returned successfully
    pub delivered: usize,
    pub failures: Vec<ObserverFailure>,
}

impl Delivery {
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

struct Entry {
    id: ObserverId,
    observer: Weak<dyn Observer>,
}

impl Entry {
    fn is_alive(&self) -> bool {
        self.observer.strong_count() > 0
    }

    /// The entry's `Weak` keeps the allocation reserved, so no other
    /// observer can share its address while the entry exists.
    fn holds<O: ?Sized>(&self, observer: &Arc<O>) -> bool {
        Weak::as_ptr(&self.observer).cast::<()>() == Arc::as_ptr(observer).cast::<()>()
    }
}

/// Holds observers without keeping them alive and fans events out to them.
///
/// Entries are kept in registration order. An observer dropped by its owner
/// is never called again; its entry is compacted on the next registry
/// operation. Clones share the same table.
pub struct ObserverRegistry {
    entries: Arc<RwLock<Vec<Entry>>>,
    next_id: Arc<AtomicU64>,
    config: RegistryConfig,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            config,
        }
    }

    /// Process-wide registry
    pub fn global() -> &'static ObserverRegistry {
        static GLOBAL: OnceLock<ObserverRegistry> = OnceLock::new();
        GLOBAL.get_or_init(ObserverRegistry::new)
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Register an observer. Registering the same observer again is a no-op
    /// that returns the id issued the first time.
    pub fn register<O: Observer + 'static>(&self, observer: &Arc<O>) -> ObserverId {
        let observer: Arc<dyn Observer> = observer.clone();
        self.register_dyn(&observer)
    }

    pub fn register_dyn(&self, observer: &Arc<dyn Observer>) -> ObserverId {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        compact(&mut entries);

        if let Some(entry) = entries.iter().find(|entry| entry.holds(observer)) {
            tracing::debug!(observer = observer.name(), id = %entry.id, "already registered");
            return entry.id;
        }

        let id = ObserverId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        entries.push(Entry {
            id,
            observer: Arc::downgrade(observer),
        });
        tracing::debug!(
            observer = observer.name(),
            %id,
            count = entries.len(),
            "observer registered"
        );
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unregister<O: Observer + ?Sized>(&self, observer: &Arc<O>) -> bool {
        self.remove_where(|entry| entry.holds(observer))
    }

    /// Remove the registration `id` was issued for. Ids of registrations
    /// already removed match nothing and return false.
    pub fn unregister_id(&self, id: ObserverId) -> bool {
        self.remove_where(|entry| entry.id == id)
    }

    fn remove_where(&self, matches: impl Fn(&Entry) -> bool) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        compact(&mut entries);

        match entries.iter().position(matches) {
            Some(index) => {
                let id = entries.remove(index).id;
                tracing::debug!(%id, count = entries.len(), "observer unregistered");
                true
            }
            None => false,
        }
    }

    /// Remove every observer
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    /// Drop entries whose observer is gone. Returns how many were removed.
    pub fn purge(&self) -> usize {
        compact(&mut self.entries.write().unwrap_or_else(|e| e.into_inner()))
    }

    /// Deliver an event to every live observer, in registration order.
    ///
    /// The set of observers is fixed when the call starts; observers
    /// registered or removed by a handler take effect from the next call.
    /// A failing handler is logged and recorded, and delivery continues.
    pub fn notify<K: EventKind>(
        &self,
        name: &EventName<K>,
        parameters: &ParameterStore,
    ) -> Delivery {
        let live = self.live_observers();
        let mut delivery = Delivery::default();

        for (id, observer) in live {
            match self.dispatch(&*observer, name, parameters) {
                Ok(()) => delivery.delivered += 1,
                Err(error) => {
                    tracing::warn!(
                        observer = observer.name(),
                        %id,
                        kind = K::LABEL,
                        event = name.as_str(),
                        %error,
                        "observer failed"
                    );
                    delivery.failures.push(ObserverFailure {
                        id,
                        observer: observer.name().to_string(),
                        error,
                    });
                }
            }
        }

        tracing::trace!(
            kind = K::LABEL,
            event = name.as_str(),
            delivered = delivery.delivered,
            failed = delivery.failures.len(),
            "event dispatched"
        );
        delivery
    }

    /// Number of observers still alive
    pub fn observer_count(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|entry| entry.is_alive())
            .count()
    }

    /// Table size, including dead entries not yet compacted
    pub fn entry_count(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Identities of live observers in registration order
    pub fn observer_ids(&self) -> Vec<ObserverId> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|entry| entry.is_alive())
            .map(|entry| entry.id)
            .collect()
    }

    fn live_observers(&self) -> Vec<(ObserverId, Arc<dyn Observer>)> {
        let (live, dead) = {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            let live: Vec<_> = entries
                .iter()
                .filter_map(|entry| entry.observer.upgrade().map(|o| (entry.id, o)))
                .collect();
            let dead = entries.len() - live.len();
            (live, dead)
        };

        if dead > 0 {
            self.purge();
        }
        live
    }

    fn dispatch<K: EventKind>(
        &self,
        observer: &dyn Observer,
        name: &EventName<K>,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        if !self.config.catch_panics {
            return K::deliver(observer, name, parameters);
        }

        panic::catch_unwind(AssertUnwindSafe(|| K::deliver(observer, name, parameters)))
            .unwrap_or_else(|payload| {
                Err(ObserverError::Panicked(panic_message(payload.as_ref())))
            })
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ObserverRegistry {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            next_id: Arc::clone(&self.next_id),
            config: self.config,
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observer_count())
            .field("config", &self.config)
            .finish()
    }
}

fn compact(entries: &mut Vec<Entry>) -> usize {
    let before = entries.len();
    entries.retain(Entry::is_alive);
    let removed = before - entries.len();
    if removed > 0 {
        tracing::debug!(removed, remaining = entries.len(), "compacted dropped observers");
    }
    removed
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
