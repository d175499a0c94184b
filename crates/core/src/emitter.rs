// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emitter: logs events with a captured parameter snapshot

use crate::event::{Action, EventKind, EventName, Interaction, TaggedEvent, View};
use crate::params::ParameterStore;
use crate::registry::{Delivery, ObserverRegistry};

/// Logs events through a registry using the parameters captured when the
/// emitter was created.
///
/// Every call reads the snapshot; per-call parameters are merged into a
/// fresh store and never written back.
#[derive(Debug, Clone)]
pub struct Emitter {
    registry: ObserverRegistry,
    snapshot: ParameterStore,
}

impl Emitter {
    pub fn new(registry: ObserverRegistry, snapshot: ParameterStore) -> Self {
        Self { registry, snapshot }
    }

    pub fn snapshot(&self) -> &ParameterStore {
        &self.snapshot
    }

    pub fn registry(&self) -> &ObserverRegistry {
        &self.registry
    }

    /// Log `name` with the snapshot unmodified
    pub fn emit<K: EventKind>(&self, name: &EventName<K>) -> Delivery {
        self.registry.notify(name, &self.snapshot)
    }

    /// Log `name` with the snapshot overlaid by `extra`
    pub fn emit_appending<K: EventKind>(
        &self,
        name: &EventName<K>,
        extra: &ParameterStore,
    ) -> Delivery {
        self.registry.notify(name, &self.snapshot.merge(extra))
    }

    /// Log `name` with `parameters` only, ignoring the snapshot
    pub fn emit_replacing<K: EventKind>(
        &self,
        name: &EventName<K>,
        parameters: &ParameterStore,
    ) -> Delivery {
        self.registry.notify(name, parameters)
    }

    /// Log a tagged event, appending its own parameters to the snapshot
    pub fn emit_tagged<K: EventKind>(&self, event: &TaggedEvent<K>) -> Delivery {
        self.emit_appending(event.name(), event.parameters())
    }

    pub fn view(&self, view: &View) -> Delivery {
        self.emit(view)
    }

    pub fn interaction(&self, interaction: &Interaction) -> Delivery {
        self.emit(interaction)
    }

    pub fn action(&self, action: &Action) -> Delivery {
        self.emit(action)
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
