// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ambient parameter scopes
//!
//! A `Scope` pairs the parameters in effect at some point of a host's
//! context tree with the registry events go to. Child scopes derive new
//! parameters without touching their parent.

use crate::emitter::Emitter;
use crate::params::{ParameterKey, ParameterStore};
use crate::registry::ObserverRegistry;

/// Supplies the parameters currently in effect
pub trait ParameterSource {
    fn current_parameters(&self) -> ParameterStore;
}

impl ParameterSource for ParameterStore {
    fn current_parameters(&self) -> ParameterStore {
        self.clone()
    }
}

#[derive(Debug, Clone)]
pub struct Scope {
    registry: ObserverRegistry,
    parameters: ParameterStore,
}

impl Scope {
    pub fn new(registry: ObserverRegistry) -> Self {
        Self::with_parameters(registry, ParameterStore::new())
    }

    pub fn with_parameters(registry: ObserverRegistry, parameters: ParameterStore) -> Self {
        Self {
            registry,
            parameters,
        }
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    pub fn registry(&self) -> &ObserverRegistry {
        &self.registry
    }

    /// Child scope with `key` set to `value`
    pub fn with<K: ParameterKey>(&self, key: K, value: K::Value) -> Scope {
        Scope {
            registry: self.registry.clone(),
            parameters: self.parameters.clone().with(key, value),
        }
    }

    /// Child scope with `extra` merged over the current parameters
    pub fn with_parameters_appended(&self, extra: &ParameterStore) -> Scope {
        Scope {
            registry: self.registry.clone(),
            parameters: self.parameters.merge(extra),
        }
    }

    /// Emitter bound to a snapshot of this scope's parameters
    pub fn emitter(&self) -> Emitter {
        Emitter::new(self.registry.clone(), self.parameters.clone())
    }
}

impl ParameterSource for Scope {
    fn current_parameters(&self) -> ParameterStore {
        self.parameters.clone()
    }
}
