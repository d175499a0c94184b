// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer capability and identity

use crate::event::{Action, Interaction, View};
use crate::params::ParameterStore;
use std::fmt;
use thiserror::Error;

/// Errors raised by observer handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserverError {
    #[error("handler failed: {0}")]
    Failed(String),
    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl ObserverError {
    pub fn failed(message: impl Into<String>) -> Self {
        ObserverError::Failed(message.into())
    }
}

/// Receives logged events. Generally this wraps an analytics backend, but it
/// can equally provide logging or debugging.
///
/// Every handler defaults to a no-op so an observer implements only the
/// kinds it cares about.
pub trait Observer: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn on_view(&self, _view: &View, _parameters: &ParameterStore) -> Result<(), ObserverError> {
        Ok(())
    }

    fn on_interaction(
        &self,
        _interaction: &Interaction,
        _parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        Ok(())
    }

    fn on_action(
        &self,
        _action: &Action,
        _parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        Ok(())
    }
}

/// Identity of one registration, issued by the registry.
///
/// Ids are never reused, so a stale id cannot match a later registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub(crate) fn new(n: u64) -> Self {
        Self(n)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer-{}", self.0)
    }
}
