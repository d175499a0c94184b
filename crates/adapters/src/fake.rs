// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake observer for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use evtag_core::{
    Action, ActionKind, EventKind, EventName, Interaction, InteractionKind, Observer,
    ObserverError, ParameterStore, View, ViewKind,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Recorded observer call
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverCall {
    pub kind: &'static str,
    pub name: String,
    pub parameters: ParameterStore,
}

impl ObserverCall {
    /// Parameters rendered to strings
    pub fn params(&self) -> BTreeMap<String, String> {
        self.parameters.to_string_map()
    }
}

/// Fake observer for testing
///
/// Records every delivered event. Can be primed to fail so isolation of
/// misbehaving backends can be exercised.
#[derive(Default)]
pub struct FakeObserver {
    calls: Mutex<Vec<ObserverCall>>,
    failure: Mutex<Option<String>>,
}

impl FakeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ObserverCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Most recent call, if any
    pub fn last(&self) -> Option<ObserverCall> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Fail every following call with `message` (calls are still recorded)
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }

    pub fn succeed(&self) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    fn record<K: EventKind>(
        &self,
        name: &EventName<K>,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ObserverCall {
                kind: K::LABEL,
                name: name.as_str().to_string(),
                parameters: parameters.clone(),
            });

        match self
            .failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            Some(message) => Err(ObserverError::failed(message.clone())),
            None => Ok(()),
        }
    }
}

impl Observer for FakeObserver {
    fn name(&self) -> &str {
        "fake"
    }

    fn on_view(&self, view: &View, parameters: &ParameterStore) -> Result<(), ObserverError> {
        self.record::<ViewKind>(view, parameters)
    }

    fn on_interaction(
        &self,
        interaction: &Interaction,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        self.record::<InteractionKind>(interaction, parameters)
    }

    fn on_action(&self, action: &Action, parameters: &ParameterStore) -> Result<(), ObserverError> {
        self.record::<ActionKind>(action, parameters)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
