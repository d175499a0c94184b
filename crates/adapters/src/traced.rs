// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced observer wrapper for consistent observability

use evtag_core::{
    Action, ActionKind, EventKind, EventName, Interaction, InteractionKind, Observer,
    ObserverError, ParameterStore, View, ViewKind,
};

/// Wrapper that adds tracing to any Observer
#[derive(Clone, Debug)]
pub struct TracedObserver<O> {
    inner: O,
}

impl<O> TracedObserver<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O: Observer> TracedObserver<O> {
    fn traced<K: EventKind>(
        &self,
        name: &EventName<K>,
        parameters: &ParameterStore,
        handler: impl FnOnce(&O) -> Result<(), ObserverError>,
    ) -> Result<(), ObserverError> {
        let span = tracing::info_span!(
            "observer.deliver",
            observer = self.inner.name(),
            kind = K::LABEL,
            event = name.as_str()
        );
        let _guard = span.enter();

        tracing::debug!(count = parameters.len(), "delivering");

        let start = std::time::Instant::now();
        let result = handler(&self.inner);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "delivered"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "handler failed"
            ),
        }

        result
    }
}

impl<O: Observer> Observer for TracedObserver<O> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn on_view(&self, view: &View, parameters: &ParameterStore) -> Result<(), ObserverError> {
        self.traced::<ViewKind>(view, parameters, |inner| inner.on_view(view, parameters))
    }

    fn on_interaction(
        &self,
        interaction: &Interaction,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        self.traced::<InteractionKind>(interaction, parameters, |inner| {
            inner.on_interaction(interaction, parameters)
        })
    }

    fn on_action(&self, action: &Action, parameters: &ParameterStore) -> Result<(), ObserverError> {
        self.traced::<ActionKind>(action, parameters, |inner| inner.on_action(action, parameters))
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
