// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log backend: writes every event to `tracing`

use evtag_core::{
    Action, ActionKind, EventKind, Interaction, InteractionKind, LogConfig, LogFormat, LogLevel,
    Observer, ObserverError, ParameterStore, View, ViewKind,
};

/// Observer that logs each event as a structured `tracing` event.
///
/// Useful as a debugging backend next to real analytics observers.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver {
    level: LogLevel,
    format: LogFormat,
}

impl TracingObserver {
    pub fn new(level: LogLevel, format: LogFormat) -> Self {
        Self { level, format }
    }

    pub fn from_config(config: &LogConfig) -> Self {
        Self::new(config.level, config.format)
    }

    fn render(&self, parameters: &ParameterStore) -> String {
        match self.format {
            LogFormat::Inline => parameters.describe(),
            LogFormat::List if parameters.is_empty() => String::new(),
            LogFormat::List => format!("\n{}", parameters.debug_describe()),
        }
    }

    fn log(&self, kind: &'static str, event: &str, parameters: &ParameterStore) {
        let rendered = self.render(parameters);
        let count = parameters.len();

        match self.level {
            LogLevel::Trace => {
                tracing::trace!(kind, event, count, parameters = %rendered, "event logged")
            }
            LogLevel::Debug => {
                tracing::debug!(kind, event, count, parameters = %rendered, "event logged")
            }
            LogLevel::Info => {
                tracing::info!(kind, event, count, parameters = %rendered, "event logged")
            }
            LogLevel::Warn => {
                tracing::warn!(kind, event, count, parameters = %rendered, "event logged")
            }
            LogLevel::Error => {
                tracing::error!(kind, event, count, parameters = %rendered, "event logged")
            }
        }
    }
}

impl Observer for TracingObserver {
    fn name(&self) -> &str {
        "tracing"
    }

    fn on_view(&self, view: &View, parameters: &ParameterStore) -> Result<(), ObserverError> {
        self.log(ViewKind::LABEL, view.as_str(), parameters);
        Ok(())
    }

    fn on_interaction(
        &self,
        interaction: &Interaction,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        self.log(InteractionKind::LABEL, interaction.as_str(), parameters);
        Ok(())
    }

    fn on_action(&self, action: &Action, parameters: &ParameterStore) -> Result<(), ObserverError> {
        self.log(ActionKind::LABEL, action.as_str(), parameters);
        Ok(())
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
