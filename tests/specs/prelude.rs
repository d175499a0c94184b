//! Shared keys and helpers for behavioral specs.

#![allow(dead_code, unused_imports)]

pub use evtag_adapters::{FakeObserver, ObserverCall};
pub use evtag_core::{
    parameter_key, Action, Config, Emitter, Interaction, ObserverRegistry, ParameterStore,
    Scope, View,
};
pub use std::collections::BTreeMap;
pub use std::sync::Arc;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    ContactList,
    Settings,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::ContactList => "contact-list",
            Source::Settings => "settings",
        })
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact-list" => Ok(Source::ContactList),
            "settings" => Ok(Source::Settings),
            other => Err(format!("unknown source: {}", other)),
        }
    }
}

evtag_core::string_parameter!(Source);

parameter_key! {
    /// Screen the event originated from
    pub SourceKey: Option<Source> = "source", default None
}

parameter_key! {
    /// UI component that was used
    pub ComponentKey: Option<String> = "component", default None
}

/// A registry with one fake observer registered
pub fn registry_with_fake() -> (ObserverRegistry, Arc<FakeObserver>) {
    let registry = ObserverRegistry::new();
    let fake = Arc::new(FakeObserver::new());
    registry.register(&fake);
    (registry, fake)
}

/// Build an expected string map from pairs
pub fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
