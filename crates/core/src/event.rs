// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event names, event kinds and tagged events

use crate::observer::{Observer, ObserverError};
use crate::params::{ParameterKey, ParameterStore};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A class of events with its own namespace and observer handler.
///
/// Names of different kinds are different types, so a view and an
/// interaction sharing a backing string never compare equal.
pub trait EventKind:
    Copy + Default + fmt::Debug + Eq + Ord + Hash + Send + Sync + 'static
{
    /// Kind label used in logs and recorded calls
    const LABEL: &'static str;

    /// Route an event of this kind to the matching observer handler
    fn deliver(
        observer: &dyn Observer,
        name: &EventName<Self>,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError>;
}

/// Screen or page views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewKind;

/// User interactions (taps, submits, toggles)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InteractionKind;

/// Product milestones such as sign-in or pairing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionKind;

impl EventKind for ViewKind {
    const LABEL: &'static str = "view";

    fn deliver(
        observer: &dyn Observer,
        name: &EventName<Self>,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        observer.on_view(name, parameters)
    }
}

impl EventKind for InteractionKind {
    const LABEL: &'static str = "interaction";

    fn deliver(
        observer: &dyn Observer,
        name: &EventName<Self>,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        observer.on_interaction(name, parameters)
    }
}

impl EventKind for ActionKind {
    const LABEL: &'static str = "action";

    fn deliver(
        observer: &dyn Observer,
        name: &EventName<Self>,
        parameters: &ParameterStore,
    ) -> Result<(), ObserverError> {
        observer.on_action(name, parameters)
    }
}

/// A string-backed event identity within kind `K`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventName<K> {
    name: String,
    kind: PhantomData<K>,
}

pub type View = EventName<ViewKind>;
pub type Interaction = EventName<InteractionKind>;
pub type Action = EventName<ActionKind>;

impl<K: EventKind> EventName<K> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &'static str {
        K::LABEL
    }

    pub fn into_string(self) -> String {
        self.name
    }
}

impl<K: EventKind> fmt::Display for EventName<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<K: EventKind> From<&str> for EventName<K> {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl<K: EventKind> From<String> for EventName<K> {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Action {
    pub fn terms_accepted() -> Self {
        Self::new("terms_accepted")
    }

    pub fn signin() -> Self {
        Self::new("signin")
    }

    pub fn pair() -> Self {
        Self::new("pair")
    }
}

/// An event name carrying its own parameters.
///
/// ```
/// use evtag_core::event::{Action, TaggedEvent};
/// use evtag_core::params::{PairingState, PairingStateKey, UserKey};
///
/// let event = TaggedEvent::new(Action::pair())
///     .param(PairingStateKey, PairingState::Paired)
///     .param(UserKey, Some("1234".to_string()));
/// assert_eq!(event.to_string(), "pair | state:paired user_uuid:1234");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedEvent<K> {
    name: EventName<K>,
    parameters: ParameterStore,
}

impl<K: EventKind> TaggedEvent<K> {
    pub fn new(name: EventName<K>) -> Self {
        Self {
            name,
            parameters: ParameterStore::new(),
        }
    }

    /// Attach a parameter; later calls for the same key win
    pub fn param<P: ParameterKey>(mut self, key: P, value: P::Value) -> Self {
        self.parameters.set(key, value);
        self
    }

    pub fn name(&self) -> &EventName<K> {
        &self.name
    }

    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    /// Multi-line rendering: `Event 'pair'` followed by `- id: value` lines
    pub fn debug_describe(&self) -> String {
        if self.parameters.is_empty() {
            return format!("Event '{}'", self.name);
        }
        format!("Event '{}'\n{}", self.name, self.parameters.debug_describe())
    }
}

impl<K: EventKind> fmt::Display for TaggedEvent<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.parameters.is_empty() {
            return Ok(());
        }
        f.write_str(" |")?;
        for (key, value) in self.parameters.iter() {
            write!(f, " {}:{}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
