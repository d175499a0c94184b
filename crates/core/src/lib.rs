// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! evtag-core: backend-agnostic event tagging
//!
//! This crate provides:
//! - Typed parameter keys and a copy-on-write parameter store
//! - Event names namespaced by kind (views, interactions, actions)
//! - An observer registry that holds observers weakly and fans events out
//! - Emitters and scopes that bind parameter snapshots to event logging

pub mod config;
pub mod emitter;
pub mod event;
pub mod observer;
pub mod params;
pub mod registry;
pub mod scope;

// Re-exports
pub use config::{Config, ConfigError, LogConfig, LogFormat, LogLevel};
pub use emitter::Emitter;
pub use event::{
    Action, ActionKind, EventKind, EventName, Interaction, InteractionKind, TaggedEvent, View,
    ViewKind,
};
pub use observer::{Observer, ObserverError, ObserverId};
pub use params::{
    PairingState, PairingStateKey, Parameter, ParameterError, ParameterKey, ParameterStore,
    ParameterValue, UserKey,
};
pub use registry::{Delivery, ObserverFailure, ObserverRegistry, RegistryConfig};
pub use scope::{ParameterSource, Scope};
