// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed event parameters
//!
//! This module provides:
//! - `ParameterKey` - Compile-time keys with an identifier and a default
//! - `ParameterStore` - Copy-on-write bag of parameters with merge semantics
//! - `ParameterValue` - The closed set of storable value shapes

mod builtin;
mod key;
mod store;
mod value;

pub use builtin::{PairingState, PairingStateKey, UserKey};
pub use key::{Parameter, ParameterKey};
pub use store::{ParameterError, ParameterStore};
pub use value::ParameterValue;
