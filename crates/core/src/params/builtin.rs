// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter keys shipped with the library

use std::fmt;
use std::str::FromStr;

/// Device pairing progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PairingState {
    #[default]
    Unpaired,
    Pairing,
    Paired,
}

impl PairingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairingState::Unpaired => "unpaired",
            PairingState::Pairing => "pairing",
            PairingState::Paired => "paired",
        }
    }
}

impl fmt::Display for PairingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PairingState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaired" => Ok(PairingState::Unpaired),
            "pairing" => Ok(PairingState::Pairing),
            "paired" => Ok(PairingState::Paired),
            other => Err(format!("unknown pairing state: {}", other)),
        }
    }
}

crate::string_parameter!(PairingState);

crate::parameter_key! {
    /// Pairing state of the current device (`"state"`)
    pub PairingStateKey: PairingState = "state", default PairingState::Unpaired
}

crate::parameter_key! {
    /// Signed-in user identifier (`"user_uuid"`)
    pub UserKey: Option<String> = "user_uuid", default None
}
