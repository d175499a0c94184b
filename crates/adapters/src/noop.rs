// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op observer for when analytics are disabled.

use evtag_core::Observer;

/// Observer that accepts every event and does nothing.
///
/// Used when analytics are disabled or in minimal deployments.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for NoOpObserver {
    fn name(&self) -> &str {
        "noop"
    }
}
