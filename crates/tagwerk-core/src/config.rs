// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host-supplied relay configuration.

use serde::{Deserialize, Serialize};

/// Settings the embedding host hands to the relay and forwarder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Emit verbose per-trigger traces from the forwarder (the tag manager's
    /// debug-mode variable).
    pub debug_mode: bool,
    /// Default `tracing` filter used by [`crate::diagnostics::init`] when
    /// `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            log_filter: "info".into(),
        }
    }
}
