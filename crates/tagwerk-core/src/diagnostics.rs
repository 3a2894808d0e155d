// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Diagnostic trace bootstrap for embedding hosts.
//
// The relay itself only emits `tracing` events. Hosts without a subscriber
// of their own can call `init` once to get the best-effort human-readable
// lines on stderr. There is no structured log contract.

use crate::config::RelayConfig;

/// Install a stderr fmt subscriber filtered by `RUST_LOG`, falling back to
/// the configured default filter.
///
/// Best-effort: if a global subscriber is already set, this is a no-op.
pub fn init(config: &RelayConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .try_init();
}
