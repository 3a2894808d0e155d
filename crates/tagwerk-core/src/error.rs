// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Tagwerk.

use thiserror::Error;

/// Top-level error type for all Tagwerk operations.
///
/// Nothing here is fatal. Every variant is swallowed at the relay or
/// forwarder boundary; the event is dropped and at most a trace line is
/// emitted.
#[derive(Debug, Error)]
pub enum TagwerkError {
    // -- Dispatch errors --
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    #[error("no native bridge available")]
    BridgeUnavailable,

    #[error("parameter serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Native endpoint errors --
    #[error("parameter bundle conversion failed: {0}")]
    BundleConversion(String),

    #[error("native endpoint error: {0}")]
    Endpoint(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TagwerkError>;
