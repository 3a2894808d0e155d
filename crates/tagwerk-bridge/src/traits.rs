// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Endpoint trait definitions for the native analytics bridge.
//
// Two invocation shapes exist in the wild: an injected object that takes the
// parameter mapping as a pre-serialized JSON string, and a message channel
// that takes a structured message. The relay picks one per call.

use tagwerk_core::error::Result;

use crate::message::BridgeMessage;

/// An injected native object callable directly from the page context.
///
/// Parameters arrive pre-serialized: the relay JSON-encodes the mapping
/// before the call. Implementations must not assume the string is valid
/// JSON of any particular shape.
pub trait DirectEndpoint: Send + Sync {
    /// Record one analytics event.
    fn log_event(&self, name: &str, params_json: &str) -> Result<()>;

    /// Set one user-scoped property.
    fn set_user_property(&self, name: &str, value: &str) -> Result<()>;
}

/// A native message channel reachable from the page context.
///
/// Parameters arrive structured inside the message, NOT pre-serialized;
/// the channel owns any further encoding.
pub trait MessageEndpoint: Send + Sync {
    /// Post one command message to the native side.
    fn post_message(&self, message: &BridgeMessage) -> Result<()>;
}
