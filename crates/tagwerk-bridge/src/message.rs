// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Structured command messages for the message-channel endpoint.

use serde::{Deserialize, Serialize};
use tagwerk_core::types::EventParams;

/// One command posted to a [`crate::MessageEndpoint`].
///
/// The JSON form is the wire shape the native side expects: a `command`
/// discriminator plus the payload fields, e.g.
/// `{"command":"logEvent","name":"purchase","parameters":{...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum BridgeMessage {
    /// Record an event. `parameters` stays a structured mapping.
    #[serde(rename = "logEvent")]
    LogEvent {
        name: String,
        parameters: EventParams,
    },
    /// Set a user-scoped property.
    #[serde(rename = "setUserProperty")]
    SetUserProperty { name: String, value: String },
}

impl BridgeMessage {
    /// The `command` discriminator this message carries on the wire.
    pub fn command(&self) -> &'static str {
        match self {
            Self::LogEvent { .. } => "logEvent",
            Self::SetUserProperty { .. } => "setUserProperty",
        }
    }
}
