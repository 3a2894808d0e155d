// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge detector and dispatcher.
//
// Probes the host environment for a native analytics endpoint in fixed
// priority order (injected object first, then message channel) and forwards
// each call to the first match. Fire-and-forget: nothing is acknowledged or
// retried, and failures are logged while the event itself is dropped.

use tagwerk_bridge::{Bridge, BridgeMessage, HostEnvironment};
use tagwerk_core::error::{Result, TagwerkError};
use tagwerk_core::types::{Event, EventParams, UserProperty};
use tracing::{debug, warn};

/// The dispatcher the page-side emitters hand their events to.
///
/// Holds no state beyond the endpoint handles; every call is independent,
/// so a `Relay` can be shared across threads freely.
pub struct Relay {
    env: HostEnvironment,
}

impl Relay {
    pub fn new(env: HostEnvironment) -> Self {
        Self { env }
    }

    /// Forward one analytics event to whichever native endpoint is present.
    ///
    /// An empty `name` drops the call before any probing. The direct
    /// endpoint receives the parameters as a JSON string; the message
    /// channel receives them structured. At most one endpoint is invoked.
    pub fn log_event(&self, name: &str, params: &EventParams) {
        if name.is_empty() {
            return;
        }
        swallow(name, "event", self.dispatch_event(name, params));
    }

    /// Forward one user property.
    ///
    /// Unlike [`Self::log_event`], an empty `value` also drops the call.
    pub fn set_user_property(&self, name: &str, value: &str) {
        if name.is_empty() || value.is_empty() {
            return;
        }
        swallow(name, "user property", self.dispatch_user_property(name, value));
    }

    fn dispatch_event(&self, name: &str, params: &EventParams) -> Result<()> {
        match self.env.detect() {
            Bridge::Direct(endpoint) => {
                let json = serde_json::to_string(params)?;
                endpoint.log_event(name, &json)
            }
            Bridge::Channel(endpoint) => endpoint.post_message(&BridgeMessage::LogEvent {
                name: name.to_owned(),
                parameters: params.clone(),
            }),
            Bridge::Unavailable => Err(TagwerkError::BridgeUnavailable),
        }
    }

    fn dispatch_user_property(&self, name: &str, value: &str) -> Result<()> {
        match self.env.detect() {
            Bridge::Direct(endpoint) => endpoint.set_user_property(name, value),
            Bridge::Channel(endpoint) => endpoint.post_message(&BridgeMessage::SetUserProperty {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
            Bridge::Unavailable => Err(TagwerkError::BridgeUnavailable),
        }
    }

    /// Dispatch an [`Event`] value.
    pub fn emit(&self, event: &Event) {
        self.log_event(&event.name, &event.params);
    }

    /// Dispatch a [`UserProperty`] value.
    pub fn set_property(&self, property: &UserProperty) {
        self.set_user_property(&property.name, &property.value);
    }
}

/// Log-and-drop boundary for one dispatch outcome.
fn swallow(name: &str, kind: &str, outcome: Result<()>) {
    match outcome {
        Ok(()) => {}
        Err(TagwerkError::BridgeUnavailable) => debug!(name, "no native bridge found"),
        Err(err) => warn!(%err, name, kind, "dropping call"),
    }
}
