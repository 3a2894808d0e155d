// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// E-commerce event forwarder.
//
// Runs once per tag-manager trigger: reads the externally supplied payload
// and event name, then builds the fixed-shape parameter object and hands it
// to the relay. Every failure is swallowed at this boundary; a trigger can
// never break the hosting page.

use serde_json::{Value, json};
use tagwerk_core::error::{Result, TagwerkError};
use tagwerk_core::types::EventParams;
use tracing::debug;

use crate::relay::Relay;

/// Currency attached to every forwarded e-commerce event.
pub const ECOMMERCE_CURRENCY: &str = "AUD";

/// Inputs supplied by the tag-management trigger mechanism.
#[derive(Debug, Clone, Default)]
pub struct EcommerceTrigger {
    /// The tag manager's debug-mode variable.
    pub debug: bool,
    /// The e-commerce data-layer payload, if the page pushed one.
    pub ecommerce: Option<Value>,
    /// The triggering event's name.
    pub event_name: Option<String>,
}

impl EcommerceTrigger {
    pub fn new(ecommerce: Option<Value>, event_name: Option<String>) -> Self {
        Self {
            debug: false,
            ecommerce,
            event_name,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Forward one e-commerce trigger through the relay.
///
/// Failures never propagate: the event is dropped and, when the trigger's
/// debug flag is set, a trace line records why.
pub fn forward_ecommerce(relay: &Relay, trigger: &EcommerceTrigger) {
    if let Err(err) = try_forward(relay, trigger) {
        if trigger.debug {
            debug!(%err, "e-commerce forward dropped");
        }
    }
}

fn try_forward(relay: &Relay, trigger: &EcommerceTrigger) -> Result<()> {
    let Some(ecommerce) = &trigger.ecommerce else {
        return Err(TagwerkError::MissingField("ecommerce"));
    };
    // An empty event name is as absent as a missing one.
    let event_name = match trigger.event_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(TagwerkError::MissingField("event_name")),
    };

    let mut params = EventParams::new();
    params.insert("currency".into(), json!(ECOMMERCE_CURRENCY));
    params.insert("value".into(), json!(0));
    // `items` is copied verbatim; when the payload has none, the key is
    // simply omitted from the forwarded parameters.
    if let Some(items) = ecommerce.as_object().and_then(|data| data.get("items")) {
        params.insert("items".into(), items.clone());
    }

    relay.log_event(event_name, &params);

    if trigger.debug {
        debug!(event = event_name, "pushed to native bridge");
    }
    Ok(())
}
