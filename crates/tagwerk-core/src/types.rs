// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Tagwerk analytics relay.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameter mapping attached to an analytics event.
///
/// Keys are parameter names; values are arbitrary JSON and pass through the
/// relay unvalidated. The mapping only lives for the duration of one
/// dispatch.
pub type EventParams = serde_json::Map<String, Value>;

/// A single analytics event.
///
/// Constructed at the call site and handed to the relay once, then
/// discarded. Events have no identity and no timestamp; the receiving SDK
/// stamps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name. Events with an empty name are dropped by the relay.
    pub name: String,
    /// Optional parameters, empty by default.
    #[serde(default)]
    pub params: EventParams,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: EventParams::new(),
        }
    }

    /// Builder-style parameter insertion.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} params)", self.name, self.params.len())
    }
}

/// A user-scoped property set on the receiving analytics SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProperty {
    /// Property name. Dropped by the relay when empty.
    pub name: String,
    /// Property value. Also dropped by the relay when empty.
    pub value: String,
}

impl UserProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
