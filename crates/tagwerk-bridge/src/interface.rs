// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reference direct-callable endpoint backed by a host analytics SDK.
//
// This is the native side of the bridge: it receives the relay's
// pre-serialized JSON parameters, rebuilds a typed bundle, and hands the
// call to the underlying sink. A malformed parameter string never loses the
// event; it is recorded with an empty bundle.

use tagwerk_core::error::Result;
use tracing::{debug, error};

use crate::bundle::ParamBundle;
use crate::traits::DirectEndpoint;

/// The platform analytics recorder the interface forwards into.
///
/// Stands in for whatever SDK the host links (the bridge does not care).
pub trait AnalyticsSink: Send + Sync {
    /// Record one event with its typed parameters.
    fn record_event(&self, name: &str, params: &ParamBundle) -> Result<()>;

    /// Record one user-scoped property.
    fn record_user_property(&self, name: &str, value: &str) -> Result<()>;
}

/// Direct-callable endpoint exposed into the page context.
pub struct WebInterface<S> {
    sink: S,
}

impl<S: AnalyticsSink> WebInterface<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The wrapped sink, for hosts that also record native-side events.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: AnalyticsSink> DirectEndpoint for WebInterface<S> {
    fn log_event(&self, name: &str, params_json: &str) -> Result<()> {
        debug!(name, params = params_json, "logEvent");
        let bundle = match ParamBundle::from_json(params_json) {
            Ok(bundle) => bundle,
            Err(err) => {
                error!(%err, name, "error parsing event parameters");
                ParamBundle::new()
            }
        };
        self.sink.record_event(name, &bundle)
    }

    fn set_user_property(&self, name: &str, value: &str) -> Result<()> {
        debug!(name, value, "setUserProperty");
        self.sink.record_user_property(name, value)
    }
}
