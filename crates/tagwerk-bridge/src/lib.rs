// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tagwerk — Native analytics bridge abstractions.
//
// This crate defines the endpoint traits and the capability-detection logic
// for the native analytics bridge. The relay talks through a single
// interface to whichever endpoint the hosting environment exposes: the
// injected direct-callable object when present, otherwise a message-posting
// channel, otherwise nothing.

pub mod bundle;
pub mod interface;
pub mod message;
pub mod traits;

pub use bundle::{BundleValue, ParamBundle};
pub use interface::{AnalyticsSink, WebInterface};
pub use message::BridgeMessage;
pub use traits::{DirectEndpoint, MessageEndpoint};

use std::sync::Arc;

/// The native endpoint selected for one dispatch.
///
/// Selection happens once per call; exactly one variant's endpoint is ever
/// invoked, even when the host registered both.
#[derive(Clone)]
pub enum Bridge {
    /// An injected object callable with pre-serialized JSON parameters.
    Direct(Arc<dyn DirectEndpoint>),
    /// A message channel accepting structured [`BridgeMessage`]s.
    Channel(Arc<dyn MessageEndpoint>),
    /// No native endpoint is reachable; the dispatch becomes a no-op.
    Unavailable,
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Bridge::Direct"),
            Self::Channel(_) => f.write_str("Bridge::Channel"),
            Self::Unavailable => f.write_str("Bridge::Unavailable"),
        }
    }
}

/// The endpoints the embedding host has registered.
///
/// Mirrors the capability surface of a web page: the injected object and the
/// message channel may each be present or absent, independently.
#[derive(Clone, Default)]
pub struct HostEnvironment {
    direct: Option<Arc<dyn DirectEndpoint>>,
    channel: Option<Arc<dyn MessageEndpoint>>,
}

impl HostEnvironment {
    /// An environment with no native endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the direct-callable endpoint.
    pub fn with_direct(mut self, endpoint: Arc<dyn DirectEndpoint>) -> Self {
        self.direct = Some(endpoint);
        self
    }

    /// Register the message-channel endpoint.
    pub fn with_channel(mut self, endpoint: Arc<dyn MessageEndpoint>) -> Self {
        self.channel = Some(endpoint);
        self
    }

    /// Ordered capability probe.
    ///
    /// The direct injected object always wins over the message channel;
    /// first match is the only endpoint the caller may invoke.
    pub fn detect(&self) -> Bridge {
        if let Some(direct) = &self.direct {
            Bridge::Direct(Arc::clone(direct))
        } else if let Some(channel) = &self.channel {
            Bridge::Channel(Arc::clone(channel))
        } else {
            Bridge::Unavailable
        }
    }
}
