//! Outbound, ordered event channel from the page to the embedding host.
//!
//! The host may not exist yet when the page starts emitting. Until it is
//! attached every message waits in a FIFO queue; `ready()` drains it.

use std::{collections::VecDeque, fmt};

use serde_json::Value;
use shared::protocol::{BridgeEvent, Envelope};
use thiserror::Error;
use tracing::{debug, info, warn};

mod channel_host;

pub use channel_host::{channel_host, ChannelHost};

pub const DEFAULT_CHANNEL: &str = "WebBridge";
pub const DEFAULT_METHOD: &str = "OnBrowserEvent";

#[derive(Debug, Error)]
pub enum HostError {
    #[error("host endpoint is closed")]
    Closed,
    #[error("host rejected message: {0}")]
    Rejected(String),
}

/// The host's message-receiving function: `sendMessage(channel, method, body)`.
pub trait HostEndpoint {
    fn send_message(&mut self, channel: &str, method: &str, body: &str) -> Result<(), HostError>;
}

impl<F> HostEndpoint for F
where
    F: FnMut(&str, &str, &str) -> Result<(), HostError>,
{
    fn send_message(&mut self, channel: &str, method: &str, body: &str) -> Result<(), HostError> {
        self(channel, method, body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub channel: String,
    pub method: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.into(),
            method: DEFAULT_METHOD.into(),
        }
    }
}

enum HostState {
    NotReady,
    Ready(Box<dyn HostEndpoint>),
}

pub struct EventBridge {
    config: BridgeConfig,
    host: HostState,
    queue: VecDeque<String>,
}

impl fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBridge")
            .field("config", &self.config)
            .field("ready", &self.is_ready())
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl Default for EventBridge {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl EventBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            host: HostState::NotReady,
            queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Makes the host callable. Queued messages stay queued until the next
    /// `emit` or `ready`.
    pub fn attach_host(&mut self, host: impl HostEndpoint + 'static) {
        info!(
            channel = self.config.channel.as_str(),
            pending = self.queue.len(),
            "host endpoint attached"
        );
        self.host = HostState::Ready(Box::new(host));
    }

    pub fn detach_host(&mut self) -> Option<Box<dyn HostEndpoint>> {
        match std::mem::replace(&mut self.host, HostState::NotReady) {
            HostState::Ready(host) => Some(host),
            HostState::NotReady => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.host, HostState::Ready(_))
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn emit(&mut self, event_type: &str, payload: Value) {
        let envelope = Envelope {
            event_type: event_type.to_string(),
            payload,
        };
        match serde_json::to_string(&envelope) {
            Ok(wire) => self.send_or_queue(wire),
            Err(err) => warn!(event_type, "dropping unserializable event: {err}"),
        }
    }

    pub fn emit_event(&mut self, event: &BridgeEvent) {
        match serde_json::to_string(event) {
            Ok(wire) => self.send_or_queue(wire),
            Err(err) => warn!(?event, "dropping unserializable event: {err}"),
        }
    }

    /// Host signalled readiness: deliver everything queued, oldest first.
    /// Returns the number of messages handed to the host.
    pub fn ready(&mut self) -> usize {
        if !self.is_ready() {
            debug!(pending = self.queue.len(), "ready() before host attached");
            return 0;
        }
        self.flush()
    }

    fn send_or_queue(&mut self, wire: String) {
        if self.is_ready() {
            // Older messages go first even if ready() has not run yet.
            self.flush();
            self.deliver(&wire);
        } else {
            debug!(pending = self.queue.len() + 1, "host not ready; queued event");
            self.queue.push_back(wire);
        }
    }

    fn flush(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(wire) = self.queue.pop_front() {
            self.deliver(&wire);
            delivered += 1;
        }
        delivered
    }

    fn deliver(&mut self, wire: &str) {
        let HostState::Ready(host) = &mut self.host else {
            return;
        };
        if let Err(err) = host.send_message(&self.config.channel, &self.config.method, wire) {
            warn!(
                channel = self.config.channel.as_str(),
                method = self.config.method.as_str(),
                "host delivery failed, message dropped: {err}"
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
