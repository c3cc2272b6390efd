use shared::protocol::HostMessage;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::{HostEndpoint, HostError};

/// Host endpoint that forwards every delivery to an async receiver, e.g. a
/// task standing in for the embedding runtime.
#[derive(Debug, Clone)]
pub struct ChannelHost {
    tx: UnboundedSender<HostMessage>,
}

pub fn channel_host() -> (ChannelHost, UnboundedReceiver<HostMessage>) {
    let (tx, rx) = unbounded_channel();
    (ChannelHost { tx }, rx)
}

impl HostEndpoint for ChannelHost {
    fn send_message(&mut self, channel: &str, method: &str, body: &str) -> Result<(), HostError> {
        self.tx
            .send(HostMessage {
                channel: channel.to_string(),
                method: method.to_string(),
                body: body.to_string(),
            })
            .map_err(|_| HostError::Closed)
    }
}
