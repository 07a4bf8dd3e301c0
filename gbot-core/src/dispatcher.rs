//! Per-message gate: decides whether an inbound message reaches the handler.

use crate::config::ChannelSelector;
use crate::error::Result;
use crate::types::{Handler, Message};
use std::sync::Arc;
use tracing::debug;

/// Invoked once per inbound message. Skips automated authors and messages
/// from other chats; on a match, invokes the handler exactly once. Holds no
/// mutable state, so one instance is shared across concurrent invocations.
pub struct Dispatcher {
    channel: ChannelSelector,
    handler: Arc<dyn Handler>,
}

impl Dispatcher {
    pub fn new(channel: ChannelSelector, handler: Arc<dyn Handler>) -> Self {
        Self { channel, handler }
    }

    /// Gates and forwards one message. Non-matching messages are dropped
    /// silently; handler errors propagate to the caller.
    pub async fn dispatch(&self, message: &Message) -> Result<()> {
        if message.author.is_bot {
            debug!(
                user_id = message.author.id,
                "Skipping message from automated account"
            );
            return Ok(());
        }

        if !self.channel.matches(&message.chat) {
            debug!(
                chat_id = message.chat.id,
                "Skipping message from non-target chat"
            );
            return Ok(());
        }

        self.handler.handle(message).await
    }
}
