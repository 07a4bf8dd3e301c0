//! Teloxide-based implementation of the core [`Bot`] trait.

use async_trait::async_trait;
use gbot_core::{Bot, BridgeError, Chat, Result};
use teloxide::prelude::*;
use teloxide::types::ChatAction;

/// Maps core outbound calls to the Telegram Bot API: `send_message` →
/// `sendMessage`, `send_typing` → `sendChatAction(typing)`.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Bot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| BridgeError::Chat(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| BridgeError::Chat(e.to_string()))?;
        Ok(())
    }
}
