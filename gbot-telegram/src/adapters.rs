//! Adapters from Telegram (teloxide) types to gbot_core types.
//! Depends only on teloxide and gbot_core type definitions.

use gbot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
            is_bot: self.0.is_bot,
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            author: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                // Senderless updates (channel posts, service messages) get an
                // automated placeholder author so the dispatcher skips them.
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                    is_bot: true,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                name: self
                    .0
                    .chat
                    .title()
                    .or_else(|| self.0.chat.username())
                    .map(|s| s.to_string()),
            },
            content: self.0.text().unwrap_or("").to_string(),
        }
    }
}
