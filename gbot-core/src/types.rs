//! Core types: user, chat, message, and the per-message Handler trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Author identity (id, username, names, automated flag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// True for automated accounts; the dispatcher never forwards their messages.
    pub is_bot: bool,
}

impl User {
    /// Name for log lines: username, else first/last name, else the numeric id.
    pub fn display_name(&self) -> String {
        if let Some(ref username) = self.username {
            return username.clone();
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.id.to_string(),
        }
    }
}

/// Chat (channel) identity: numeric id plus the human-readable name when the
/// transport provides one (group title, channel name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub name: Option<String>,
}

/// A single inbound message. Read once and discarded; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub author: User,
    pub chat: Chat,
    pub content: String,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Per-message strategy invoked by the dispatcher for every message that passes
/// the channel and author gates. Supplied at construction; the default
/// implementation is [`crate::pipeline::CompletionPipeline`].
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<()>;
}
