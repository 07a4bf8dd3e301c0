//! Bot abstraction for the outbound chat side.
//!
//! [`Bot`] is transport-agnostic; `gbot-telegram` implements it via teloxide,
//! tests implement it with recording stubs.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction over the chat transport's outbound calls.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Shows a typing indicator on the given chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
