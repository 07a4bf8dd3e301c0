//! Completion seam: the one outbound call to the text-completion API.

use crate::error::Result;
use async_trait::async_trait;

/// Turns an inbound message text into completion text. The production
/// implementation lives in the `completion-client` crate; tests stub it.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Builds the prompt from the message text, calls the completion
    /// endpoint, and returns the generated text.
    async fn get_response(&self, message_text: &str) -> Result<String>;
}
