//! The default per-message strategy: typing, complete, render, send.

use crate::bot::Bot;
use crate::completion::Completer;
use crate::error::Result;
use crate::template::{substitute, RESPONSE_PLACEHOLDER};
use crate::types::{Handler, Message};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Fixed six-step sequence run for every matched message: typing indicator,
/// log the question, call the completer, log the answer, substitute it into
/// the response template, send. No state across calls; a completion error
/// propagates via `?` and nothing is sent.
pub struct CompletionPipeline {
    bot: Arc<dyn Bot>,
    completer: Arc<dyn Completer>,
    response_template: String,
}

impl CompletionPipeline {
    pub fn new(
        bot: Arc<dyn Bot>,
        completer: Arc<dyn Completer>,
        response_template: impl Into<String>,
    ) -> Self {
        Self {
            bot,
            completer,
            response_template: response_template.into(),
        }
    }
}

#[async_trait]
impl Handler for CompletionPipeline {
    async fn handle(&self, message: &Message) -> Result<()> {
        self.bot.send_typing(&message.chat).await?;

        info!(
            author = %message.author.display_name(),
            content = %message.content,
            "New question"
        );

        let response = self.completer.get_response(&message.content).await?;

        info!(response = %response, "Completion response");

        let rendered = substitute(&self.response_template, RESPONSE_PLACEHOLDER, &response);
        self.bot.send_message(&message.chat, &rendered).await
    }
}
