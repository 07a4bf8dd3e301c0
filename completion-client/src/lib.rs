//! # completion-client
//!
//! Thin wrapper around [async-openai]'s legacy text-completions endpoint.
//! Holds the API key as an explicit handle (no process-wide client state),
//! builds the prompt from the configured template, and returns the first
//! choice's text. Provides key masking for safe logging.

use async_openai::{config::OpenAIConfig, types::CreateCompletionRequestArgs, Client};
use async_trait::async_trait;
use gbot_core::{
    substitute, BridgeConfig, BridgeError, Completer, Result, MESSAGE_PLACEHOLDER,
};
use std::sync::Arc;

/// Fixed generation-length cap for every completion request.
pub const MAX_COMPLETION_TOKENS: u16 = 2048;

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_key(key: &str) -> String {
    let len = key.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head_len = 7.min(len);
        let tail_len = 4.min(len.saturating_sub(head_len));
        let head = &key[..head_len];
        let tail = if tail_len > 0 { &key[len - tail_len..] } else { "" };
        format!("{}***{}", head, tail)
    }
}

/// Completion client: async-openai client plus the model and prompt template.
/// One instance is built at startup and shared for the process lifetime.
#[derive(Clone)]
pub struct CompletionClient {
    /// Shared async-openai client used for all API calls.
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    prompt_template: String,
    /// API key stored only for logging (masked). None when created via `with_client()`.
    api_key_for_logging: Option<String>,
}

impl CompletionClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        prompt_template: impl Into<String>,
    ) -> Self {
        let api_key = api_key.into();
        let config = OpenAIConfig::new().with_api_key(api_key.clone());
        Self {
            client: Arc::new(Client::with_config(config)),
            model: model.into(),
            prompt_template: prompt_template.into(),
            api_key_for_logging: Some(api_key),
        }
    }

    /// Builds a client with a custom API base URL (proxies, compatible
    /// endpoints, mock servers).
    pub fn with_api_base(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        model: impl Into<String>,
        prompt_template: impl Into<String>,
    ) -> Self {
        let api_key = api_key.into();
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(api_base.into());
        Self {
            client: Arc::new(Client::with_config(config)),
            model: model.into(),
            prompt_template: prompt_template.into(),
            api_key_for_logging: Some(api_key),
        }
    }

    /// Builds a client from an existing async-openai client (no API key
    /// stored for logging).
    pub fn with_client(
        client: Client<OpenAIConfig>,
        model: impl Into<String>,
        prompt_template: impl Into<String>,
    ) -> Self {
        Self {
            client: Arc::new(client),
            model: model.into(),
            prompt_template: prompt_template.into(),
            api_key_for_logging: None,
        }
    }

    /// Builds the client from a validated bridge config.
    pub fn from_config(config: &BridgeConfig) -> Self {
        match &config.openai_api_base {
            Some(base) => Self::with_api_base(
                &config.api_key,
                base,
                &config.model,
                &config.prompt_template,
            ),
            None => Self::new(&config.api_key, &config.model, &config.prompt_template),
        }
    }

    /// Substitutes the message text into the prompt template at `{message}`
    /// (first occurrence only).
    pub fn build_prompt(&self, message_text: &str) -> String {
        substitute(&self.prompt_template, MESSAGE_PLACEHOLDER, message_text)
    }
}

#[async_trait]
impl Completer for CompletionClient {
    /// Sends one completion request and returns the first choice's text.
    ///
    /// Logs the model and masked API key before the call. Every builder,
    /// transport, auth, or API failure maps to [`BridgeError::Completion`]
    /// carrying the cause; an empty choice list does too. No retry.
    async fn get_response(&self, message_text: &str) -> Result<String> {
        let prompt = self.build_prompt(message_text);
        let masked = self
            .api_key_for_logging
            .as_deref()
            .map(mask_key)
            .unwrap_or_else(|| "***".to_string());

        tracing::info!(
            model = %self.model,
            api_key = %masked,
            "Completion request"
        );

        let request = CreateCompletionRequestArgs::default()
            .model(self.model.as_str())
            .prompt(prompt)
            .max_tokens(MAX_COMPLETION_TOKENS)
            .build()
            .map_err(|e| BridgeError::completion("Failed to build completion request", e))?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "Completion request JSON");
        }

        let response = self
            .client
            .completions()
            .create(request)
            .await
            .map_err(|e| BridgeError::completion("Completion request failed", e))?;

        match response.choices.first() {
            Some(choice) => Ok(choice.text.clone()),
            None => Err(BridgeError::completion_msg(
                "No completion choices in response",
            )),
        }
    }
}
