//! Bridge configuration: written once at startup, read-only afterwards.
//!
//! Construction is programmatic via [`BridgeConfig::builder`]; no file or env
//! format lives here (the CLI crate reads env and feeds the builder). `build()`
//! validates everything fail-fast, so a misconfigured bridge never connects.

use crate::error::{BridgeError, Result};
use crate::template::{MESSAGE_PLACEHOLDER, RESPONSE_PLACEHOLDER};
use crate::types::Chat;

/// Default completion model when none is configured.
pub const DEFAULT_MODEL: &str = "text-davinci-003";

/// Default prompt template; `{message}` is replaced with the inbound text.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "User: {message}\n\nAssistant:\n\n";

/// Default response template; `{response}` is replaced with the completion.
pub const DEFAULT_RESPONSE_TEMPLATE: &str = "{response}";

/// Which channel the bridge listens on: numeric chat id or chat name.
/// When the caller supplies both, the id wins and the name is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSelector {
    Id(i64),
    Name(String),
}

impl ChannelSelector {
    /// True if the given chat is the configured channel. Ids compare
    /// numerically; names compare exactly against the chat's name, so a chat
    /// without a name never matches a name selector.
    pub fn matches(&self, chat: &Chat) -> bool {
        match self {
            ChannelSelector::Id(id) => chat.id == *id,
            ChannelSelector::Name(name) => chat.name.as_deref() == Some(name.as_str()),
        }
    }
}

/// Validated bridge configuration. Produced only by [`BridgeConfigBuilder::build`].
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Chat platform bot token.
    pub bot_token: String,
    /// Completion API key. Plain data here; handed to the client handle,
    /// never stored in process-wide state.
    pub api_key: String,
    /// The one channel this bridge serves.
    pub channel: ChannelSelector,
    /// Completion model identifier.
    pub model: String,
    /// Prompt template; carries `{message}`.
    pub prompt_template: String,
    /// Response template; carries `{response}`.
    pub response_template: String,
    /// Whether the runner installs the tracing subscriber.
    pub logging: bool,
    /// Override for the chat platform API base URL (proxies, mock servers).
    pub telegram_api_url: Option<String>,
    /// Override for the completion API base URL.
    pub openai_api_base: Option<String>,
}

impl BridgeConfig {
    /// Starts a builder from the two required credentials.
    pub fn builder(bot_token: impl Into<String>, api_key: impl Into<String>) -> BridgeConfigBuilder {
        BridgeConfigBuilder {
            bot_token: bot_token.into(),
            api_key: api_key.into(),
            channel_id: None,
            channel_name: None,
            model: None,
            prompt_template: None,
            response_template: None,
            logging: true,
            telegram_api_url: None,
            openai_api_base: None,
        }
    }
}

/// Builder for [`BridgeConfig`]. All validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct BridgeConfigBuilder {
    bot_token: String,
    api_key: String,
    channel_id: Option<i64>,
    channel_name: Option<String>,
    model: Option<String>,
    prompt_template: Option<String>,
    response_template: Option<String>,
    logging: bool,
    telegram_api_url: Option<String>,
    openai_api_base: Option<String>,
}

impl BridgeConfigBuilder {
    /// Listen on the chat with this numeric id. Wins over `channel_name`.
    pub fn channel_id(mut self, id: i64) -> Self {
        self.channel_id = Some(id);
        self
    }

    /// Listen on the chat with this name (group title or channel name).
    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = Some(name.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn prompt_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = Some(template.into());
        self
    }

    pub fn response_template(mut self, template: impl Into<String>) -> Self {
        self.response_template = Some(template.into());
        self
    }

    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    pub fn telegram_api_url(mut self, url: impl Into<String>) -> Self {
        self.telegram_api_url = Some(url.into());
        self
    }

    pub fn openai_api_base(mut self, base: impl Into<String>) -> Self {
        self.openai_api_base = Some(base.into());
        self
    }

    /// Validates and produces the config. Fails with [`BridgeError::Config`] if
    /// a credential is empty, a template lacks its placeholder, or neither
    /// channel id nor channel name was supplied. Either everything is valid or
    /// nothing is built; no connection is attempted here.
    pub fn build(self) -> Result<BridgeConfig> {
        if self.bot_token.is_empty() {
            return Err(BridgeError::Config("Bot token must not be empty".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(BridgeError::Config("API key must not be empty".to_string()));
        }

        let prompt_template = self
            .prompt_template
            .unwrap_or_else(|| DEFAULT_PROMPT_TEMPLATE.to_string());
        if !prompt_template.contains(MESSAGE_PLACEHOLDER) {
            return Err(BridgeError::Config(format!(
                "Prompt template must contain the {} placeholder",
                MESSAGE_PLACEHOLDER
            )));
        }

        let response_template = self
            .response_template
            .unwrap_or_else(|| DEFAULT_RESPONSE_TEMPLATE.to_string());
        if !response_template.contains(RESPONSE_PLACEHOLDER) {
            return Err(BridgeError::Config(format!(
                "Response template must contain the {} placeholder",
                RESPONSE_PLACEHOLDER
            )));
        }

        // Checked here rather than at first dispatch, so a selector-less
        // bridge fails before it ever connects.
        let channel = match (self.channel_id, self.channel_name) {
            (Some(id), _) => ChannelSelector::Id(id),
            (None, Some(name)) => ChannelSelector::Name(name),
            (None, None) => {
                return Err(BridgeError::Config(
                    "No channel name or id provided".to_string(),
                ))
            }
        };

        Ok(BridgeConfig {
            bot_token: self.bot_token,
            api_key: self.api_key,
            channel,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            prompt_template,
            response_template,
            logging: self.logging,
            telegram_api_url: self.telegram_api_url,
            openai_api_base: self.openai_api_base,
        })
    }
}
