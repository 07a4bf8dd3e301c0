//! Env-based config assembly: reads the bridge settings from environment
//! variables, applies CLI overrides, and feeds everything through the core
//! builder so all validation applies.

use anyhow::{bail, Context, Result};
use gbot_core::BridgeConfig;
use std::env;

/// CLI values that override their env counterparts.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// Overrides `BOT_TOKEN`.
    pub token: Option<String>,
    /// Overrides `CHANNEL_ID`.
    pub channel_id: Option<i64>,
    /// Overrides `CHANNEL_NAME`.
    pub channel_name: Option<String>,
    /// Overrides `MODEL`.
    pub model: Option<String>,
}

/// Loads the bridge config from env with CLI overrides applied.
///
/// Env: `BOT_TOKEN` and `OPENAI_API_KEY` (required), `CHANNEL_ID` /
/// `CHANNEL_NAME` (one required; id wins), `MODEL`, `PROMPT_TEMPLATE`,
/// `RESPONSE_TEMPLATE`, `LOGGING` (`0`/`false` disable), `TELEGRAM_API_URL`
/// (or `TELOXIDE_API_URL`), `OPENAI_BASE_URL`. Load `.env` before calling.
pub fn load_config(overrides: Overrides) -> Result<BridgeConfig> {
    let bot_token = match overrides.token.or_else(|| env::var("BOT_TOKEN").ok()) {
        Some(token) => token,
        None => bail!("BOT_TOKEN is required. Set it in .env or environment, or pass --token."),
    };
    let api_key = match env::var("OPENAI_API_KEY") {
        Ok(key) => key,
        Err(_) => bail!("OPENAI_API_KEY is required. Set it in .env or environment."),
    };

    let mut builder = BridgeConfig::builder(bot_token, api_key);

    let channel_id = match overrides.channel_id {
        Some(id) => Some(id),
        None => match env::var("CHANNEL_ID") {
            Ok(raw) => Some(
                raw.parse::<i64>()
                    .with_context(|| format!("CHANNEL_ID must be an integer, got: {}", raw))?,
            ),
            Err(_) => None,
        },
    };
    if let Some(id) = channel_id {
        builder = builder.channel_id(id);
    }
    if let Some(name) = overrides
        .channel_name
        .or_else(|| env::var("CHANNEL_NAME").ok())
    {
        builder = builder.channel_name(name);
    }

    if let Some(model) = overrides.model.or_else(|| env::var("MODEL").ok()) {
        builder = builder.model(model);
    }
    if let Ok(template) = env::var("PROMPT_TEMPLATE") {
        builder = builder.prompt_template(template);
    }
    if let Ok(template) = env::var("RESPONSE_TEMPLATE") {
        builder = builder.response_template(template);
    }

    if let Ok(raw) = env::var("LOGGING") {
        let enabled = !matches!(raw.trim(), "0" | "false" | "FALSE" | "False");
        builder = builder.logging(enabled);
    }

    if let Ok(url) = env::var("TELEGRAM_API_URL").or_else(|_| env::var("TELOXIDE_API_URL")) {
        builder = builder.telegram_api_url(url);
    }
    if let Ok(base) = env::var("OPENAI_BASE_URL") {
        builder = builder.openai_api_base(base);
    }

    Ok(builder.build()?)
}
