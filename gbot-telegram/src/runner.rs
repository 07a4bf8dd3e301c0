//! Process entry: wires config, completion client, and dispatcher into
//! teloxide's event loop and blocks for the process lifetime.

use std::sync::Arc;

use completion_client::CompletionClient;
use gbot_core::{
    init_tracing, Bot, BridgeConfig, BridgeError, Completer, CompletionPipeline,
    Dispatcher as BridgeDispatcher, Handler, Result, ToCoreMessage,
};
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::requests::Requester;
use teloxide::types::{Message as TgMessage, Update};
use tracing::{debug, info};

use crate::adapters::TelegramMessageWrapper;
use crate::bot_adapter::TelegramBotAdapter;

/// The two seams available to an injected handler factory.
pub struct BridgeParts {
    pub bot: Arc<dyn Bot>,
    pub completer: Arc<dyn Completer>,
}

/// Runs the bridge with the default completion pipeline. Blocks until the
/// event loop stops.
pub async fn run_bridge(config: BridgeConfig) -> Result<()> {
    run_bridge_with(config, |config, parts| {
        Arc::new(CompletionPipeline::new(
            parts.bot,
            parts.completer,
            config.response_template.clone(),
        ))
    })
    .await
}

/// Runs the bridge with a caller-supplied per-message strategy. The factory
/// receives the config and the wired seams ([`BridgeParts`]) and returns the
/// handler the dispatcher invokes for every matched message.
pub async fn run_bridge_with<F>(config: BridgeConfig, make_handler: F) -> Result<()>
where
    F: FnOnce(&BridgeConfig, BridgeParts) -> Arc<dyn Handler>,
{
    if config.logging {
        init_tracing()
            .map_err(|e| BridgeError::Config(format!("Failed to initialize logging: {}", e)))?;
    }

    info!("Starting Telegram client...");

    let bot = build_bot(&config)?;

    let completer: Arc<dyn Completer> = Arc::new(CompletionClient::from_config(&config));
    let bot_adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    let handler = make_handler(
        &config,
        BridgeParts {
            bot: bot_adapter,
            completer,
        },
    );
    let dispatcher = Arc::new(BridgeDispatcher::new(config.channel.clone(), handler));

    let me = bot
        .get_me()
        .await
        .map_err(|e| BridgeError::Chat(format!("getMe failed: {}", e)))?;
    info!(username = %me.username(), "Logged in as @{}", me.username());
    info!("Ready to answer questions");

    let tree = Update::filter_message().endpoint(handle_update);

    Dispatcher::builder(bot, tree)
        .dependencies(dptree::deps![dispatcher])
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Skipping non-message update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Message handling failed",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Builds the teloxide Bot, honoring a custom API URL when configured.
/// A malformed URL fails here, before any connection.
fn build_bot(config: &BridgeConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match &config.telegram_api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url).map_err(|e| {
                BridgeError::Config(format!("Telegram API URL is not a valid URL: {}", e))
            })?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Endpoint for every message update. Text messages are converted to the core
/// type and gated by the dispatcher; anything else is skipped. Errors flow to
/// the loop's error handler.
async fn handle_update(msg: TgMessage, dispatcher: Arc<BridgeDispatcher>) -> Result<()> {
    if msg.text().is_none() {
        debug!(chat_id = msg.chat.id.0, "Skipping non-text message");
        return Ok(());
    }

    let core_msg = TelegramMessageWrapper(&msg).to_core();
    dispatcher.dispatch(&core_msg).await
}
