//! # gbot-telegram
//!
//! Telegram side of the bridge: teloxide type adapters, the [`Bot`]
//! implementation, and the runner that hands the dispatcher to teloxide's
//! event loop.
//!
//! [`Bot`]: gbot_core::Bot

pub mod adapters;
pub mod bot_adapter;
pub mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{run_bridge, run_bridge_with, BridgeParts};
