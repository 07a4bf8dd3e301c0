//! # gbot-core
//!
//! Core types and traits for the channel-to-completion bridge: [`Bot`],
//! [`Completer`], [`Handler`], the config builder, the per-message
//! [`Dispatcher`], the default [`CompletionPipeline`], and tracing
//! initialization. Transport-agnostic; used by completion-client and
//! gbot-telegram.

pub mod bot;
pub mod completion;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod template;
pub mod types;

pub use bot::Bot;
pub use completion::Completer;
pub use config::{
    BridgeConfig, BridgeConfigBuilder, ChannelSelector, DEFAULT_MODEL, DEFAULT_PROMPT_TEMPLATE,
    DEFAULT_RESPONSE_TEMPLATE,
};
pub use dispatcher::Dispatcher;
pub use error::{BridgeError, Result};
pub use logger::init_tracing;
pub use pipeline::CompletionPipeline;
pub use template::{substitute, MESSAGE_PLACEHOLDER, RESPONSE_PLACEHOLDER};
pub use types::{Chat, Handler, Message, ToCoreMessage, ToCoreUser, User};
