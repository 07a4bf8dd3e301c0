//! Recording stubs shared by the integration tests: a [`Bot`] that records
//! every outbound call, a [`Completer`] with a canned reply or failure, and a
//! counting [`Handler`].

#![allow(dead_code)] // each test binary uses a subset of these stubs

use async_trait::async_trait;
use gbot_core::{Bot, BridgeError, Chat, Completer, Handler, Message, Result, User};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentCall {
    Typing { chat_id: i64 },
    Message { chat_id: i64, text: String },
}

/// Bot stub that records typing and send calls in order.
#[derive(Default)]
pub struct RecordingBot {
    pub calls: Mutex<Vec<SentCall>>,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SentCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of all sent messages, in send order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                SentCall::Message { text, .. } => Some(text),
                SentCall::Typing { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.calls.lock().unwrap().push(SentCall::Message {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(SentCall::Typing { chat_id: chat.id });
        Ok(())
    }
}

/// Completer stub returning a fixed reply, or a wrapped failure when `reply`
/// is `None`.
pub struct StubCompleter {
    reply: Option<String>,
}

impl StubCompleter {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl Completer for StubCompleter {
    async fn get_response(&self, _message_text: &str) -> Result<String> {
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(BridgeError::completion(
                "Completion request failed",
                std::io::Error::new(std::io::ErrorKind::Other, "connection refused"),
            )),
        }
    }
}

/// Handler stub counting invocations.
#[derive(Default)]
pub struct CountingHandler {
    pub calls: AtomicUsize,
}

impl CountingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, _message: &Message) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Builds a human-authored inbound message for the given chat.
pub fn inbound_message(chat_id: i64, chat_name: Option<&str>, content: &str) -> Message {
    Message {
        author: User {
            id: 7,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
            is_bot: false,
        },
        chat: Chat {
            id: chat_id,
            name: chat_name.map(|s| s.to_string()),
        },
        content: content.to_string(),
    }
}
