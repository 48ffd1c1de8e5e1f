// src/services/conversation.rs
use std::time::SystemTime;

use tracing::warn;
use uuid::Uuid;

use crate::message::AskRequest;
use crate::services::ask_client::AskClient;

pub const WELCOME_MESSAGE: &str = "Welcome to AI Legal Assistant. I'm here to provide general legal guidance and information. Please note that this is not a substitute for professional legal advice. How can I help you today?";

pub const APOLOGY_MESSAGE: &str =
    "I encountered an error processing your request. Please ensure the API key is configured.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: SystemTime,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: SystemTime::now(),
        }
    }
}

/// Client-side transcript. Append-only, with at most one request in flight.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(MessageRole::Assistant, WELCOME_MESSAGE)],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Records the user's message and returns the request to send.
    /// Returns `None` for blank input or while a request is pending.
    pub fn submit(&mut self, input: &str) -> Option<AskRequest> {
        if self.pending || input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(MessageRole::User, input));
        self.pending = true;
        Some(AskRequest {
            message: input.to_string(),
        })
    }

    /// Appends the assistant's answer, or the apology on failure. No-op unless pending.
    pub fn resolve(&mut self, outcome: anyhow::Result<String>) -> bool {
        if !self.pending {
            return false;
        }

        let content = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = ?err, "ask request failed");
                APOLOGY_MESSAGE.to_string()
            }
        };
        self.messages.push(ChatMessage::new(MessageRole::Assistant, content));
        self.pending = false;
        true
    }

    /// Runs one full round trip against the ask endpoint.
    pub async fn send(&mut self, input: &str, client: &AskClient) -> Option<&ChatMessage> {
        let request = self.submit(input)?;
        let outcome = client.ask(&request).await;
        self.resolve(outcome);
        self.messages.last()
    }
}
