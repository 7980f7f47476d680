//! Chat conversation model and the wire shapes of the reply endpoint.
//!
//! The reply endpoint itself lives outside this crate. These types describe
//! what a front end sends (`ChatRequest`) and gets back (`ChatResponse`),
//! and keep the message list a page renders from.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::markdown::render;

/// Number of prior messages sent along with a new one.
pub const HISTORY_LIMIT: usize = 9;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Lowercase wire name, also used as CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One chat message as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }

    /// Message text rendered to HTML. Not escaped.
    pub fn html(&self) -> String {
        render(&self.text)
    }
}

/// Text fragment of a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Prior message in the shape the provider expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl From<&Message> for HistoryEntry {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            parts: vec![Part {
                text: message.text.clone(),
            }],
        }
    }
}

/// Body sent to the reply endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl ChatRequest {
    /// Rejects a request without message text.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::MissingMessage` if the message is blank
    pub fn validate(&self) -> Result<(), ChatError> {
        if self.message.trim().is_empty() {
            return Err(ChatError::MissingMessage);
        }
        Ok(())
    }
}

/// Body returned by the reply endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { reply: String },
    Failure { error: bool, message: String },
}

impl ChatResponse {
    pub fn failure(error: &ChatError) -> Self {
        ChatResponse::Failure {
            error: true,
            message: error.to_string(),
        }
    }

    /// Converts the body into the reply text or an upstream error.
    pub fn into_result(self) -> Result<String, ChatError> {
        match self {
            ChatResponse::Reply { reply } => Ok(reply),
            ChatResponse::Failure { message, .. } => Err(ChatError::Upstream(message)),
        }
    }
}

/// Failures of the reply endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Message is required")]
    MissingMessage,
    #[error("API key is not configured")]
    MissingCredentials,
    #[error("{0}")]
    Upstream(String),
}

impl ChatError {
    /// HTTP status the endpoint answers with.
    pub fn status(&self) -> u16 {
        match self {
            ChatError::MissingMessage => 400,
            ChatError::MissingCredentials | ChatError::Upstream(_) => 500,
        }
    }
}

/// Append-only message list of one chat session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a transcript: a JSON array of `{role, text}` objects.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON does not describe a message array
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse chat transcript")
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Builds the request for a new user message.
    ///
    /// History carries at most the last [`HISTORY_LIMIT`] messages, oldest
    /// first. The new message itself is not appended to the conversation.
    pub fn request(&self, message: impl Into<String>) -> ChatRequest {
        let skip = self.messages.len().saturating_sub(HISTORY_LIMIT);
        ChatRequest {
            message: message.into(),
            history: self.messages[skip..].iter().map(HistoryEntry::from).collect(),
        }
    }

    /// Appends the model reply carried by `response`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Upstream` for a failure body; nothing is appended
    pub fn record(&mut self, response: ChatResponse) -> Result<&Message, ChatError> {
        let reply = response.into_result()?;
        self.messages.push(Message::model(reply));
        let last = self.messages.len() - 1;
        Ok(&self.messages[last])
    }
}
