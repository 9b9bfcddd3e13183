//! Completion Client Port - Interface for chat-completion backends.
//!
//! This port abstracts the remote text-generation endpoint so the engine can
//! drive the dialogue without coupling to a specific provider.
//!
//! # Design
//!
//! - One logical prompt per `complete` call, no streaming
//! - Implementations perform no internal retries; recovery is the shopper
//!   re-issuing the same phase
//! - A single failure kind: the engine never distinguishes why a completion
//!   failed, only that it did
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedClient;
//!
//! #[async_trait]
//! impl CompletionClient for CannedClient {
//!     async fn complete(&self, _prompt: Vec<PromptMessage>) -> Result<String, CompletionError> {
//!         Ok("Olá! Sou o seu sommelier.".to_string())
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for chat-completion backends.
///
/// Implementations connect to an external completion API and translate
/// between its wire format and the prompt messages built by the engine.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generates the completion text for one prompt.
    ///
    /// Returns the generated text, or a [`CompletionError`] when the request
    /// fails for any reason.
    async fn complete(&self, prompt: Vec<PromptMessage>) -> Result<String, CompletionError>;
}

/// A message within a completion prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Who the message is attributed to.
    pub role: PromptRole,
    /// Message content.
    pub content: String,
}

impl PromptMessage {
    /// Creates a new prompt message.
    pub fn new(role: PromptRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(PromptRole::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(PromptRole::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(PromptRole::Assistant, content)
    }
}

/// Role a prompt message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    /// Instructions guiding model behavior.
    System,
    /// Input attributed to the end user.
    User,
    /// A prior model response.
    Assistant,
}

/// A failed completion request.
///
/// Transport failures, non-success statuses, and unparseable payloads all
/// collapse into this one kind; the reason string exists for logging only.
#[derive(Debug, Clone, thiserror::Error)]
#[error("completion failed: {reason}")]
pub struct CompletionError {
    reason: String,
}

impl CompletionError {
    /// Creates an error for a transport-level failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            reason: message.into(),
        }
    }

    /// Creates an error for a non-success HTTP status.
    pub fn status(code: u16, body: &str) -> Self {
        Self {
            reason: format!("status {}: {}", code, body),
        }
    }

    /// Creates an error for a payload the completion text could not be
    /// read from.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            reason: message.into(),
        }
    }

    /// Returns the reason string carried for logging.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
