//! OpenAI completion client - Implementation of CompletionClient for
//! OpenAI's chat completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = CompletionConfig::new(api_key)
//!     .with_model("gpt-3.5-turbo")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let client = OpenAICompletionClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::ports::{CompletionClient, CompletionError, PromptMessage, PromptRole};

/// OpenAI chat completions client.
pub struct OpenAICompletionClient {
    config: CompletionConfig,
    client: Client,
}

impl OpenAICompletionClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: CompletionConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts the port-level prompt to OpenAI's wire format.
    fn to_wire_request(&self, prompt: &[PromptMessage]) -> ChatRequest {
        let messages = prompt
            .iter()
            .map(|msg| ChatMessage {
                role: match msg.role {
                    PromptRole::System => "system",
                    PromptRole::User => "user",
                    PromptRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            })
            .collect();

        ChatRequest {
            model: self.config.model.clone(),
            messages,
        }
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, prompt: &[PromptMessage]) -> Result<Response, CompletionError> {
        let request = self.to_wire_request(prompt);

        self.client
            .post(self.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key().expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::network(format!(
                        "Request timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else if e.is_connect() {
                    CompletionError::network(format!("Connection failed: {}", e))
                } else {
                    CompletionError::network(e.to_string())
                }
            })
    }

    /// Rejects non-success statuses, keeping the error body for logging.
    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, CompletionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(CompletionError::status(status.as_u16(), &error_body))
    }

    /// Parses a successful response body.
    async fn parse_response(&self, response: Response) -> Result<String, CompletionError> {
        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::malformed(format!("Failed to parse response: {}", e)))?;

        first_choice_content(chat_response)
    }
}

#[async_trait]
impl CompletionClient for OpenAICompletionClient {
    async fn complete(&self, prompt: Vec<PromptMessage>) -> Result<String, CompletionError> {
        tracing::debug!(
            "Requesting completion from {} with {} message(s)",
            self.config.model,
            prompt.len()
        );

        let response = self.send_request(&prompt).await?;
        let response = self.handle_response_status(response).await?;
        self.parse_response(response).await
    }
}

/// Extracts the assistant text from the first choice.
fn first_choice_content(response: ChatResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::malformed("No choices in response"))?;

    Ok(choice.message.content)
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
