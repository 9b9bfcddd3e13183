//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the conversation engine to external systems:
//! - `openai_client` - OpenAI chat completions over HTTP
//! - `mock_client` - In-memory scripted client for testing

pub mod mock_client;
pub mod openai_client;

pub use mock_client::{MockCompletionClient, MockReply};
pub use openai_client::OpenAICompletionClient;
