//! Application layer - the conversation orchestrator.
//!
//! This layer coordinates the domain script and transcript with the
//! completion port, one engine instance per conversation.

pub mod engine;

pub use engine::{ConversationEngine, ConversationId, EngineError};
