//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `conversation` - Transcript, phase script, and prompt templates

pub mod conversation;
