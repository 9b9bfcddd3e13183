//! Conversation domain module.
//!
//! Holds the pure dialogue model: transcript messages, the phase script,
//! and the prompt templates. No I/O happens here; the application layer
//! drives these types against the completion port.

mod message;
mod prompts;
mod script;
mod transcript;

pub use message::{Message, Speaker};
pub use prompts::{opening_prompt, phase_prompt, FALLBACK_REPLY};
pub use script::{Phase, PhaseScript};
pub use transcript::Transcript;
