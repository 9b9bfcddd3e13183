//! Conversation engine.
//!
//! Drives the scripted wine-selection dialogue: owns the transcript and
//! the phase cursor, builds prompts from the persona and the active
//! phase, and delegates text generation to a `CompletionClient`.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::PersonaConfig;
use crate::domain::conversation::{
    opening_prompt, phase_prompt, Message, PhaseScript, Transcript, FALLBACK_REPLY,
};
use crate::ports::{CompletionClient, PromptMessage};

/// Unique identifier for a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(Uuid);

impl ConversationId {
    /// Creates a new random ConversationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when advancing a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Choice is empty or whitespace only.
    #[error("Validation error: choice cannot be empty")]
    EmptyChoice,

    /// A completion request is still in flight.
    #[error("A completion request is already in flight")]
    RequestInFlight,

    /// Conversation reached its terminal phase and cannot accept choices.
    #[error("Conversation is complete and cannot accept new choices")]
    ConversationComplete,
}

/// Mutable conversation state, guarded by the engine's mutex.
#[derive(Debug)]
struct EngineState {
    cursor: usize,
    transcript: Transcript,
    pending: bool,
    generation: u64,
}

/// Orchestrator for one scripted conversation.
///
/// Methods take `&self` so the engine can be shared behind an `Arc`;
/// the UI reads [`snapshot`](Self::snapshot), [`is_loading`](Self::is_loading)
/// and [`current_options`](Self::current_options) while a request is in
/// flight. The state mutex is never held across an await.
pub struct ConversationEngine<C: CompletionClient> {
    id: ConversationId,
    persona: PersonaConfig,
    script: PhaseScript,
    client: Arc<C>,
    state: Mutex<EngineState>,
}

impl<C: CompletionClient> ConversationEngine<C> {
    /// Creates a new engine over the given script and completion client.
    pub fn new(persona: PersonaConfig, script: PhaseScript, client: Arc<C>) -> Self {
        Self {
            id: ConversationId::new(),
            persona,
            script,
            client,
            state: Mutex::new(EngineState {
                cursor: 0,
                transcript: Transcript::new(),
                pending: false,
                generation: 0,
            }),
        }
    }

    /// Returns this conversation's identifier.
    pub fn id(&self) -> ConversationId {
        self.id
    }

    /// Returns the persona this engine speaks as.
    pub fn persona(&self) -> &PersonaConfig {
        &self.persona
    }

    /// Returns the phase script driving this conversation.
    pub fn script(&self) -> &PhaseScript {
        &self.script
    }

    /// Returns the current phase index.
    pub fn cursor(&self) -> usize {
        self.state.lock().unwrap().cursor
    }

    /// Returns true while a completion request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().pending
    }

    /// Returns true once the cursor reached the terminal phase.
    pub fn is_complete(&self) -> bool {
        let state = self.state.lock().unwrap();
        self.script.is_terminal(state.cursor)
    }

    /// Returns an ordered copy of the transcript for display.
    pub fn snapshot(&self) -> Vec<Message> {
        self.state.lock().unwrap().transcript.messages().to_vec()
    }

    /// Returns the quick-reply options for the current phase.
    ///
    /// Empty at the terminal phase, which the consuming surface renders
    /// as a restart control.
    pub fn current_options(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        self.script.options_for(state.cursor).to_vec()
    }

    /// Requests the opening message from the assistant.
    ///
    /// Intended to run once when the widget mounts. On success the
    /// assistant's introduction is appended to the transcript; on
    /// failure nothing is appended and the failure is only logged, so
    /// the widget starts with an empty chat instead of an error bubble.
    pub async fn initialize(&self) {
        let generation = {
            let mut state = self.state.lock().unwrap();
            state.pending = true;
            state.generation
        };

        self.request_opening(generation).await;
    }

    /// Advances the conversation with the user's choice for the current phase.
    ///
    /// Appends the choice as a client message, asks the assistant to
    /// respond per the current phase instruction, and moves the cursor
    /// forward on success. A failed completion appends the fixed
    /// fallback reply and leaves the cursor unchanged so the same phase
    /// can be retried; the call still returns `Ok`.
    ///
    /// # Errors
    ///
    /// - `EngineError::EmptyChoice` if the choice is empty after trimming.
    /// - `EngineError::RequestInFlight` if a request is already pending.
    /// - `EngineError::ConversationComplete` at the terminal phase.
    ///
    /// All three reject before any transcript change or request.
    pub async fn advance(&self, choice: &str) -> Result<(), EngineError> {
        let choice = choice.trim();
        if choice.is_empty() {
            return Err(EngineError::EmptyChoice);
        }

        let (instruction, generation) = {
            let mut state = self.state.lock().unwrap();

            if state.pending {
                return Err(EngineError::RequestInFlight);
            }
            if self.script.is_terminal(state.cursor) {
                return Err(EngineError::ConversationComplete);
            }

            let instruction = self.script.instruction_for(state.cursor).to_string();
            state.transcript.push(Message::client(choice));
            state.pending = true;

            (instruction, state.generation)
        };

        tracing::debug!(
            conversation_id = %self.id,
            stage = %instruction,
            choice = %choice,
            "Advancing conversation"
        );

        let prompt = vec![PromptMessage::system(phase_prompt(choice, &instruction))];

        let reset = PendingReset::new(&self.state, generation);
        let outcome = self.client.complete(prompt).await;

        {
            let mut state = self.state.lock().unwrap();
            if state.generation == generation {
                match outcome {
                    Ok(reply) => {
                        state.transcript.push(Message::bot(reply));
                        state.cursor += 1;
                    }
                    Err(error) => {
                        tracing::warn!(
                            conversation_id = %self.id,
                            error = %error,
                            "Completion failed, appending fallback reply"
                        );
                        state.transcript.push(Message::bot(FALLBACK_REPLY));
                    }
                }
                state.pending = false;
            } else {
                tracing::debug!(
                    conversation_id = %self.id,
                    "Discarding reply for a superseded conversation"
                );
            }
        }
        reset.disarm();

        Ok(())
    }

    /// Restarts the conversation from the beginning.
    ///
    /// Clears the transcript, resets the cursor and requests a fresh
    /// opening message. A request still in flight when restart happens
    /// settles against the old generation and is discarded.
    pub async fn restart(&self) {
        let generation = {
            let mut state = self.state.lock().unwrap();
            state.generation += 1;
            state.transcript.clear();
            state.cursor = 0;
            state.pending = true;
            state.generation
        };

        tracing::info!(conversation_id = %self.id, "Restarting conversation");

        self.request_opening(generation).await;
    }

    /// Issues the opening request and settles it against `generation`.
    async fn request_opening(&self, generation: u64) {
        let prompt = vec![PromptMessage::user(opening_prompt(
            &self.persona.name,
            self.persona.voice_tone.descriptor(),
        ))];

        tracing::debug!(conversation_id = %self.id, "Requesting opening message");

        let reset = PendingReset::new(&self.state, generation);
        let outcome = self.client.complete(prompt).await;

        {
            let mut state = self.state.lock().unwrap();
            if state.generation == generation {
                match outcome {
                    Ok(reply) => state.transcript.push(Message::bot(reply)),
                    Err(error) => {
                        tracing::warn!(
                            conversation_id = %self.id,
                            error = %error,
                            "Opening completion failed"
                        );
                    }
                }
                state.pending = false;
            } else {
                tracing::debug!(
                    conversation_id = %self.id,
                    "Discarding opening reply for a superseded conversation"
                );
            }
        }
        reset.disarm();
    }
}

/// Clears `pending` if the in-flight future is dropped before settling.
///
/// Normal settlement disarms the guard; the generation check keeps a
/// late drop from touching a flag that now belongs to a restarted
/// conversation's request.
struct PendingReset<'a> {
    state: &'a Mutex<EngineState>,
    generation: u64,
    armed: bool,
}

impl<'a> PendingReset<'a> {
    fn new(state: &'a Mutex<EngineState>, generation: u64) -> Self {
        Self {
            state,
            generation,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingReset<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(mut state) = self.state.lock() {
            if state.generation == self.generation {
                state.pending = false;
            }
        }
    }
}
