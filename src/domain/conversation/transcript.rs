//! Transcript of a single widget conversation.
//!
//! The transcript is an append-only, insertion-ordered store of messages.
//! It only ever shrinks through `clear`, which the engine invokes as part of
//! the restart lifecycle event.

use serde::Serialize;

use super::message::Message;

/// Ordered store of the messages exchanged in one conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message. Appends always succeed; ordering is insertion order.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Removes every message. Restart is the only caller.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Speaker;

    #[test]
    fn starts_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::bot("Olá! Em que posso ajudar?"));
        transcript.push(Message::client("Tenho ideia do que quero"));
        transcript.push(Message::bot("Ótima escolha."));

        let speakers: Vec<Speaker> = transcript
            .messages()
            .iter()
            .map(|m| m.speaker())
            .collect();
        assert_eq!(speakers, vec![Speaker::Bot, Speaker::Client, Speaker::Bot]);
        assert_eq!(transcript.last().unwrap().text(), "Ótima escolha.");
    }

    #[test]
    fn clear_removes_everything() {
        let mut transcript = Transcript::new();
        transcript.push(Message::bot("Olá!"));
        transcript.push(Message::client("Jantar"));

        transcript.clear();

        assert!(transcript.is_empty());
        assert!(transcript.messages().is_empty());
    }

    #[test]
    fn serializes_as_plain_message_list() {
        let mut transcript = Transcript::new();
        transcript.push(Message::client("Carne"));

        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"type": "client", "msg": "Carne"}])
        );
    }
}
