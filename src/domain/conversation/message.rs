//! Message entity for the widget transcript.
//!
//! Messages are immutable records of the exchange between the bot and the
//! shopper. Each message has a speaker and the displayed text; the serialized
//! form matches the widget wire shape (`type`/`msg` with lowercase tags).

use serde::{Deserialize, Serialize};

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The assistant side of the conversation.
    Bot,
    /// The shopper interacting with the widget.
    Client,
}

/// An immutable message within the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The speaker that produced this message.
    #[serde(rename = "type")]
    speaker: Speaker,

    /// The displayed text.
    #[serde(rename = "msg")]
    text: String,
}

impl Message {
    /// Creates a new message with the given speaker and text.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    /// Creates a bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, text)
    }

    /// Creates a client message.
    pub fn client(text: impl Into<String>) -> Self {
        Self::new(Speaker::Client, text)
    }

    /// Returns the speaker.
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// Returns the displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if this message came from the bot.
    pub fn is_bot(&self) -> bool {
        self.speaker == Speaker::Bot
    }

    /// Returns true if this message came from the client.
    pub fn is_client(&self) -> bool {
        self.speaker == Speaker::Client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn new_creates_message_with_speaker() {
            let msg = Message::new(Speaker::Client, "Jantar");
            assert_eq!(msg.speaker(), Speaker::Client);
            assert_eq!(msg.text(), "Jantar");
        }

        #[test]
        fn bot_creates_bot_message() {
            let msg = Message::bot("Olá! Sou o seu sommelier.");
            assert!(msg.is_bot());
            assert!(!msg.is_client());
        }

        #[test]
        fn client_creates_client_message() {
            let msg = Message::client("Quero ser surpreendido");
            assert!(msg.is_client());
            assert!(!msg.is_bot());
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn speaker_serializes_lowercase() {
            assert_eq!(serde_json::to_string(&Speaker::Bot).unwrap(), "\"bot\"");
            assert_eq!(
                serde_json::to_string(&Speaker::Client).unwrap(),
                "\"client\""
            );
        }

        #[test]
        fn message_uses_widget_wire_shape() {
            let msg = Message::bot("Olá!");
            let json = serde_json::to_value(&msg).unwrap();
            assert_eq!(json, serde_json::json!({"type": "bot", "msg": "Olá!"}));
        }

        #[test]
        fn message_round_trips() {
            let msg = Message::client("Vinhos mais secos");
            let json = serde_json::to_string(&msg).unwrap();
            let back: Message = serde_json::from_str(&json).unwrap();
            assert_eq!(back, msg);
        }
    }
}
