use std::fmt;

use serde::{Deserialize, Serialize};

/// The role of a chat message. Rendering and storage switch on this tag
/// explicitly; there is no runtime type inspection anywhere.
#[derive(PartialEq, Eq, Serialize, Deserialize, Debug, Clone)]
pub enum MessageType {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "ai")]
    Ai,
    #[serde(rename = "human")]
    Human,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::System => write!(f, "System"),
            MessageType::Ai => write!(f, "AI"),
            MessageType::Human => write!(f, "Human"),
        }
    }
}

/// A single entry in the conversation history.
#[derive(PartialEq, Eq, Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    pub message_type: MessageType,
    pub content: String,
}

impl Message {
    pub fn new(message_type: MessageType, content: impl Into<String>) -> Self {
        Self {
            message_type,
            content: content.into(),
        }
    }

    pub fn new_system_message(content: impl Into<String>) -> Self {
        Self::new(MessageType::System, content)
    }

    pub fn new_ai_message(content: impl Into<String>) -> Self {
        Self::new(MessageType::Ai, content)
    }

    pub fn new_human_message(content: impl Into<String>) -> Self {
        Self::new(MessageType::Human, content)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message_type, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_prefixes() {
        assert_eq!(
            Message::new_human_message("I have a headache").to_string(),
            "Human: I have a headache"
        );
        assert_eq!(
            Message::new_ai_message("Drink some water").to_string(),
            "AI: Drink some water"
        );
    }
}
