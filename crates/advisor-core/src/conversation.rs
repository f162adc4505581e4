//! Conversation log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routine::Routine;

/// What the advisor answered to one user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum BotReply {
    Text(String),
    Routine(Routine),
}

/// One exchange. Routine generation is recorded with the button label as the
/// user text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user: String,
    pub reply: BotReply,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(user: impl Into<String>, reply: BotReply) -> Self {
        Self {
            user: user.into(),
            reply,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only, in-memory log of the session's turns. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Advisor,
}

/// A message as shown in the message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatMessage {
    Text { sender: Sender, body: String },
    Routine(Box<Routine>),
}

impl ChatMessage {
    pub fn user(body: impl Into<String>) -> Self {
        Self::Text {
            sender: Sender::User,
            body: body.into(),
        }
    }

    pub fn advisor(body: impl Into<String>) -> Self {
        Self::Text {
            sender: Sender::Advisor,
            body: body.into(),
        }
    }

    pub fn routine(routine: Routine) -> Self {
        Self::Routine(Box::new(routine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_append_only_in_order() {
        let mut log = ConversationLog::new();
        log.push(ConversationTurn::new("hello", BotReply::Text("first".into())));
        log.push(ConversationTurn::new("bye", BotReply::Text("second".into())));

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].user, "hello");
        assert_eq!(log.turns()[1].reply, BotReply::Text("second".into()));
        assert!(log.turns()[0].timestamp <= log.turns()[1].timestamp);
    }

    #[test]
    fn test_message_constructors() {
        assert_eq!(
            ChatMessage::advisor("hi"),
            ChatMessage::Text {
                sender: Sender::Advisor,
                body: "hi".to_string()
            }
        );
    }
}
