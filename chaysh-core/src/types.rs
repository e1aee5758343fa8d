//! Chat message and conversation context types.
//!
//! [`Role`] and [`Message`] serialize one-to-one with the OpenAI Chat Completions
//! `messages` array, so a [`ConversationContext`] round-trips unchanged through the
//! inbound JSON API and the outbound completion request.

use serde::{Deserialize, Serialize};

/// How many messages of prior conversation are retained and resent with each
/// request. Oldest entries are dropped first when the window overflows.
pub const CONTEXT_WINDOW: usize = 4;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Bounded rolling window of prior conversation turns.
///
/// Created empty per session; the caller owns persistence between requests.
/// Serializes transparently as a JSON array of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationContext {
    messages: Vec<Message>,
}

impl ConversationContext {
    /// Empty context (start of a session).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// The most recent messages, at most [`CONTEXT_WINDOW`] of them, oldest first.
    pub fn recent(&self) -> &[Message] {
        let start = self.messages.len().saturating_sub(CONTEXT_WINDOW);
        &self.messages[start..]
    }

    /// Folds a completed exchange into the window: appends the user message and
    /// the assistant reply in order, then drops oldest entries until at most
    /// [`CONTEXT_WINDOW`] remain.
    pub fn push_exchange(&mut self, user: Message, assistant: Message) {
        self.messages.push(user);
        self.messages.push(assistant);
        let overflow = self.messages.len().saturating_sub(CONTEXT_WINDOW);
        if overflow > 0 {
            self.messages.drain(..overflow);
        }
    }
}

impl From<Vec<Message>> for ConversationContext {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: push_exchange never grows the window beyond CONTEXT_WINDOW.**
    #[test]
    fn push_exchange_bounds_window() {
        let mut ctx = ConversationContext::new();
        for i in 0..10 {
            ctx.push_exchange(
                Message::user(format!("q{i}")),
                Message::assistant(format!("a{i}")),
            );
            assert!(ctx.len() <= CONTEXT_WINDOW);
        }
    }

    /// **Test: after a fold, the last two entries are always the just-added pair.**
    #[test]
    fn push_exchange_keeps_latest_pair() {
        let mut ctx = ConversationContext::new();
        for i in 0..6 {
            ctx.push_exchange(
                Message::user(format!("q{i}")),
                Message::assistant(format!("a{i}")),
            );
            let recent = ctx.recent();
            let n = recent.len();
            assert_eq!(recent[n - 2], Message::user(format!("q{i}")));
            assert_eq!(recent[n - 1], Message::assistant(format!("a{i}")));
        }
    }

    /// **Test: oldest entries are dropped first (FIFO).**
    #[test]
    fn push_exchange_drops_oldest_first() {
        let mut ctx = ConversationContext::new();
        ctx.push_exchange(Message::user("q0"), Message::assistant("a0"));
        ctx.push_exchange(Message::user("q1"), Message::assistant("a1"));
        ctx.push_exchange(Message::user("q2"), Message::assistant("a2"));
        let contents: Vec<&str> = ctx.recent().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q1", "a1", "q2", "a2"]);
    }

    /// **Test: context serializes as a bare JSON array with lowercase roles.**
    #[test]
    fn context_serializes_as_array() {
        let mut ctx = ConversationContext::new();
        ctx.push_exchange(Message::user("hi"), Message::assistant("hello"));
        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(
            json,
            r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"#
        );
        let back: ConversationContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
