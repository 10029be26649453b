//! Conversation history replayed as context on every completion.
//!
//! Turns are appended strictly in pairs (user, then assistant) after a
//! successful exchange; a failed exchange appends nothing. An optional
//! cap evicts the oldest pairs so long conversations do not grow the
//! per-call context without bound.

use ponte_types::llm::Message;

/// Ordered sequence of prior conversation turns.
#[derive(Debug, Default)]
pub struct ConversationBuffer {
    turns: Vec<Message>,
    /// Maximum retained user+assistant pairs. `0` means unbounded.
    max_exchanges: usize,
}

impl ConversationBuffer {
    pub fn new(max_exchanges: usize) -> Self {
        Self {
            turns: Vec::new(),
            max_exchanges,
        }
    }

    /// Append one completed exchange: the user turn, then the assistant turn.
    ///
    /// When a cap is configured, the oldest pairs are evicted so at most
    /// `max_exchanges` pairs remain.
    pub fn push_exchange(&mut self, user: String, assistant: String) {
        self.turns.push(Message::user(user));
        self.turns.push(Message::assistant(assistant));

        if self.max_exchanges > 0 {
            let max_turns = self.max_exchanges * 2;
            if self.turns.len() > max_turns {
                let excess = self.turns.len() - max_turns;
                self.turns.drain(..excess);
            }
        }
    }

    /// All retained turns in conversational order.
    pub fn messages(&self) -> &[Message] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Clear the history in full.
    pub fn reset(&mut self) {
        self.turns.clear();
    }
}
