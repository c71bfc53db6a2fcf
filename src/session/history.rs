//! Bounded chat transcript

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Transcript capacity; older entries are dropped first
pub const MAX_CHAT_HISTORY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub message: String,
}

impl ChatMessage {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            message: message.into(),
        }
    }

    pub fn ai(message: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            message: message.into(),
        }
    }
}

/// Ring buffer of chat messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHistory {
    entries: VecDeque<ChatMessage>,
    capacity: usize,
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::with_capacity(MAX_CHAT_HISTORY)
    }
}

impl ChatHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter()
    }
}
