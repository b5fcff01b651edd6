use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// A stored chat message. Encrypted messages carry the parameters needed to
/// decode `content` later with [`crate::cipher::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub sender: String,
    pub content: String,
    pub is_encrypted: bool,
    pub cipher_key: Option<String>,
    pub start_number: Option<i64>,
    pub reverse_groups: bool,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Caller-supplied fields for a new message; id and timestamp are assigned
/// by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub sender: String,
    pub content: String,
    pub is_encrypted: bool,
    #[serde(default)]
    pub cipher_key: Option<String>,
    #[serde(default)]
    pub start_number: Option<i64>,
    #[serde(default)]
    pub reverse_groups: bool,
}

/// In-memory message store.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a message, assigning its id and timestamp, and returns the
    /// stored record.
    pub fn insert(&mut self, new: NewMessage) -> Message {
        self.next_id += 1;
        let message = Message {
            id: self.next_id,
            sender: new.sender,
            content: new.content,
            is_encrypted: new.is_encrypted,
            cipher_key: new.cipher_key,
            start_number: new.start_number,
            reverse_groups: new.reverse_groups,
            timestamp: now_millis(),
        };

        tracing::debug!(id = message.id, "stored message");

        self.messages.push(message.clone());
        message
    }

    /// All messages in ascending timestamp order. Messages sharing a
    /// timestamp keep insertion order.
    pub fn messages(&self) -> Vec<Message> {
        let mut messages = self.messages.clone();
        messages.sort_by_key(|m| (m.timestamp, m.id));
        messages
    }

    /// Removes the message with `id`. Returns false if no such message
    /// exists.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
