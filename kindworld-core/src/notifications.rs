//! Toast queue with per-message expiry keyed by a stable id
use serde::{Deserialize, Serialize};

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Info,
    Success,
    Warning,
}

impl Level {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Warning => "toast--warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub level: Level,
    pub message: String,
    pub ttl_ms: u32,
}

/// FIFO list of live toasts.
///
/// Removal is always by id, so an expiry timer that fires late, or for a
/// message the user already dismissed, can never take out a neighbour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: NotificationId,
    ttl_ms: u32,
    capacity: usize,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(3_000, 5)
    }
}

impl NotificationQueue {
    #[must_use]
    pub const fn new(ttl_ms: u32, capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            ttl_ms,
            capacity,
        }
    }

    /// Append a message, evicting the oldest entries beyond capacity.
    pub fn enqueue(&mut self, level: Level, message: impl Into<String>) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            level,
            message: message.into(),
            ttl_ms: self.ttl_ms,
        });
        if self.capacity > 0 && self.items.len() > self.capacity {
            let overflow = self.items.len() - self.capacity;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove the message with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One `(id, ttl)` pair per live message; empty queue, empty schedule.
    pub fn expiry_schedule(&self) -> impl Iterator<Item = (NotificationId, u32)> + '_ {
        self.items.iter().map(|n| (n.id, n.ttl_ms))
    }

    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.items.iter().map(|n| n.message.as_str()).collect()
    }
}
