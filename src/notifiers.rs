//! Bundled notifier backends.
//!
//! The hub treats backends as opaque collaborators behind the [`Notifier`]
//! trait; this module provides the in-memory reference backend. Anything
//! with delivery semantics (flash sessions, external sinks) belongs in
//! downstream implementations of the trait.

use tracing::debug;

use crate::core::{Message, Notifier};

/// An in-memory notifier that accumulates messages in arrival order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    name: String,
    messages: Vec<Message>,
}

impl MemoryNotifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Drops all held messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl Notifier for MemoryNotifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn all(&self) -> Vec<Message> {
        self.messages.clone()
    }

    fn notify(&mut self, message: Message) {
        debug!(
            notifier = %self.name,
            area = %message.area,
            kind = %message.kind,
            "message accumulated"
        );
        self.messages.push(message);
    }
}
