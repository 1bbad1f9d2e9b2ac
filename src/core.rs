//! Core domain types and the notifier capability trait.
//!
//! This module defines the fundamental data structures and trait contracts
//! that govern how the hub and notifier backends interact.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single accumulated alert message.
///
/// The filtering core only ever reads the `area` and `kind` attributes;
/// everything else is opaque payload owned by the notifier backends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Application area the message belongs to (e.g. "admin", "shop").
    pub area: String,
    /// Message type: "success", "error", "warning", "info", or any
    /// caller-defined value.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable text.
    pub body: String,
    /// ISO 8601 timestamp set when the message was created.
    pub timestamp: String,
}

impl Message {
    /// Creates a message stamped with the current time.
    pub fn new(
        area: impl Into<String>,
        kind: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            kind: kind.into(),
            body: body.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// A named backend that accumulates and exposes messages.
pub trait Notifier: Send {
    /// A stable identifier under which the backend registers itself.
    fn name(&self) -> &str;

    /// Returns every message the backend currently holds, preserving
    /// backend-internal order. Must not mutate backend state.
    fn all(&self) -> Vec<Message>;

    /// Accepts a message for accumulation or delivery.
    fn notify(&mut self, message: Message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_kind_under_type_key() {
        let message = Message::new("admin", "error", "disk full");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["area"], "admin");
        assert_eq!(json["type"], "error");
        assert_eq!(json["body"], "disk full");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn message_deserializes_from_type_key() {
        let json = r#"{
            "area": "shop",
            "type": "warning",
            "body": "low stock",
            "timestamp": "2026-01-01T00:00:00+00:00"
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.area, "shop");
        assert_eq!(message.kind, "warning");
    }
}
