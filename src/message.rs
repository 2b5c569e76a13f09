//! Resolved Slack message type.
//!
//! [`Message`] is what the collector produces for every exportable entry of
//! a per-day document: the author already resolved to a display name, the
//! `ts` parsed to a UTC instant, and the text with mentions rewritten.
//!
//! # Example
//!
//! ```
//! use slackpack::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
//! let msg = Message::new("Alice", ts, "Hello @Bob");
//!
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.date(), "2024-01-15");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message ready to be sorted and written.
///
/// Unlike the raw export entries, every field is mandatory here: an entry
/// that cannot produce all three is an error, not a partial message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the author, resolved through the user directory.
    pub author: String,

    /// When the message was sent (UTC). Sub-second precision is kept so
    /// that ordering within the same second follows Slack's `ts`.
    pub timestamp: DateTime<Utc>,

    /// Message text after mention rewriting.
    pub text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(author: impl Into<String>, timestamp: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            timestamp,
            text: text.into(),
        }
    }

    /// Returns the author display name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the calendar day of the message in UTC, as `YYYY-MM-DD`.
    pub fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_new() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let msg = Message::new("Alice", ts, "Hello");
        assert_eq!(msg.author(), "Alice");
        assert_eq!(msg.text(), "Hello");
        assert_eq!(msg.timestamp(), ts);
    }

    #[test]
    fn test_date_truncates_time_of_day() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
        let msg = Message::new("Alice", ts, "late");
        assert_eq!(msg.date(), "2024-06-15");
    }

    #[test]
    fn test_message_serialization() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let msg = Message::new("Alice", ts, "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"author\":\"Alice\""));
        assert!(json.contains("2024-06-15T12:00:00Z"));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
