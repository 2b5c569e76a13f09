//! Raw Slack export document types.
//!
//! This module contains the deserialization types for `users.json` and the
//! per-day documents, plus the helpers shared by the user directory loader
//! and the message collector.

pub mod slack;

// Re-export commonly used items
pub use slack::{SlackRawMessage, SlackUser, is_exportable, parse_slack_ts};
