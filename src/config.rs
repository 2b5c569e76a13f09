//! Configuration types for loading Slack exports.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. Output settings live in
//! [`OutputConfig`](crate::core::models::OutputConfig), message filters in
//! [`FilterConfig`](crate::core::filter::FilterConfig).
//!
//! # Example
//!
//! ```rust
//! use slackpack::config::SlackConfig;
//!
//! let config = SlackConfig::new()
//!     .with_bot("USLACKBOT", "Slackbot")
//!     .with_skipped_subtype("channel_leave");
//!
//! assert!(config.skips_subtype("channel_join"));
//! assert!(config.skips_subtype("channel_leave"));
//! ```

use serde::{Deserialize, Serialize};

/// Id Slack uses for platform-generated messages.
pub const SLACKBOT_ID: &str = "USLACKBOT";

/// Display name given to [`SLACKBOT_ID`].
pub const SLACKBOT_NAME: &str = "slackbot";

/// Subtype of the automatic "has joined the channel" notices.
pub const CHANNEL_JOIN: &str = "channel_join";

/// Configuration for reading a Slack channel export.
///
/// `users.json` never lists the automated sender, so the directory always
/// gets a synthetic entry for it. Entries whose `subtype` is listed in
/// `skipped_subtypes` are dropped before author resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Id of the automated sender (default: `USLACKBOT`)
    pub bot_id: String,

    /// Display name of the automated sender (default: `slackbot`)
    pub bot_name: String,

    /// Message subtypes that are never exported (default: `channel_join`)
    pub skipped_subtypes: Vec<String>,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            bot_id: SLACKBOT_ID.to_string(),
            bot_name: SLACKBOT_NAME.to_string(),
            skipped_subtypes: vec![CHANNEL_JOIN.to_string()],
        }
    }
}

impl SlackConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the synthetic automated-sender entry.
    #[must_use]
    pub fn with_bot(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.bot_id = id.into();
        self.bot_name = name.into();
        self
    }

    /// Adds another subtype to skip.
    #[must_use]
    pub fn with_skipped_subtype(mut self, subtype: impl Into<String>) -> Self {
        let subtype = subtype.into();
        if !self.skips_subtype(&subtype) {
            self.skipped_subtypes.push(subtype);
        }
        self
    }

    /// Returns `true` if messages with this subtype are dropped.
    pub fn skips_subtype(&self, subtype: &str) -> bool {
        self.skipped_subtypes.iter().any(|s| s == subtype)
    }
}
