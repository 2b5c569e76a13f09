//! Filter messages by date range and author.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering collected messages. Filters are off by
//! default, in which case every collected message is exported.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Messages from one display name |
//!
//! # Example
//!
//! ```
//! use slackpack::core::filter::{FilterConfig, apply_filters};
//! use slackpack::Message;
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> slackpack::Result<()> {
//! let messages = vec![
//!     Message::new("Alice", Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), "Old"),
//!     Message::new("Alice", Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(), "New"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "New");
//! # Ok(())
//! # }
//! ```
//!
//! Author matching is case-insensitive for ASCII characters; multiple
//! filters are combined with AND logic.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::Message;
use crate::error::{Result, SlackpackError};

/// Configuration for filtering messages by date and author.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Include only messages from this author (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`SlackpackError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let naive = parse_date(date_str)?;
        self.after = Some(naive.and_time(NaiveTime::MIN).and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// The whole day is included, down to the last nanosecond, since
    /// Slack timestamps carry sub-second fractions.
    ///
    /// # Errors
    ///
    /// Returns [`SlackpackError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let naive = parse_date(date_str)?;
        let end_of_day = naive
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or_else(|| SlackpackError::invalid_date(date_str))?;
        self.before = Some(end_of_day.and_utc());
        Ok(self)
    }

    /// Sets the author filter.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.from = Some(author.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref from) = self.from {
            if !msg.author.eq_ignore_ascii_case(from) {
                return false;
            }
        }
        if self.after.is_some_and(|after| msg.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| msg.timestamp > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| SlackpackError::invalid_date(date_str))
}

/// Filters messages based on the provided configuration.
///
/// Returns the input unchanged when no filter is active.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
