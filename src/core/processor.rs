//! Ordering of collected messages and run statistics.

use std::time::Duration;

use crate::Message;

/// Sorts messages by timestamp, oldest first.
///
/// The sort is stable: messages with equal timestamps keep the order in
/// which they were collected (file name order, then position in the file).
///
/// # Example
///
/// ```
/// use slackpack::Message;
/// use slackpack::core::processor::sort_chronologically;
/// use chrono::{TimeZone, Utc};
///
/// let mut messages = vec![
///     Message::new("Bob", Utc.timestamp_opt(200, 0).unwrap(), "second"),
///     Message::new("Alice", Utc.timestamp_opt(100, 0).unwrap(), "first"),
/// ];
/// sort_chronologically(&mut messages);
/// assert_eq!(messages[0].text, "first");
/// ```
pub fn sort_chronologically(messages: &mut [Message]) {
    messages.sort_by_key(|msg| msg.timestamp);
}

/// Counters collected over one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Per-day documents read
    pub files_read: usize,
    /// Entries seen across all documents
    pub entries_seen: usize,
    /// Entries dropped for not being an exportable message
    pub entries_skipped: usize,
    /// Messages resolved and collected
    pub messages_collected: usize,
    /// Messages dropped by the filter
    pub messages_filtered: usize,
    /// Rows written to the CSV
    pub rows_written: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of collected messages removed by filters, in percent.
    pub fn filtered_ratio(&self) -> f64 {
        if self.messages_collected == 0 {
            return 0.0;
        }
        (self.messages_filtered as f64 / self.messages_collected as f64) * 100.0
    }

    /// Rows per second over `elapsed`, or `0.0` for an instant run.
    pub fn throughput(&self, elapsed: Duration) -> f64 {
        if elapsed.is_zero() {
            return 0.0;
        }
        self.rows_written as f64 / elapsed.as_secs_f64()
    }
}
