//! Output configuration and the CSV row model.

use serde::{Deserialize, Serialize};

use crate::Message;

/// Date-only column format (default).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date and time column format used by [`OutputConfig::with_time`].
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Configuration for the CSV output.
///
/// The defaults produce comma-separated, ASCII-only rows with a
/// `YYYY-MM-DD` date column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Drop every non-ASCII character from every field
    pub ascii_only: bool,
    /// `strftime` format of the date column
    pub date_format: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            ascii_only: true,
            date_format: DATE_FORMAT.to_string(),
            delimiter: b',',
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the time of day next to the date.
    #[must_use]
    pub fn with_time(mut self) -> Self {
        self.date_format = DATE_TIME_FORMAT.to_string();
        self
    }

    /// Keeps non-ASCII characters in the output.
    #[must_use]
    pub fn keep_unicode(mut self) -> Self {
        self.ascii_only = false;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// One CSV row: author, date, text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub author: String,
    pub date: String,
    pub text: String,
}

impl OutputRow {
    /// Builds the row for `msg`, applying the date format and character policy.
    pub fn from_message(msg: &Message, config: &OutputConfig) -> Self {
        let date = msg.timestamp.format(&config.date_format).to_string();
        let field = |s: &str| {
            if config.ascii_only {
                to_ascii(s)
            } else {
                s.to_string()
            }
        };

        Self {
            author: field(&msg.author),
            date: field(&date),
            text: field(&msg.text),
        }
    }
}

/// Drops every character outside the 0–127 range.
///
/// ```
/// use slackpack::core::models::to_ascii;
///
/// assert_eq!(to_ascii("café"), "caf");
/// assert_eq!(to_ascii("Привет, world"), ", world");
/// ```
pub fn to_ascii(s: &str) -> String {
    s.chars().filter(char::is_ascii).collect()
}
