//! Output writers.
//!
//! - [`write_csv`] / [`to_csv`] - author, date, text rows without a header
//!
//! # Example
//!
//! ```rust
//! # fn main() -> slackpack::Result<()> {
//! use slackpack::core::output::to_csv;
//! use slackpack::core::models::OutputConfig;
//! use slackpack::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
//! let messages = vec![Message::new("Alice", ts, "Hello, café!")];
//!
//! let csv = to_csv(&messages, &OutputConfig::new())?;
//! assert_eq!(csv.lines().next(), Some("Alice,2024-01-15,\"Hello, caf!\""));
//! # Ok(())
//! # }
//! ```

mod csv_writer;

pub use csv_writer::{to_csv, write_csv};
