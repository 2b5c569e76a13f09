//! # Slackpack
//!
//! A Rust library for flattening Slack channel exports into a single CSV
//! file sorted by time.
//!
//! ## Overview
//!
//! A Slack export stores one JSON document per channel per day plus a
//! workspace-wide `users.json`. Slackpack:
//!
//! 1. loads `users.json` into a [`UserDirectory`](users::UserDirectory)
//! 2. reads every per-day document, keeping authored messages only
//!    (`channel_join` notices are dropped)
//! 3. rewrites `<@U…>` mentions, `<!channel>` and `&gt;`/`&amp;` into text
//! 4. sorts everything by timestamp
//! 5. writes `author,date,text` rows, ASCII-only by default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use slackpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let stats = convert(
//!         Path::new("export/general"),
//!         Path::new("export/users.json"),
//!         Path::new("general.csv"),
//!         &ConvertOptions::default(),
//!     )?;
//!     println!("{} rows written", stats.rows_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`users`] — [`UserDirectory`](users::UserDirectory), display name rules
//! - [`mentions`] — [`MentionRewriter`](mentions::MentionRewriter)
//! - [`collector`] — [`MessageCollector`](collector::MessageCollector)
//! - [`parsing`] — raw export records, `ts` parsing
//! - [`core`] — filtering, sorting, CSV output
//! - [`config`] — [`SlackConfig`](config::SlackConfig)
//! - [`error`] — [`SlackpackError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod collector;
pub mod config;
pub mod convert;
pub mod core;
pub mod error;
pub mod mentions;
pub mod message;
pub mod parsing;
pub mod users;

// Re-export the main types at the crate root for convenience
pub use convert::{ConvertOptions, convert, ensure_input};
pub use error::{Result, SlackpackError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use slackpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{InputKind, Result, SlackpackError};

    pub use crate::convert::{ConvertOptions, convert, ensure_input};

    pub use crate::config::SlackConfig;
    pub use crate::users::UserDirectory;
    pub use crate::mentions::MentionRewriter;
    pub use crate::collector::MessageCollector;

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::processor::{ProcessingStats, sort_chronologically};
}
