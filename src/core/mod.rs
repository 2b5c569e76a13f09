//! Core processing logic for slackpack.
//!
//! This module contains:
//! - [`models`] - Output configuration and the CSV row model
//! - [`filter`] - Message filtering by date and author
//! - [`processor`] - Chronological sorting and run statistics
//! - [`output`] - The CSV writer

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::{OutputConfig, OutputRow, to_ascii};
pub use output::{to_csv, write_csv};
pub use processor::{ProcessingStats, sort_chronologically};

// Re-export Message from the crate root
pub use crate::Message;
