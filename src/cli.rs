//! Command-line interface definition using clap.
//!
//! [`Args`] maps one-to-one onto [`ConvertOptions`]; see
//! [`Args::to_options`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::SlackConfig;
use crate::convert::ConvertOptions;
use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Flatten a Slack channel export into a single CSV sorted by time.
#[derive(Parser, Debug, Clone)]
#[command(name = "slackpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slackpack export/general export/users.json general.csv
    slackpack export/general export/users.json general.csv --after 2024-01-01
    slackpack export/general export/users.json general.csv --with-time --from alice")]
pub struct Args {
    /// Directory of per-day JSON documents for one channel
    pub export_dir: PathBuf,

    /// Path to users.json
    pub users: PathBuf,

    /// Path to output CSV file
    pub output: PathBuf,

    /// Only export messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only export messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only export messages from this author (display name)
    #[arg(long, value_name = "NAME")]
    pub from: Option<String>,

    /// Write date and time of day instead of the date only
    #[arg(short = 't', long)]
    pub with_time: bool,

    /// Keep non-ASCII characters instead of dropping them
    #[arg(long)]
    pub keep_unicode: bool,

    /// List the loaded users
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the progress report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Builds the conversion options from the flags.
    ///
    /// # Errors
    ///
    /// Returns [`SlackpackError::InvalidDate`](crate::SlackpackError::InvalidDate)
    /// for a malformed `--after` / `--before`.
    pub fn to_options(&self) -> Result<ConvertOptions> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_author(from.clone());
        }

        let mut output = OutputConfig::new();
        if self.with_time {
            output = output.with_time();
        }
        if self.keep_unicode {
            output = output.keep_unicode();
        }

        Ok(ConvertOptions::new()
            .with_slack(SlackConfig::default())
            .with_filter(filter)
            .with_output(output))
    }
}
