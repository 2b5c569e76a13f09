//! One-call conversion of a Slack channel export to CSV.
//!
//! [`convert`] runs the whole pipeline: check inputs, load the user
//! directory, collect every per-day document, filter, sort, write. The CSV
//! is only created once every message has been resolved, so a failed run
//! never leaves a partial output file behind (apart from I/O failures while
//! writing the file itself).

use std::path::Path;

use crate::collector::MessageCollector;
use crate::config::SlackConfig;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::models::OutputConfig;
use crate::core::output::write_csv;
use crate::core::processor::{ProcessingStats, sort_chronologically};
use crate::error::{InputKind, Result, SlackpackError};
use crate::mentions::MentionRewriter;
use crate::users::UserDirectory;

/// Everything that tunes a conversion run. The defaults reproduce the plain
/// export: all messages, date-only column, ASCII-only text.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub slack: SlackConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slack(mut self, slack: SlackConfig) -> Self {
        self.slack = slack;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}

/// Checks that `path` exists and is of the expected kind.
///
/// # Errors
///
/// Returns [`SlackpackError::InputNotFound`] otherwise.
pub fn ensure_input(path: &Path, kind: InputKind) -> Result<()> {
    let ok = match kind {
        InputKind::Directory => path.is_dir(),
        InputKind::File => path.is_file(),
    };
    if ok {
        Ok(())
    } else {
        Err(SlackpackError::input_not_found(kind, path))
    }
}

/// Converts the export in `export_dir` into a CSV at `output_path`.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use slackpack::{ConvertOptions, convert};
///
/// let stats = convert(
///     Path::new("slack_export/general"),
///     Path::new("slack_export/users.json"),
///     Path::new("general.csv"),
///     &ConvertOptions::default(),
/// )?;
/// println!("{} rows", stats.rows_written);
/// # Ok::<(), slackpack::SlackpackError>(())
/// ```
pub fn convert(
    export_dir: &Path,
    users_path: &Path,
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<ProcessingStats> {
    ensure_input(export_dir, InputKind::Directory)?;
    ensure_input(users_path, InputKind::File)?;

    let users = UserDirectory::load(users_path, &options.slack)?;
    let rewriter = MentionRewriter::new();

    let mut collector = MessageCollector::new(&users, &rewriter, &options.slack);
    let messages = collector.collect_dir(export_dir)?;
    let mut stats = collector.stats();

    let mut messages = apply_filters(messages, &options.filter);
    stats.messages_filtered = stats.messages_collected - messages.len();

    sort_chronologically(&mut messages);
    stats.rows_written = write_csv(&messages, output_path, &options.output)?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_ensure_input_directory() {
        let dir = tempdir().unwrap();
        assert!(ensure_input(dir.path(), InputKind::Directory).is_ok());

        let err = ensure_input(dir.path(), InputKind::File).unwrap_err();
        assert!(err.is_input_not_found());
    }

    #[test]
    fn test_ensure_input_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(ensure_input(file.path(), InputKind::File).is_ok());

        let err = ensure_input(file.path(), InputKind::Directory).unwrap_err();
        assert!(err.is_input_not_found());
    }

    #[test]
    fn test_ensure_input_missing() {
        let err = ensure_input(Path::new("/definitely/not/here"), InputKind::File).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here"));
    }

    #[test]
    fn test_convert_options_builders() {
        let options = ConvertOptions::new()
            .with_output(OutputConfig::new().with_time())
            .with_filter(FilterConfig::new().with_author("alice"))
            .with_slack(SlackConfig::new().with_bot("UBOT", "bot"));

        assert_eq!(options.output.date_format, "%Y-%m-%d %H:%M:%S");
        assert!(options.filter.is_active());
        assert_eq!(options.slack.bot_id, "UBOT");
    }
}
