//! Collection of messages from a Slack channel export directory.
//!
//! Every regular file in the directory is read as one per-day document (a
//! JSON array of entries). Exportable entries are resolved against the
//! [`UserDirectory`] and their text rewritten by the [`MentionRewriter`];
//! everything else is counted and dropped.
//!
//! Files are visited in file-name order (`YYYY-MM-DD.json` for Slack), so
//! messages with equal timestamps come out in the same order on every run.
//!
//! Messages are not deduplicated: an entry present in two files is
//! collected twice.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Message;
use crate::config::SlackConfig;
use crate::core::processor::ProcessingStats;
use crate::error::{Result, SlackpackError};
use crate::mentions::MentionRewriter;
use crate::parsing::{SlackRawMessage, is_exportable, parse_slack_ts};
use crate::users::UserDirectory;

/// Reads per-day documents into resolved [`Message`]s.
///
/// # Example
///
/// ```
/// use slackpack::collector::MessageCollector;
/// use slackpack::config::SlackConfig;
/// use slackpack::mentions::MentionRewriter;
/// use slackpack::users::UserDirectory;
///
/// # fn main() -> slackpack::Result<()> {
/// let config = SlackConfig::default();
/// let users = UserDirectory::from_json_str(r#"[{"id": "U1", "name": "alice"}]"#, &config)?;
/// let rewriter = MentionRewriter::new();
///
/// let mut collector = MessageCollector::new(&users, &rewriter, &config);
/// let messages = collector.collect_str(
///     r#"[{"type": "message", "user": "U1", "ts": "1705314600.000100", "text": "hi <!channel>"}]"#,
///     None,
/// )?;
///
/// assert_eq!(messages[0].author, "alice");
/// assert_eq!(messages[0].text, "hi @channel");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MessageCollector<'a> {
    users: &'a UserDirectory,
    rewriter: &'a MentionRewriter,
    config: &'a SlackConfig,
    stats: ProcessingStats,
}

impl<'a> MessageCollector<'a> {
    pub fn new(users: &'a UserDirectory, rewriter: &'a MentionRewriter, config: &'a SlackConfig) -> Self {
        Self {
            users,
            rewriter,
            config,
            stats: ProcessingStats::new(),
        }
    }

    /// Collects messages from every per-day document in `dir`.
    ///
    /// The result is in file order, not time order.
    pub fn collect_dir(&mut self, dir: &Path) -> Result<Vec<Message>> {
        let mut messages = Vec::new();
        for path in day_files(dir)? {
            messages.extend(self.collect_file(&path)?);
        }

        tracing::info!(
            files = self.stats.files_read,
            entries = self.stats.entries_seen,
            skipped = self.stats.entries_skipped,
            messages = messages.len(),
            "collected export directory"
        );
        Ok(messages)
    }

    /// Collects messages from a single per-day document.
    pub fn collect_file(&mut self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        let messages = self.collect_str(&content, Some(path))?;
        self.stats.files_read += 1;

        tracing::debug!(file = %path.display(), messages = messages.len(), "read per-day document");
        Ok(messages)
    }

    /// Collects messages from per-day document content.
    ///
    /// `origin` is only used to annotate parse errors.
    pub fn collect_str(&mut self, content: &str, origin: Option<&Path>) -> Result<Vec<Message>> {
        let entries: Vec<SlackRawMessage> = serde_json::from_str(content)
            .map_err(|e| SlackpackError::day_parse(e, origin.map(Path::to_path_buf)))?;

        let mut messages = Vec::with_capacity(entries.len());
        for raw in &entries {
            self.stats.entries_seen += 1;

            if !is_exportable(raw, self.config) {
                self.stats.entries_skipped += 1;
                tracing::trace!(
                    msg_type = %raw.msg_type,
                    subtype = raw.subtype.as_deref().unwrap_or(""),
                    "skipped entry"
                );
                continue;
            }

            messages.push(self.resolve(raw)?);
            self.stats.messages_collected += 1;
        }

        Ok(messages)
    }

    /// Resolves one exportable entry.
    ///
    /// # Errors
    ///
    /// - [`SlackpackError::Schema`] if the entry has no `user`
    /// - [`SlackpackError::UnresolvedUser`] if the author or a bare mention is unknown
    /// - [`SlackpackError::InvalidTimestamp`] if `ts` is missing or malformed
    pub fn resolve(&self, raw: &SlackRawMessage) -> Result<Message> {
        let user_id = raw.user.as_deref().ok_or_else(|| {
            SlackpackError::schema(format!(
                "message entry without 'user' (ts: {})",
                raw.ts.as_deref().unwrap_or("?")
            ))
        })?;
        let author = self.users.resolve(user_id)?;

        let ts = raw.ts.as_deref().unwrap_or_default();
        let timestamp = parse_slack_ts(ts).ok_or_else(|| SlackpackError::invalid_timestamp(ts))?;

        let text = self
            .rewriter
            .rewrite(raw.text.as_deref().unwrap_or_default(), self.users)?;

        Ok(Message::new(author, timestamp, text))
    }

    /// Returns the counters accumulated so far.
    pub fn stats(&self) -> ProcessingStats {
        self.stats
    }
}

/// Lists the regular files of `dir`, sorted by file name.
pub fn day_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
