//! CSV output writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::Message;
use crate::core::models::{OutputConfig, OutputRow};
use crate::error::{Result, SlackpackError};

/// Writes messages to a CSV file.
///
/// # Format
/// - Delimiter: `,` (configurable)
/// - Columns: author, date, text; no header row
/// - Quoting: only fields containing the delimiter, a quote, or a line
///   break are quoted, inner quotes doubled
/// - Encoding: ASCII by default (non-ASCII characters dropped), UTF-8
///   with [`OutputConfig::keep_unicode`]
///
/// Returns the number of rows written.
pub fn write_csv(messages: &[Message], output_path: &Path, config: &OutputConfig) -> Result<usize> {
    let file = File::create(output_path).map_err(|e| SlackpackError::write(output_path, e))?;

    let rows = write_rows(BufWriter::new(file), messages, config)
        .map_err(|e| into_write_error(e, output_path))?;

    tracing::debug!(rows, path = %output_path.display(), "csv written");
    Ok(rows)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, messages, config)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn write_rows<W: Write>(out: W, messages: &[Message], config: &OutputConfig) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(config.delimiter)
        .from_writer(out);

    for msg in messages {
        let row = OutputRow::from_message(msg, config);
        writer.write_record([&row.author, &row.date, &row.text])?;
    }

    writer.flush()?;
    Ok(messages.len())
}

/// Reports I/O failures against the destination path.
fn into_write_error(err: SlackpackError, path: &Path) -> SlackpackError {
    match err {
        SlackpackError::Io(source) => SlackpackError::write(path, source),
        SlackpackError::Csv(e) if e.is_io_error() => match e.into_kind() {
            csv::ErrorKind::Io(source) => SlackpackError::write(path, source),
            kind => SlackpackError::write(path, io::Error::other(format!("{:?}", kind))),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::{NamedTempFile, tempdir};

    fn msg(author: &str, day: u32, text: &str) -> Message {
        let ts = Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap();
        Message::new(author, ts, text)
    }

    #[test]
    fn test_write_csv_basic() {
        let messages = vec![msg("Alice", 15, "Hello"), msg("Bob", 16, "Hi there")];

        let temp_file = NamedTempFile::new().unwrap();
        let rows = write_csv(&messages, temp_file.path(), &OutputConfig::new()).unwrap();
        assert_eq!(rows, 2);

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["Alice,2024-01-15,Hello", "Bob,2024-01-16,Hi there"]);
    }

    #[test]
    fn test_no_header_row() {
        let csv = to_csv(&[msg("Alice", 15, "Hello")], &OutputConfig::new()).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("Alice,"));
    }

    #[test]
    fn test_quoting_only_when_needed() {
        let messages = vec![
            msg("Alice", 15, "plain"),
            msg("Bob", 15, "a, b"),
            msg("Carol", 15, "say \"hi\""),
            msg("Dave", 15, "line1\nline2"),
        ];
        let csv = to_csv(&messages, &OutputConfig::new()).unwrap();

        assert!(csv.contains("Alice,2024-01-15,plain"));
        assert!(csv.contains("Bob,2024-01-15,\"a, b\""));
        assert!(csv.contains("Carol,2024-01-15,\"say \"\"hi\"\"\""));
        assert!(csv.contains("Dave,2024-01-15,\"line1\nline2\""));
    }

    #[test]
    fn test_non_ascii_dropped() {
        let csv = to_csv(&[msg("Zoë", 15, "café ☕")], &OutputConfig::new()).unwrap();
        assert_eq!(csv.lines().next(), Some("Zo,2024-01-15,caf "));
    }

    #[test]
    fn test_keep_unicode() {
        let config = OutputConfig::new().keep_unicode();
        let csv = to_csv(&[msg("Zoë", 15, "café")], &config).unwrap();
        assert_eq!(csv.lines().next(), Some("Zoë,2024-01-15,café"));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = OutputConfig::new().with_delimiter(b';');
        let csv = to_csv(&[msg("Alice", 15, "a, b")], &config).unwrap();
        assert_eq!(csv.lines().next(), Some("Alice;2024-01-15;a, b"));
    }

    #[test]
    fn test_empty_input_writes_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&[], temp_file.path(), &OutputConfig::new()).unwrap();
        assert!(std::fs::read_to_string(temp_file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_csv(&[msg("Alice", 15, "Hello")], &path, &OutputConfig::new()).unwrap_err();
        assert!(err.is_write());
        assert!(err.to_string().contains("out.csv"));
    }
}
