//! Raw Slack export records and the small helpers that interpret them.
//!
//! A Slack channel export is a directory with one JSON array per day
//! (`2024-01-15.json`, ...) plus a workspace-wide `users.json`. The types in
//! this module mirror those documents closely; everything past this point
//! works on [`Message`](crate::Message).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::SlackConfig;

/// Raw entry of a per-day document.
///
/// ```json
/// {
///   "type": "message",
///   "subtype": "channel_join",
///   "user": "U0BM1CGQY",
///   "ts": "1445434856.000002",
///   "text": "<@U0BM1CGQY|alice> has joined the channel"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SlackRawMessage {
    /// Entry type (we only care about "message")
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Message subtype, absent for plain user messages
    pub subtype: Option<String>,
    /// Author user id
    pub user: Option<String>,
    /// Seconds since the epoch with microsecond fraction, as a string
    pub ts: Option<String>,
    /// Message text in Slack markup
    pub text: Option<String>,
}

/// Raw entry of `users.json`.
///
/// Only the fields used to build display names are deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackUser {
    /// User id (`U…`)
    pub id: String,
    /// Account handle
    pub name: Option<String>,
    /// Full name as typed by the user, possibly in any script
    pub real_name: Option<String>,
}

/// Returns `true` if the entry is an authored chat message worth exporting.
///
/// Entries of other types and entries whose subtype is skipped by the
/// configuration (`channel_join` by default) are dropped.
pub fn is_exportable(msg: &SlackRawMessage, config: &SlackConfig) -> bool {
    if msg.msg_type != "message" {
        return false;
    }
    !msg
        .subtype
        .as_deref()
        .is_some_and(|subtype| config.skips_subtype(subtype))
}

/// Parses a Slack `ts` value to a UTC timestamp.
///
/// Slack stores timestamps as decimal strings like `"1445434856.000002"`.
/// Plain decimal strings are converted digit-exact; anything else that
/// still parses as a float (e.g. exponent notation) goes through `f64`.
pub fn parse_slack_ts(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    let (secs, frac) = ts.split_once('.').unwrap_or((ts, ""));

    if !secs.is_empty()
        && secs.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
    {
        let secs = secs.parse::<i64>().ok()?;
        return DateTime::from_timestamp(secs, fraction_to_nanos(frac));
    }

    parse_float_ts(ts)
}

/// Converts the digits after the decimal point to nanoseconds.
fn fraction_to_nanos(frac: &str) -> u32 {
    let mut digits: String = frac.chars().take(9).collect();
    while digits.len() < 9 {
        digits.push('0');
    }
    digits.parse().unwrap_or(0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_float_ts(ts: &str) -> Option<DateTime<Utc>> {
    let value = ts.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }

    let secs = value.floor();
    let nanos = (((value - secs) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(secs as i64, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn raw(msg_type: &str, subtype: Option<&str>) -> SlackRawMessage {
        SlackRawMessage {
            msg_type: msg_type.to_string(),
            subtype: subtype.map(ToString::to_string),
            user: Some("U1".to_string()),
            ts: Some("1705314600.000100".to_string()),
            text: Some("hello".to_string()),
        }
    }

    #[test]
    fn test_parse_slack_ts_with_fraction() {
        let ts = parse_slack_ts("1705314600.000100").unwrap();
        assert_eq!(ts.timestamp(), 1705314600);
        assert_eq!(ts.nanosecond(), 100_000);
    }

    #[test]
    fn test_parse_slack_ts_integer() {
        let ts = parse_slack_ts("1705314600").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_slack_ts_exponent_falls_back_to_float() {
        let ts = parse_slack_ts("1.7053146e9").unwrap();
        assert_eq!(ts.timestamp(), 1705314600);
    }

    #[test]
    fn test_parse_slack_ts_preserves_sub_second_order() {
        let a = parse_slack_ts("1705314600.000001").unwrap();
        let b = parse_slack_ts("1705314600.000002").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_parse_slack_ts_invalid() {
        assert!(parse_slack_ts("").is_none());
        assert!(parse_slack_ts("not-a-number").is_none());
        assert!(parse_slack_ts("NaN").is_none());
        assert!(parse_slack_ts("inf").is_none());
    }

    #[test]
    fn test_is_exportable() {
        let config = SlackConfig::default();
        assert!(is_exportable(&raw("message", None), &config));
        assert!(is_exportable(&raw("message", Some("bot_message")), &config));
        assert!(!is_exportable(&raw("message", Some("channel_join")), &config));
        assert!(!is_exportable(&raw("event", None), &config));
    }

    #[test]
    fn test_deserialize_raw_message_ignores_unknown_fields() {
        let json = r#"{"type":"message","user":"U1","ts":"1.0","text":"hi","reactions":[]}"#;
        let msg: SlackRawMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.msg_type, "message");
        assert!(msg.subtype.is_none());
        assert_eq!(msg.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_deserialize_user_without_real_name() {
        let json = r#"{"id":"U1","name":"alice"}"#;
        let user: SlackUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.name.as_deref(), Some("alice"));
        assert!(user.real_name.is_none());
    }
}
