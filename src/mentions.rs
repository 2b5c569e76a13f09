//! Rewriting of Slack message markup into readable text.
//!
//! Slack stores mentions as `<@U0BM1CGQY>` (bare) or
//! `<@U0BM1CGQY|alice>` (annotated, mostly in join notices), the
//! channel-wide mention as `<!channel>`, and escapes `>` and `&` as HTML
//! entities. [`MentionRewriter::rewrite`] turns all of that into plain text:
//!
//! | Input | Output |
//! |-------|--------|
//! | `<!channel>` | `@channel` |
//! | `&gt;` / `&amp;` | `>` / `&` |
//! | `<@U123\|alice>` | `@alice` |
//! | `<@U123>` | `@` + directory name of `U123` |
//!
//! Annotated mentions must be replaced before bare ones.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::users::UserDirectory;

/// Slack markup for the channel-wide mention.
pub const CHANNEL_MENTION: &str = "<!channel>";

const ANNOTATED_MENTION: &str = r"<@(?P<id>U[A-Za-z0-9]+)\|(?P<label>[^<>|]+)>";
const BARE_MENTION: &str = r"<@(?P<id>U[A-Za-z0-9]+)>";

/// Rewrites Slack markup in message text.
///
/// Holds the compiled patterns; create it once and reuse it for every
/// message.
///
/// # Example
///
/// ```
/// use slackpack::config::SlackConfig;
/// use slackpack::mentions::MentionRewriter;
/// use slackpack::users::UserDirectory;
///
/// # fn main() -> slackpack::Result<()> {
/// let mut users = UserDirectory::new(&SlackConfig::default());
/// users.insert("U123", "Bob");
///
/// let rewriter = MentionRewriter::new();
/// assert_eq!(rewriter.rewrite("<@U123|Alice> hi", &users)?, "@Alice hi");
/// assert_eq!(rewriter.rewrite("<@U123>", &users)?, "@Bob");
/// assert_eq!(rewriter.rewrite("5 &gt; 3 &amp; true", &users)?, "5 > 3 & true");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MentionRewriter {
    annotated: Regex,
    bare: Regex,
}

impl MentionRewriter {
    /// Compiles the mention patterns.
    pub fn new() -> Self {
        Self {
            annotated: Regex::new(ANNOTATED_MENTION).expect("annotated mention pattern is valid"),
            bare: Regex::new(BARE_MENTION).expect("bare mention pattern is valid"),
        }
    }

    /// Rewrites `text`, resolving bare mentions through `users`.
    ///
    /// # Errors
    ///
    /// Returns [`SlackpackError::UnresolvedUser`](crate::SlackpackError::UnresolvedUser)
    /// if a bare mention names an id that is not in the directory.
    pub fn rewrite(&self, text: &str, users: &UserDirectory) -> Result<String> {
        let text = text
            .replace(CHANNEL_MENTION, "@channel")
            .replace("&gt;", ">")
            .replace("&amp;", "&");

        let text = self.annotated.replace_all(&text, "@${label}");
        self.replace_bare(&text, users)
    }

    /// Replaces every bare mention, stopping at the first unknown id.
    fn replace_bare(&self, text: &str, users: &UserDirectory) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in self.bare.captures_iter(text) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            out.push_str(&text[last..whole.start]);
            out.push('@');
            out.push_str(users.resolve(mention_id(&caps))?);
            last = whole.end;
        }

        out.push_str(&text[last..]);
        Ok(out)
    }
}

impl Default for MentionRewriter {
    fn default() -> Self {
        Self::new()
    }
}

fn mention_id<'t>(caps: &Captures<'t>) -> &'t str {
    caps.name("id").map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlackConfig;

    fn users() -> UserDirectory {
        let mut users = UserDirectory::new(&SlackConfig::default());
        users.insert("U123", "Bob");
        users.insert("U0BM1CGQY", "Alice Smith");
        users
    }

    fn rewrite(text: &str) -> Result<String> {
        MentionRewriter::new().rewrite(text, &users())
    }

    #[test]
    fn test_annotated_mention_uses_embedded_label() {
        assert_eq!(rewrite("<@U123|Alice> hi").unwrap(), "@Alice hi");
    }

    #[test]
    fn test_annotated_mention_not_looked_up() {
        // Label is trusted even for ids missing from the directory.
        assert_eq!(
            rewrite("<@U999|the100rabh> has joined the channel").unwrap(),
            "@the100rabh has joined the channel"
        );
    }

    #[test]
    fn test_bare_mention_resolved() {
        assert_eq!(rewrite("<@U123>").unwrap(), "@Bob");
        assert_eq!(
            rewrite("ping <@U0BM1CGQY> and <@U123>!").unwrap(),
            "ping @Alice Smith and @Bob!"
        );
    }

    #[test]
    fn test_slackbot_mention_resolved() {
        assert_eq!(rewrite("<@USLACKBOT> remind me").unwrap(), "@slackbot remind me");
    }

    #[test]
    fn test_bare_mention_unknown_user_fails() {
        let err = rewrite("hey <@U404>").unwrap_err();
        assert!(err.is_unresolved_user());
        assert!(err.to_string().contains("U404"));
    }

    #[test]
    fn test_channel_mention() {
        assert_eq!(rewrite("<!channel>").unwrap(), "@channel");
        assert_eq!(rewrite("<!channel> deploy at 5").unwrap(), "@channel deploy at 5");
    }

    #[test]
    fn test_entities() {
        assert_eq!(rewrite("5 &gt; 3 &amp; true").unwrap(), "5 > 3 & true");
    }

    #[test]
    fn test_only_two_entities_decoded() {
        assert_eq!(rewrite("a &lt; b &quot;c&quot;").unwrap(), "a &lt; b &quot;c&quot;");
    }

    #[test]
    fn test_double_escaped_entity_decoded_once_per_pass() {
        // `&amp;gt;` has no `&gt;` substring, so only `&amp;` is decoded.
        assert_eq!(rewrite("&amp;gt;").unwrap(), "&gt;");
    }

    #[test]
    fn test_mixed_mentions() {
        assert_eq!(
            rewrite("<@U999|carol> thanks <@U123> <!channel>").unwrap(),
            "@carol thanks @Bob @channel"
        );
    }

    #[test]
    fn test_unrelated_brackets_untouched() {
        let text = "see <http://example.com|example> in <#C024BE7LR|general>";
        assert_eq!(rewrite(text).unwrap(), text);
        assert_eq!(rewrite("<@user>").unwrap(), "<@user>");
        assert_eq!(rewrite("<@U12 3>").unwrap(), "<@U12 3>");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(rewrite("just text").unwrap(), "just text");
        assert_eq!(rewrite("").unwrap(), "");
    }
}
