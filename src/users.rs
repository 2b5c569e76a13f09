//! User directory: Slack user ids to display names.
//!
//! Built once from `users.json` and then passed by reference to everything
//! that resolves users (the collector and the mention rewriter).
//!
//! # Display Name Rule
//!
//! `real_name` wins when it is present, non-empty, and contains at least one
//! ASCII letter. Otherwise the account handle (`name`) is used, which keeps
//! names readable after the CSV writer narrows output to ASCII.
//!
//! ```
//! use slackpack::users::UserDirectory;
//! use slackpack::config::SlackConfig;
//!
//! # fn main() -> slackpack::Result<()> {
//! let json = r#"[
//!     {"id": "U1", "name": "alice", "real_name": "Alice Smith"},
//!     {"id": "U2", "name": "ivan", "real_name": "Иван"}
//! ]"#;
//!
//! let users = UserDirectory::from_json_str(json, &SlackConfig::default())?;
//! assert_eq!(users.resolve("U1")?, "Alice Smith");
//! assert_eq!(users.resolve("U2")?, "ivan");
//! assert_eq!(users.resolve("USLACKBOT")?, "slackbot");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::SlackConfig;
use crate::error::{Result, SlackpackError};
use crate::parsing::SlackUser;

/// Mapping from user id to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    /// Creates a directory holding only the synthetic automated-sender entry.
    pub fn new(config: &SlackConfig) -> Self {
        let mut names = HashMap::new();
        names.insert(config.bot_id.clone(), config.bot_name.clone());
        Self { names }
    }

    /// Loads `users.json` from disk.
    pub fn load(path: &Path, config: &SlackConfig) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let users: Vec<SlackUser> = serde_json::from_str(&content)
            .map_err(|e| SlackpackError::users_parse(e, Some(path.to_path_buf())))?;
        Self::from_users(users, config)
    }

    /// Parses `users.json` content from a string.
    pub fn from_json_str(content: &str, config: &SlackConfig) -> Result<Self> {
        let users: Vec<SlackUser> =
            serde_json::from_str(content).map_err(|e| SlackpackError::users_parse(e, None))?;
        Self::from_users(users, config)
    }

    /// Builds the directory from already deserialized users.
    ///
    /// The automated sender is inserted first, so a directory that does list
    /// it (it normally doesn't) overrides the synthetic name.
    pub fn from_users(
        users: impl IntoIterator<Item = SlackUser>,
        config: &SlackConfig,
    ) -> Result<Self> {
        let mut directory = Self::new(config);

        for user in users {
            let name = display_name_for(&user).ok_or_else(|| {
                SlackpackError::schema(format!(
                    "user '{}' has neither 'name' nor 'real_name'",
                    user.id
                ))
            })?;
            tracing::trace!(id = %user.id, %name, "loaded user");
            directory.names.insert(user.id, name);
        }

        tracing::debug!(users = directory.len(), "user directory loaded");
        Ok(directory)
    }

    /// Adds or replaces a single entry.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Returns the display name for `id`, if known.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Returns the display name for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SlackpackError::UnresolvedUser`] if the id is unknown.
    pub fn resolve(&self, id: &str) -> Result<&str> {
        self.get(id)
            .ok_or_else(|| SlackpackError::unresolved_user(id))
    }

    /// Returns `true` if `id` is in the directory.
    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Number of entries, including the automated sender.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `(id, display name)` pairs ordered by id.
    pub fn display_names(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .names
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Picks the display name for one `users.json` entry.
///
/// Returns `None` when the entry has no usable name at all.
pub fn display_name_for(user: &SlackUser) -> Option<String> {
    let real_name = user.real_name.as_deref().filter(|r| !r.is_empty());

    if let Some(real_name) = real_name {
        if real_name.chars().any(|c| c.is_ascii_alphabetic()) {
            return Some(real_name.to_string());
        }
    }

    user.name
        .as_deref()
        .filter(|n| !n.is_empty())
        .or(real_name)
        .map(ToString::to_string)
}
