use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bookkeeping types that are never offered as a choice.
pub const RESERVED_TYPES: &[&str] = &["chore", "revert"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub description: String,
}

impl TypeEntry {
    pub fn new(emoji: &str, description: &str) -> Self {
        Self {
            emoji: emoji.into(),
            description: description.into(),
        }
    }
}

/// Ordered mapping of change-type key to its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCatalog(IndexMap<String, TypeEntry>);

/// A selectable entry of the `type` question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        [
            ("feat", "\u{2728}", "A new feature"),
            ("fix", "\u{1f41b}", "A bug fix"),
            ("docs", "\u{1f4dd}", "Documentation only changes"),
            (
                "style",
                "\u{1f484}",
                "Changes that do not affect the meaning of the code (white-space, formatting, etc)",
            ),
            (
                "refactor",
                "\u{267b}\u{fe0f}",
                "A code change that neither fixes a bug nor adds a feature",
            ),
            ("perf", "\u{26a1}\u{fe0f}", "A code change that improves performance"),
            ("test", "\u{2705}", "Adding missing tests or correcting existing tests"),
            (
                "build",
                "\u{1f477}",
                "Changes that affect the build system or external dependencies",
            ),
            ("ci", "\u{1f49a}", "Changes to our CI configuration files and scripts"),
            ("chore", "\u{1f527}", "Other changes that don't modify src or test files"),
            ("revert", "\u{23ea}", "Reverts a previous commit"),
        ]
        .into_iter()
        .map(|(key, emoji, desc)| (key.to_string(), TypeEntry::new(emoji, desc)))
        .collect()
    }
}

impl FromIterator<(String, TypeEntry)> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = (String, TypeEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TypeCatalog {
    pub fn get(&self, key: &str) -> Option<&TypeEntry> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries offered to the user, in catalog order, reserved keys excluded.
    pub fn selectable(&self) -> impl Iterator<Item = (&str, &TypeEntry)> {
        self.0
            .iter()
            .filter(|(key, _)| !RESERVED_TYPES.contains(&key.as_str()))
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn is_selectable(&self, key: &str) -> bool {
        self.selectable().any(|(k, _)| k == key)
    }

    /// Render the `type` question choices. Key column width is taken over the
    /// whole catalog so labels line up regardless of the exclusions.
    pub fn choices(&self) -> Vec<Choice> {
        let width = self.0.keys().map(|k| k.chars().count()).max().unwrap_or(0) + 1;
        self.selectable()
            .map(|(key, entry)| Choice {
                name: format!(
                    "{} {:<width$} {}",
                    entry.emoji,
                    format!("{key}:"),
                    entry.description
                ),
                value: key.to_string(),
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, entry) in self.selectable() {
            if entry.emoji.trim().is_empty() {
                return Err(ConfigError::MissingEmoji(key.to_string()));
            }
            if entry.description.trim().is_empty() {
                return Err(ConfigError::MissingDescription(key.to_string()));
            }
        }
        if self.selectable().next().is_none() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(())
    }
}
