#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use czmoji::config::ENV_KEYS;
use czmoji::questions::Answers;

pub const TYPE: &str = "func";
pub const SCOPE: &str = "everything";
pub const SUBJECT: &str = "testing123";
pub const BODY: &str = "A quick brown fox jumps over the dog";
pub const ISSUES: &str = "a issues is not a person that kicks things";
pub const BREAKING: &str = "asdhdfkjhbakjdhjkashd adhfajkhs asdhkjdsh ahshd";

pub const LONG_BODY: &str = concat!(
    "a a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a",
    "a a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a",
    "a a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a aa a",
);

pub const LONG_ISSUES: &str = concat!(
    "b b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b",
    "b b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b",
    "b b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b bb b",
);

/// Split `text` at fixed 100-character boundaries, trimming each piece.
pub fn split_at_hundreds(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(100)
        .map(|c| c.iter().collect::<String>().trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn answers(pairs: &[(&str, &str)]) -> Answers {
    pairs
        .iter()
        .fold(Answers::new(), |acc, (name, value)| acc.with(name, *value))
}

pub struct DirGuard {
    original: PathBuf,
}

impl DirGuard {
    pub fn enter(path: &Path) -> Self {
        let original = std::env::current_dir().expect("failed to read current directory");
        std::env::set_current_dir(path).expect("failed to change current directory");
        Self { original }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub struct EnvGuard {
    previous: HashMap<String, Option<String>>,
}

impl EnvGuard {
    pub fn set(pairs: &[(&str, &str)]) -> Self {
        let mut previous = HashMap::new();
        for (key, value) in pairs {
            previous.insert((*key).to_string(), std::env::var(key).ok());
            std::env::set_var(key, value);
        }
        Self { previous }
    }

    pub fn clear(keys: &[&str]) -> Self {
        let mut previous = HashMap::new();
        for key in keys {
            previous.insert((*key).to_string(), std::env::var(key).ok());
            std::env::remove_var(key);
        }
        Self { previous }
    }

    /// Clear every `CZ_*` key and point the global config at `config_home`.
    pub fn isolated(config_home: &Path) -> (Self, Self) {
        let cleared = Self::clear(ENV_KEYS);
        let home = config_home.to_string_lossy().to_string();
        let set = Self::set(&[("CZMOJI_CONFIG_HOME", home.as_str())]);
        (cleared, set)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            if let Some(value) = value {
                std::env::set_var(key, value);
            } else {
                std::env::remove_var(key);
            }
        }
    }
}
