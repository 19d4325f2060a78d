use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::catalog::TypeCatalog;
use crate::error::ConfigError;

/// Project-level config file, looked up from the working directory upwards.
pub const PROJECT_CONFIG_FILE: &str = ".czmoji.toml";

/// commitlint config files whose `header-max-length` rule seeds the header
/// width, in lookup order.
pub const COMMITLINT_CONFIG_FILES: &[&str] = &[
    ".commitlintrc.json",
    ".commitlintrc.yaml",
    ".commitlintrc.yml",
    ".commitlintrc.toml",
];

const HEADER_MAX_LENGTH_RULE: &str = "header-max-length";

const DEFAULT_MAX_LINE_WIDTH: usize = 100;
const DEFAULT_MAX_HEADER_WIDTH: usize = 100;

/// Fully resolved configuration. Built once per invocation by
/// [`AppConfig::resolve`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    pub max_line_width: usize,
    pub max_header_width: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_issues: Option<String>,
    pub types: TypeCatalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
            max_header_width: DEFAULT_MAX_HEADER_WIDTH,
            default_type: None,
            default_scope: None,
            default_subject: None,
            default_body: None,
            default_issues: None,
            types: TypeCatalog::default(),
        }
    }
}

/// One source of configuration. Unset fields leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub max_line_width: Option<usize>,
    pub max_header_width: Option<usize>,
    pub default_type: Option<String>,
    pub default_scope: Option<String>,
    pub default_subject: Option<String>,
    pub default_body: Option<String>,
    pub default_issues: Option<String>,
    /// Replaces the whole catalog when present.
    pub types: Option<TypeCatalog>,
}

/// Environment variables understood by [`ConfigLayer::from_env_map`].
pub const ENV_KEYS: &[&str] = &[
    "CZ_MAX_HEADER_WIDTH",
    "CZ_MAX_LINE_WIDTH",
    "CZ_TYPE",
    "CZ_SCOPE",
    "CZ_SUBJECT",
    "CZ_BODY",
    "CZ_ISSUES",
];

/// The part of a commitlint config this tool reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitlintConfig {
    #[serde(default)]
    pub rules: HashMap<String, serde_json::Value>,
}

impl ConfigLayer {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Layer carrying only the header width from a commitlint config, whose
    /// rule reads `[level, applicable, length]`. `None` when the rule is
    /// absent.
    pub fn from_commitlint(config: &CommitlintConfig) -> Result<Option<Self>, ConfigError> {
        let Some(rule) = config.rules.get(HEADER_MAX_LENGTH_RULE) else {
            return Ok(None);
        };
        let width = rule
            .get(2)
            .and_then(serde_json::Value::as_u64)
            .and_then(|width| usize::try_from(width).ok())
            .ok_or_else(|| ConfigError::InvalidNumber {
                key: HEADER_MAX_LENGTH_RULE.to_string(),
                value: rule.to_string(),
            })?;
        Ok(Some(Self {
            max_header_width: Some(width),
            ..Self::default()
        }))
    }

    pub fn from_env_map(map: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut layer = Self::default();
        for key in ENV_KEYS {
            let Some(val) = map.get(*key) else {
                continue;
            };
            match *key {
                "CZ_MAX_HEADER_WIDTH" => layer.max_header_width = Some(parse_width(key, val)?),
                "CZ_MAX_LINE_WIDTH" => layer.max_line_width = Some(parse_width(key, val)?),
                "CZ_TYPE" => layer.default_type = Some(val.clone()),
                "CZ_SCOPE" => layer.default_scope = Some(val.clone()),
                "CZ_SUBJECT" => layer.default_subject = Some(val.clone()),
                "CZ_BODY" => layer.default_body = Some(val.clone()),
                "CZ_ISSUES" => layer.default_issues = Some(val.clone()),
                _ => {}
            }
        }
        Ok(layer)
    }
}

impl AppConfig {
    /// Load config with layered resolution: defaults → commitlint header
    /// width → global TOML → project TOML → project .env → env vars →
    /// `overrides`
    pub fn load(overrides: ConfigLayer) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Self::load_from(&cwd, overrides)
    }

    pub fn load_from(dir: &Path, overrides: ConfigLayer) -> Result<Self> {
        let mut layers = Vec::new();

        if let Some(path) = find_commitlint_config(dir) {
            debug!("applying commitlint config {}", path.display());
            let config = read_commitlint_config(&path)?;
            if let Some(layer) = ConfigLayer::from_commitlint(&config)
                .with_context(|| format!("Invalid rule in {}", path.display()))?
            {
                layers.push(layer);
            }
        }

        if let Some(path) = global_config_path() {
            if path.exists() {
                debug!("applying global config {}", path.display());
                layers.push(read_toml_layer(&path)?);
            }
        }

        let project_dir = find_project_dir(dir);
        if let Some(project) = &project_dir {
            let path = project.join(PROJECT_CONFIG_FILE);
            debug!("applying project config {}", path.display());
            layers.push(read_toml_layer(&path)?);
        }

        let env_path = project_dir.as_deref().unwrap_or(dir).join(".env");
        if env_path.exists() {
            debug!("applying {}", env_path.display());
            let map = read_dotenv(&env_path)?;
            layers.push(
                ConfigLayer::from_env_map(&map)
                    .with_context(|| format!("Invalid value in {}", env_path.display()))?,
            );
        }

        let mut env_map = HashMap::new();
        for key in ENV_KEYS {
            if let Ok(val) = std::env::var(key) {
                env_map.insert((*key).to_string(), val);
            }
        }
        layers.push(ConfigLayer::from_env_map(&env_map).context("Invalid environment variable")?);
        layers.push(overrides);

        Ok(Self::resolve(&layers)?)
    }

    /// Merge `layers` (lowest precedence first) onto the built-in defaults
    /// and validate the result.
    pub fn resolve(layers: &[ConfigLayer]) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        for layer in layers {
            cfg.merge_from(layer);
        }
        cfg.validate()?;
        Ok(cfg)
    }

    fn merge_from(&mut self, layer: &ConfigLayer) {
        if let Some(width) = layer.max_line_width {
            self.max_line_width = width;
        }
        if let Some(width) = layer.max_header_width {
            self.max_header_width = width;
        }
        merge_text(&mut self.default_type, &layer.default_type);
        merge_text(&mut self.default_scope, &layer.default_scope);
        merge_text(&mut self.default_subject, &layer.default_subject);
        merge_text(&mut self.default_body, &layer.default_body);
        merge_text(&mut self.default_issues, &layer.default_issues);
        if let Some(types) = &layer.types {
            self.types = types.clone();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_width == 0 {
            return Err(ConfigError::ZeroWidth("max_line_width"));
        }
        if self.max_header_width == 0 {
            return Err(ConfigError::ZeroWidth("max_header_width"));
        }
        self.types.validate()?;
        if let Some(kind) = &self.default_type {
            if !self.types.is_selectable(kind) {
                return Err(ConfigError::UnknownDefaultType(kind.clone()));
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// An empty value clears whatever a lower layer set.
fn merge_text(target: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *target = if value.trim().is_empty() {
            None
        } else {
            Some(value.clone())
        };
    }
}

fn parse_width(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Global config file path
pub fn global_config_path() -> Option<PathBuf> {
    if let Some(override_dir) = std::env::var_os("CZMOJI_CONFIG_HOME") {
        let override_path = PathBuf::from(override_dir);
        if !override_path.as_os_str().is_empty() {
            return Some(override_path.join("czmoji").join("config.toml"));
        }
    }
    dirs::config_dir().map(|d| d.join("czmoji").join("config.toml"))
}

/// Nearest ancestor of `start` (inclusive) holding a project config file.
pub fn find_project_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
}

/// First commitlint config found walking up from `start`.
pub fn find_commitlint_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        COMMITLINT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

fn read_commitlint_config(path: &Path) -> Result<CommitlintConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(anyhow::Error::from),
        Some("toml") => toml::from_str(&content).map_err(anyhow::Error::from),
        _ => serde_yaml::from_str(&content).map_err(anyhow::Error::from),
    };
    parsed.with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_toml_layer(path: &Path) -> Result<ConfigLayer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    ConfigLayer::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    let entries = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    for entry in entries {
        let (key, val) = entry.with_context(|| format!("Failed to parse {}", path.display()))?;
        map.insert(key, val);
    }
    Ok(map)
}
