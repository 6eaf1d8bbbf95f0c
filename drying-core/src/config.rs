use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::{
    advisor::DryingAdvisor,
    messages::{Locale, MessageKey, Messages},
    rules::RuleConfig,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine platform config directory")]
    NoConfigDir,

    #[error("Failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("Failed to serialize configuration to TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// locale = "en"
///
/// [rules]
/// cold_below_c = 3.0
///
/// [messages]
/// score_easy = "Hang it out!"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub rules: RuleConfig,
    /// Replacement texts keyed by message name, e.g. `score_easy`.
    pub messages: BTreeMap<String, String>,
}

impl Config {
    /// Load config from the platform location, or defaults if it doesn't
    /// exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_owned(), source })?;

        let cfg: Config = toml::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_owned(), source })?;

        for name in cfg.unknown_message_keys() {
            warn!(key = name, path = %path.display(), "ignoring unknown message key");
        }

        Ok(cfg)
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| ConfigError::Write { path: parent.to_owned(), source })?;
        }

        let toml = toml::to_string_pretty(self)?;

        fs::write(path, toml).map_err(|source| ConfigError::Write { path: path.to_owned(), source })
    }

    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "drying-advisor", "drying")
            .ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_message(&mut self, key: MessageKey, text: impl Into<String>) {
        self.messages.insert(key.as_str().to_string(), text.into());
    }

    pub fn unknown_message_keys(&self) -> impl Iterator<Item = &str> {
        self.messages
            .keys()
            .map(String::as_str)
            .filter(|name| MessageKey::from_name(name).is_none())
    }

    /// Built-in texts for the configured locale with the `[messages]`
    /// replacements applied.
    pub fn messages(&self) -> Messages {
        self.messages
            .iter()
            .filter_map(|(name, text)| MessageKey::from_name(name).map(|key| (key, text)))
            .fold(Messages::new(self.locale), |messages, (key, text)| {
                messages.with_override(key, text.as_str())
            })
    }

    pub fn advisor(&self) -> DryingAdvisor {
        DryingAdvisor::new(self.rules.clone(), self.messages())
    }
}
