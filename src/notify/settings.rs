//! Telegram settings file
//!
//! A TOML file with a `[telegram]` table:
//!
//! ```toml
//! [telegram]
//! bot_token = "123456:ABC..."
//! chat_id = "-1001234567890"
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Value shipped in the sample config for an unconfigured bot token
pub const TOKEN_PLACEHOLDER: &str = "your_bot_token_here";
/// Value shipped in the sample config for an unconfigured chat id
pub const CHAT_ID_PLACEHOLDER: &str = "your_chat_id_here";

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("section [telegram] not found in {path}")]
    MissingSection { path: String },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("bot token is not set, edit the [telegram] bot_token value in the config file")]
    TokenNotSet,
    #[error("chat id is not set, edit the [telegram] chat_id value in the config file")]
    ChatIdNotSet,
}

/// Root settings file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsFile {
    telegram: Option<TelegramSettings>,
}

/// The `[telegram]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TelegramSettings {
    #[serde(default, deserialize_with = "string_or_integer")]
    pub bot_token: Option<String>,
    #[serde(default, deserialize_with = "string_or_integer")]
    pub chat_id: Option<String>,
    pub api_base: Option<String>,
}

/// Chat ids are numeric, so both quoted and bare integer values are accepted
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Integer(i64),
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawValue>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        RawValue::Text(text) => text,
        RawValue::Integer(number) => number.to_string(),
    }))
}

/// Credentials that passed the placeholder check
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

// Keep the token out of debug output and logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramSettings {
    /// Validated credentials, rejecting absent, empty and placeholder values
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let bot_token = configured(self.bot_token.as_deref(), TOKEN_PLACEHOLDER)
            .ok_or(ConfigError::TokenNotSet)?;
        let chat_id = configured(self.chat_id.as_deref(), CHAT_ID_PLACEHOLDER)
            .ok_or(ConfigError::ChatIdNotSet)?;

        Ok(Credentials {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .map(|base| base.trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
    }
}

fn configured<'a>(value: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != placeholder)
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str, path: &Path) -> Result<TelegramSettings, ConfigError> {
    let file: SettingsFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    file.telegram.ok_or_else(|| ConfigError::MissingSection {
        path: path.display().to_string(),
    })
}

/// Load the `[telegram]` table from `path`
///
/// An unreadable file is treated like one without the section.
pub fn load_settings(path: &Path) -> Result<TelegramSettings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Config file {} does not exist", path.display());
            String::new()
        }
        Err(e) => {
            log::warn!("Failed to read config file {}: {}", path.display(), e);
            String::new()
        }
    };

    parse_settings(&content, path)
}
