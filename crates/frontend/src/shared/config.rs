//! Client configuration
//!
//! Defaults are embedded in the bundle. A TOML override can be placed in
//! localStorage under [`CONFIG_STORAGE_KEY`]; partial overrides are allowed,
//! missing keys fall back to defaults.

use crate::shared::storage;
use serde::Deserialize;

pub const CONFIG_STORAGE_KEY: &str = "seizureguard_client_config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 5000
timeout_ms = 30000

[logging]
level = "debug"

[notices]
dismiss_after_ms = 4000
"#;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full origin of the backend, e.g. `https://api.example.org`.
    /// When absent the page's own host is used with `port`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NoticeConfig {
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u32,
}

fn default_port() -> u16 {
    5000
}

fn default_timeout_ms() -> u32 {
    30_000
}

fn default_level() -> String {
    "debug".to_string()
}

fn default_dismiss_after_ms() -> u32 {
    4_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
        }
    }
}

impl ClientConfig {
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

pub fn parse_config(contents: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration
///
/// Search order:
/// 1. localStorage override
/// 2. Embedded default config
///
/// Runs before the logger is installed, so problems are returned as
/// messages for the caller to log.
pub fn load_config() -> (ClientConfig, Option<String>) {
    if let Some(contents) = storage::get_item(CONFIG_STORAGE_KEY) {
        match parse_config(&contents) {
            Ok(config) => return (config, None),
            Err(e) => {
                let warning = format!("ignoring malformed {CONFIG_STORAGE_KEY} override: {e}");
                return (default_config(), Some(warning));
            }
        }
    }
    (default_config(), None)
}

fn default_config() -> ClientConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.api.timeout_ms, 30_000);
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://analysis.example.org"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://analysis.example.org")
        );
        assert_eq!(config.api.timeout_ms, 30_000);
        assert_eq!(config.notices.dismiss_after_ms, 4_000);
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = ClientConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.logging.level = "warn".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.logging.level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_malformed_override_is_error() {
        assert!(parse_config("[api]\nport = \"five\"").is_err());
    }
}
