//! Bot configuration.

use porter_error::{ConfigError, PorterResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_prefix() -> String {
    "!".into()
}

fn default_session_timeout() -> u64 {
    60
}

fn default_max_help_lines() -> usize {
    8
}

fn default_max_page_size() -> usize {
    2048
}

fn default_report_channel() -> String {
    "reports".into()
}

fn default_welcome_channel() -> String {
    "chat".into()
}

fn default_applications_channel() -> String {
    "applications".into()
}

/// Configuration for the Porter bot, loaded from a TOML file.
///
/// The bot token deliberately never appears here; it comes from the
/// `DISCORD_TOKEN` environment variable (a `.env` file works too).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PorterConfig {
    /// The guild the bot serves.
    pub guild_id: u64,
    /// Command prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Seconds of inactivity before a session is torn down.
    #[serde(default = "default_session_timeout")]
    pub session_timeout_secs: u64,
    /// Content lines per session page.
    #[serde(default = "default_max_help_lines")]
    pub max_help_lines: usize,
    /// Character budget per session page.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
    /// Channel receiving channel-name clash notices.
    #[serde(default = "default_report_channel")]
    pub report_channel: String,
    /// Channel greeting new members.
    #[serde(default = "default_welcome_channel")]
    pub welcome_channel: String,
    /// Channel receiving submitted applications.
    #[serde(default = "default_applications_channel")]
    pub applications_channel: String,
    /// Optional string catalog override; the compiled-in catalog is used
    /// when absent.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl PorterConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> PorterResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: PorterConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// The session inactivity window as a [`Duration`].
    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }

    /// The bot token from the environment.
    pub fn token() -> PorterResult<String> {
        std::env::var("DISCORD_TOKEN")
            .map_err(|_| ConfigError::new("DISCORD_TOKEN is not set").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: PorterConfig = toml::from_str("guild_id = 42").unwrap();
        assert_eq!(config.prefix, "!");
        assert_eq!(config.session_timeout(), Duration::from_secs(60));
        assert_eq!(config.max_help_lines, 8);
        assert_eq!(config.report_channel, "reports");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn explicit_values_win() {
        let config: PorterConfig = toml::from_str(
            r#"
guild_id = 42
prefix = "?"
session_timeout_secs = 120
welcome_channel = "lobby"
"#,
        )
        .unwrap();
        assert_eq!(config.prefix, "?");
        assert_eq!(config.session_timeout(), Duration::from_secs(120));
        assert_eq!(config.welcome_channel, "lobby");
    }
}
