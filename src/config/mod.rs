// Configuration management
use crate::error::{AlertError, Result};
use crate::format::Grouping;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "pia-alerts";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub grouping: Grouping,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            grouping: Grouping::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Campaigns ending within this many hours are reported as expiring
    #[serde(default = "default_expiring_threshold_hours")]
    pub expiring_threshold_hours: i64,
    #[serde(default = "default_send_alert")]
    pub send_alert: bool,
}

fn default_expiring_threshold_hours() -> i64 {
    24
}

fn default_send_alert() -> bool {
    true
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            expiring_threshold_hours: default_expiring_threshold_hours(),
            send_alert: default_send_alert(),
        }
    }
}

impl Config {
    /// Get the config directory path
    ///
    /// Priority:
    /// 1. XDG_CONFIG_HOME/pia-alerts (if env var is set)
    /// 2. ~/.config/pia-alerts (if ~/.config exists)
    /// 3. ~/.pia-alerts (fallback on Unix, doesn't create ~/.config)
    /// 4. Platform default on Windows
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config).join(APP_DIR));
        }

        #[cfg(unix)]
        {
            if let Some(home_dir) = dirs::home_dir() {
                let xdg_config = home_dir.join(".config");

                if xdg_config.exists() {
                    return Ok(xdg_config.join(APP_DIR));
                }

                return Ok(home_dir.join(format!(".{}", APP_DIR)));
            }
        }

        #[cfg(not(unix))]
        {
            if let Some(config_dir) = dirs::config_dir() {
                return Ok(config_dir.join(APP_DIR));
            }
        }

        Err(AlertError::ConfigError(
            "Could not determine config directory".to_string(),
        ))
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_file_path()?)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        tracing::debug!("Loading config from: {}", path.display());
        let contents = fs::read_to_string(path)
            .map_err(|e| AlertError::ConfigError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| AlertError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(symbol) = std::env::var("PIA_CURRENCY_SYMBOL") {
            tracing::debug!("Using PIA_CURRENCY_SYMBOL from environment: {}", symbol);
            self.format.currency_symbol = symbol;
        }

        if let Ok(grouping) = std::env::var("PIA_GROUPING") {
            tracing::debug!("Using PIA_GROUPING from environment: {}", grouping);
            self.format.grouping = grouping.parse()?;
        }

        Ok(())
    }

    /// Write a commented sample config to `path`, refusing to overwrite
    pub fn create_sample_at(path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    AlertError::ConfigError(format!("Failed to create config directory: {}", e))
                })?;
                tracing::info!("Created config directory: {}", dir.display());
            }
        }

        if path.exists() {
            return Err(AlertError::ConfigError(format!(
                "Config file already exists at: {}",
                path.display()
            )));
        }

        let sample_config = r#"# Pass It Along alert tooling configuration
# Location priority:
#   1. $XDG_CONFIG_HOME/pia-alerts/config.toml (if XDG_CONFIG_HOME is set)
#   2. ~/.config/pia-alerts/config.toml (if ~/.config exists)
#   3. ~/.pia-alerts/config.toml (fallback)
#
# Environment overrides:
#   PIA_CURRENCY_SYMBOL
#   PIA_GROUPING

[format]
# Thousands grouping for counts and amounts: "western" (1,234,567)
# or "indian" (12,34,567)
grouping = "western"

# Symbol prefixed to raised amounts
currency_symbol = "$"

[alerts]
# Campaigns ending within this many hours are flagged as expiring
expiring_threshold_hours = 24

# Default for the isSendAlert flag of generated alert payloads
send_alert = true
"#;

        fs::write(path, sample_config)
            .map_err(|e| AlertError::ConfigError(format!("Failed to write sample config: {}", e)))?;

        tracing::info!("Wrote sample config to: {}", path.display());
        Ok(())
    }
}
