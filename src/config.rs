//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::viewport::MOBILE_BREAKPOINT;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub wallet: WalletConfig,

    #[serde(default)]
    pub avatar: AvatarConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Layout settings
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,

    /// Width assumed for the terminal front end
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
}

fn default_mobile_breakpoint() -> u32 {
    MOBILE_BREAKPOINT
}

fn default_viewport_width() -> u32 {
    1280
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            viewport_width: default_viewport_width(),
        }
    }
}

/// Where leaderboard and profile data come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// JSON data file; the built-in samples are used when unset
    pub file: Option<String>,
}

/// Simulated wallet settings
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "default_wallet_address")]
    pub address: String,

    #[serde(default = "default_wallet_balance")]
    pub balance: String,

    #[serde(default = "default_wallet_symbol")]
    pub symbol: String,

    /// Name the local name service reports for `address`
    #[serde(default)]
    pub ens_name: Option<String>,
}

fn default_wallet_address() -> String {
    "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f3c4d".to_string()
}

fn default_wallet_balance() -> String {
    "1.23456".to_string()
}

fn default_wallet_symbol() -> String {
    "ETH".to_string()
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address: default_wallet_address(),
            balance: default_wallet_balance(),
            symbol: default_wallet_symbol(),
            ens_name: None,
        }
    }
}

/// Generated avatar settings
#[derive(Debug, Clone, Deserialize)]
pub struct AvatarConfig {
    /// URL template; `{seed}` is replaced by the avatar seed
    #[serde(default = "default_avatar_generator")]
    pub generator_url: String,
}

fn default_avatar_generator() -> String {
    "https://api.dicebear.com/7.x/identicon/svg?seed={seed}".to_string()
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            generator_url: default_avatar_generator(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("youbuidl").join("config.toml")),
            Some(PathBuf::from("/etc/youbuidl/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadOutcome {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first readable file in `paths`, falling back to defaults
    /// with environment overrides
    ///
    /// Files that exist but fail to load are skipped and kept in
    /// [`LoadOutcome::errors`].
    pub fn load_first(paths: &[PathBuf]) -> LoadOutcome {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadOutcome {
                        config,
                        loaded_from: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        LoadOutcome {
            config: Self::from_env(),
            loaded_from: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = lookup("YOUBUIDL_DATA_FILE") {
            self.data.file = Some(file);
        }

        if let Some(address) = lookup("YOUBUIDL_WALLET_ADDRESS") {
            self.wallet.address = address;
        }

        if let Some(breakpoint) = lookup("YOUBUIDL_MOBILE_BREAKPOINT") {
            if let Ok(b) = breakpoint.parse() {
                self.display.mobile_breakpoint = b;
            }
        }

        if let Some(level) = lookup("YOUBUIDL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("YOUBUIDL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the standard config locations
#[derive(Debug)]
pub struct LoadOutcome {
    pub config: Config,
    /// File the config came from; `None` means defaults
    pub loaded_from: Option<PathBuf>,
    /// Files that were found but could not be loaded
    pub errors: Vec<ConfigError>,
}

impl LoadOutcome {
    /// Log where the config came from and every skipped file
    ///
    /// Call once logging is installed.
    pub fn report(&self) {
        for error in &self.errors {
            tracing::warn!("{}", error);
        }
        match &self.loaded_from {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# YouBuidl Dashboard Configuration
#
# Environment variables override these settings:
# - YOUBUIDL_DATA_FILE
# - YOUBUIDL_WALLET_ADDRESS
# - YOUBUIDL_MOBILE_BREAKPOINT
# - YOUBUIDL_LOG_LEVEL
# - YOUBUIDL_LOG_FORMAT

[display]
# Viewport width (px) below which the mobile layout is used
mobile_breakpoint = 768

# Viewport width assumed by the terminal front end
viewport_width = 1280

[data]
# JSON file with leaderboard entries and profiles.
# Leave unset to use the built-in sample data.
# file = "./dashboard.json"

[wallet]
# Simulated wallet reported when connected
address = "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f3c4d"
balance = "1.23456"
symbol = "ETH"
# ens_name = "builder.eth"

[avatar]
# Generated avatar URL; {seed} is replaced by the avatar seed
generator_url = "https://api.dicebear.com/7.x/identicon/svg?seed={seed}"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
