//! Configuration for the product client
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (highest priority, applied by the caller)
//! 2. Environment variables
//! 3. Config file (~/.config/shelf/config.toml)
//! 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product API used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Environment variable overriding the Product API base URL
pub const ENV_API_URL: &str = "SHELF_API_URL";

/// Environment variable overriding the theme
pub const ENV_THEME: &str = "SHELF_THEME";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the Product API (`/product` is appended)
    pub api_url: String,

    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme: "auto".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key optional
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/shelf/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("shelf").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        // Ignore errors - config is optional
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error: silently falling back would hide the mistake.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    pub(crate) fn parse_file(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn load() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge file values and environment lookups over the defaults
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = env(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Theme: env > file > default
        let theme = env(ENV_THEME)
            .filter(|v| !v.trim().is_empty())
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let logging = file.logging.map(LoggingConfig::from).unwrap_or_default();

        Self {
            api_url,
            theme,
            logging,
        }
    }
}
