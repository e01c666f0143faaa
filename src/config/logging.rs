//! `[logging]` section: filter level and optional JSON log files

use serde::Deserialize;
use std::path::PathBuf;

/// When the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file forever
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter for the `shelf` target; RUST_LOG wins when set
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// Files are named `{prefix}.{date}`
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: "shelf".to_string(),
        }
    }
}

/// `[logging]` as written in the file; absent keys keep their default
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<PathBuf>,
    file_rotation: Option<LogRotation>,
    file_prefix: Option<String>,
}

impl From<FileLogging> for LoggingConfig {
    fn from(file: FileLogging) -> Self {
        let mut config = Self::default();
        if let Some(level) = file.level {
            config.level = level;
        }
        if let Some(enabled) = file.file_enabled {
            config.file_enabled = enabled;
        }
        if let Some(dir) = file.file_dir {
            config.file_dir = dir;
        }
        if let Some(rotation) = file.file_rotation {
            config.file_rotation = rotation;
        }
        if let Some(prefix) = file.file_prefix {
            config.file_prefix = prefix;
        }
        config
    }
}
