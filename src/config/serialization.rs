//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{Config, ENV_API_URL, ENV_THEME};
use crate::theme::THEME_NAMES;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# shelf configuration\n");
        output.push_str("# Precedence: CLI flags > environment > this file > defaults\n\n");

        output.push_str(&format!("# Base URL of the Product API (env: {})\n", ENV_API_URL));
        output.push_str(&format!("api_url = {:?}\n\n", self.api_url));

        output.push_str(&format!(
            "# Colour theme: {} (env: {})\n",
            THEME_NAMES.join(", "),
            ENV_THEME
        ));
        output.push_str(&format!("theme = {:?}\n\n", self.theme));

        output.push_str(&self.logging_to_toml());
        output
    }

    fn logging_to_toml(&self) -> String {
        let logging = &self.logging;
        let mut output = String::from("[logging]\n");
        output.push_str("# trace, debug, info, warn, error (RUST_LOG overrides)\n");
        output.push_str(&format!("level = {:?}\n", logging.level));
        output.push_str("# JSON log files in addition to the TUI log view\n");
        output.push_str(&format!("file_enabled = {}\n", logging.file_enabled));
        output.push_str(&format!(
            "file_dir = {:?}\n",
            logging.file_dir.display().to_string()
        ));
        output.push_str("# hourly, daily, never\n");
        output.push_str(&format!(
            "file_rotation = {:?}\n",
            logging.file_rotation.as_str()
        ));
        output.push_str(&format!("file_prefix = {:?}\n", logging.file_prefix));
        output
    }
}
