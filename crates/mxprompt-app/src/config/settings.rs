//! Settings parser for config.toml

use super::types::Settings;
use mxprompt_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "mx-prompt-designer";

const DEFAULT_CONFIG: &str = r#"# MX Prompt Designer Configuration

[behavior]
# Role preselected in the Agent Role selector:
# research_assistant | code_reviewer | financial_analyst | technical_writer
default_role = "research_assistant"

[ui]
poll_interval_ms = 50     # Terminal poll timeout (spinner tick rate)
show_agent_setup = true   # Show the Multi-Agent Setup card
avatar_seed = "Felix"     # Initial shown in the header avatar badge
"#;

/// Default location: `<config_dir>/mx-prompt-designer/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from a config file.
///
/// A missing or malformed file falls back to defaults; nothing here is fatal.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_settings(config_path, &content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("{}", e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse settings text, attributing errors to `config_path`
pub fn parse_settings(config_path: &Path, content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(config_path, e.to_string()))
}

/// Write the commented default config file.
///
/// Returns `Ok(false)` without touching anything if the file already exists.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
