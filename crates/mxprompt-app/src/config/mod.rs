//! Configuration file parsing for MX Prompt Designer
//!
//! Supports `<config_dir>/mx-prompt-designer/config.toml` or an explicit
//! path passed with `--config`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, parse_settings};
pub use types::*;
