//! MX Prompt Designer Library
//!
//! Binary-side glue: command-line launch options and the headless NDJSON
//! frontend. The TUI itself lives in `mxprompt-tui`.

pub mod headless;
pub mod launch;

// Re-export main entry points
pub use launch::{run, run_headless, LaunchOptions};
