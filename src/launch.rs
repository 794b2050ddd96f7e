//! Application entry points shared by `main`
//!
//! Both frontends install error reporting and file logging first, then load
//! settings (so config warnings reach the log) and hand them to their runner.

use std::path::Path;

use mxprompt_app::config::{load_settings, Settings};
use mxprompt_app::message::Message;
use mxprompt_core::prelude::*;
use mxprompt_core::AgentRole;

/// Form values and flags taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub context: Option<String>,
    pub goals: Option<String>,
    pub role: Option<AgentRole>,
    /// Headless only: run the API test after generation
    pub run_test: bool,
}

impl LaunchOptions {
    /// Messages that pre-fill the form before the first update
    pub fn startup_messages(&self) -> Vec<Message> {
        let mut messages = Vec::new();
        if let Some(context) = &self.context {
            messages.push(Message::SetTaskContext(context.clone()));
        }
        if let Some(goals) = &self.goals {
            messages.push(Message::SetGoals(goals.clone()));
        }
        if let Some(role) = self.role {
            messages.push(Message::SetAgentRole(role));
        }
        messages
    }
}

fn init(config_path: &Path) -> Result<Settings> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns the terminal)
    mxprompt_core::logging::init()?;

    let settings = load_settings(config_path);
    info!(
        "Loaded settings: default_role={}, poll_interval_ms={}",
        settings.behavior.default_role, settings.ui.poll_interval_ms
    );
    Ok(settings)
}

/// Run the TUI
pub async fn run(config_path: &Path, options: LaunchOptions) -> Result<()> {
    let settings = init(config_path)?;

    info!("Starting TUI");

    let result = mxprompt_tui::run(settings, options.startup_messages()).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("MX Prompt Designer exiting");
    result
}

/// Run one generation without the TUI, printing NDJSON events
pub async fn run_headless(config_path: &Path, options: LaunchOptions) -> Result<()> {
    let settings = init(config_path)?;
    crate::headless::runner::run_headless(settings, options).await
}
