//! MX Prompt Designer - a terminal prompt designer for AI agents
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use mx_prompt_designer::LaunchOptions;
use mxprompt_app::config::{default_config_path, init_config_file};
use mxprompt_core::prelude::*;
use mxprompt_core::AgentRole;

/// MX Prompt Designer - design, preview and test agent prompts
#[derive(Parser, Debug)]
#[command(name = "mxprompt")]
#[command(about = "Design, preview and test agent prompts in the terminal", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Pre-fill the Task Context field
    #[arg(long, value_name = "TEXT")]
    context: Option<String>,

    /// Pre-fill the Goals field
    #[arg(long, value_name = "TEXT")]
    goals: Option<String>,

    /// Preselect the agent role (e.g. "code-reviewer")
    #[arg(long, value_name = "ROLE")]
    role: Option<AgentRole>,

    /// Headless only: run the API test after generating
    #[arg(long)]
    test: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);

    if args.init_config {
        if init_config_file(&config_path)? {
            println!("Created {}", config_path.display());
        } else {
            println!("Config already exists: {}", config_path.display());
        }
        return Ok(());
    }

    let options = LaunchOptions {
        context: args.context,
        goals: args.goals,
        role: args.role,
        run_test: args.test,
    };

    if args.headless {
        mx_prompt_designer::run_headless(&config_path, options).await
    } else {
        mx_prompt_designer::run(&config_path, options).await
    }
}
