//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "MXPROMPT_LOG";

const LOG_FILE_NAME: &str = "mxprompt.log";

/// Filter used when `MXPROMPT_LOG` is unset: info for the workspace crates
/// (`mxprompt_*` and the `mx_prompt_designer` binary), warn for dependencies
pub const DEFAULT_FILTER: &str = "mxprompt=info,mx_prompt_designer=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/mx-prompt-designer/logs/` so they
/// never interleave with the terminal UI.
/// Log level is controlled by the `MXPROMPT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// MXPROMPT_LOG=debug cargo run
/// MXPROMPT_LOG=mxprompt_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("MX Prompt Designer starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("mx-prompt-designer").join("logs")
}
