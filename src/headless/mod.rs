//! Headless mode - JSON event output for scripted runs
//!
//! This module provides a headless (non-TUI) mode that pre-fills the form
//! from the command line, runs one generation (and optionally the API test)
//! and writes structured JSON events to stdout.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"generation_started","task_context":"Summarize Q3","goals":"","agent_role":"Research Assistant","timestamp":1704700001000}
//! {"event":"generation_completed","prompt":"# Role: Research Assistant\n...","metrics":{"accuracy":94,"consistency":88,"safety":99,"hallucination":12},"timestamp":1704700003000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};

use mxprompt_app::EngineEvent;
use mxprompt_core::prelude::*;
use mxprompt_core::{FormInput, GeneratedOutput, PromptMetrics};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Generation began with this form snapshot
    GenerationStarted {
        task_context: String,
        goals: String,
        agent_role: String,
        timestamp: i64,
    },

    /// Generation finished
    GenerationCompleted {
        prompt: String,
        metrics: PromptMetrics,
        timestamp: i64,
    },

    /// API test window opened
    TestStarted { timestamp: i64 },

    /// API test window closed
    TestCompleted { timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Serialize to a single NDJSON line (without the trailing newline)
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match self.to_json_line() {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event to its headless form. Shutdown has none.
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::GenerationStarted { input } => Some(Self::generation_started(input)),
            EngineEvent::GenerationCompleted { output } => Some(Self::generation_completed(output)),
            EngineEvent::TestStarted => Some(Self::test_started()),
            EngineEvent::TestCompleted => Some(Self::test_completed()),
            EngineEvent::Shutdown => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn generation_started(input: &FormInput) -> Self {
        Self::GenerationStarted {
            task_context: input.task_context.clone(),
            goals: input.goals.clone(),
            agent_role: input.agent_role.label().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn generation_completed(output: &GeneratedOutput) -> Self {
        Self::GenerationCompleted {
            prompt: output.prompt.clone(),
            metrics: output.metrics,
            timestamp: Self::now(),
        }
    }

    pub fn test_started() -> Self {
        Self::TestStarted {
            timestamp: Self::now(),
        }
    }

    pub fn test_completed() -> Self {
        Self::TestCompleted {
            timestamp: Self::now(),
        }
    }

    /// Error event carrying the error's message and fatality
    pub fn from_error(err: &Error) -> Self {
        Self::error(err.to_string(), err.is_fatal())
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
