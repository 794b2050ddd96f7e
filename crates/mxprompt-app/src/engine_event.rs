//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use mxprompt_core::{FormInput, GeneratedOutput};

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Generation began with this form snapshot; prior output was cleared
    GenerationStarted { input: FormInput },

    /// Generation finished and published its output
    GenerationCompleted { output: GeneratedOutput },

    /// The API test window opened
    TestStarted,

    /// The API test window closed
    TestCompleted,

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::GenerationStarted { .. } => "generation_started",
            Self::GenerationCompleted { .. } => "generation_completed",
            Self::TestStarted => "test_started",
            Self::TestCompleted => "test_completed",
            Self::Shutdown => "shutdown",
        }
    }
}
