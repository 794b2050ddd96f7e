//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `generation`: Mock generation and API test triggers
//! - `form`: Form editing, focus and chart hover handlers
//! - `keys`: Key event to message mapping

pub(crate) mod form;
pub(crate) mod generation;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use generation::{GENERATION_DELAY, TEST_DELAY};
pub use keys::handle_key;
pub use update::update;

/// Independent timer slots; scheduling a kind replaces its previous timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Mock "optimize prompt" delay
    Generation,
    /// Mock "run API test" window
    Test,
}

impl TimerKind {
    /// Message delivered when a timer of this kind fires
    pub fn completion_message(&self, token: u64) -> Message {
        match self {
            TimerKind::Generation => Message::GenerationCompleted { token },
            TimerKind::Test => Message::TestCompleted { token },
        }
    }
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver `kind`'s completion message carrying `token` after `delay`
    ScheduleTimer {
        kind: TimerKind,
        token: u64,
        delay: Duration,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
