//! mxprompt-app - Application state and orchestration for MX Prompt Designer
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless runners, timer scheduling
//! for the mock generation and test flows, and configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod prompt_view_state;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::TimerRegistry;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{TimerKind, UpdateAction, UpdateResult, GENERATION_DELAY, TEST_DELAY};
pub use input_key::InputKey;
pub use message::Message;
pub use prompt_view_state::PromptViewState;
pub use state::{AppPhase, AppState, Focus};
