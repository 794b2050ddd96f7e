//! Message types for the application (TEA pattern)

use mxprompt_core::AgentRole;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application (q, Esc outside text fields, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the task context text
    SetTaskContext(String),
    /// Replace the goals text
    SetGoals(String),
    /// Select an agent role
    SetAgentRole(AgentRole),
    /// Append a character to the focused text field
    InputChar(char),
    /// Append a line break to the focused text field
    InputNewline,
    /// Delete the last character of the focused text field
    InputBackspace,
    /// Clear the focused text field
    ClearField,
    /// Cycle the agent role forward
    NextRole,
    /// Cycle the agent role backward
    PreviousRole,

    // ─────────────────────────────────────────────────────────
    // Focus & Chart Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next control (Tab)
    FocusNext,
    /// Move focus to the previous control (Shift+Tab)
    FocusPrevious,
    /// Activate the focused button (Enter/Space)
    ActivateFocused,
    /// Hover the next chart bar
    ChartHoverNext,
    /// Hover the previous chart bar
    ChartHoverPrevious,

    // ─────────────────────────────────────────────────────────
    // Prompt Scroll Messages
    // ─────────────────────────────────────────────────────────
    PromptScrollUp,
    PromptScrollDown,
    PromptPageUp,
    PromptPageDown,
    PromptScrollToTop,
    PromptScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Generation Messages
    // ─────────────────────────────────────────────────────────
    /// Start the mock prompt generation
    Generate,
    /// Generation timer fired
    GenerationCompleted { token: u64 },
    /// Start the mock API test window
    TestLive,
    /// Test timer fired
    TestCompleted { token: u64 },
}
