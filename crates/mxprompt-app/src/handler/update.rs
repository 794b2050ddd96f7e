//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{form, generation, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick_spinner();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::SetTaskContext(text) => {
            state.set_task_context(text);
            UpdateResult::none()
        }
        Message::SetGoals(text) => {
            state.set_goals(text);
            UpdateResult::none()
        }
        Message::SetAgentRole(role) => {
            state.set_agent_role(role);
            UpdateResult::none()
        }
        Message::InputChar(c) => form::handle_input_char(state, c),
        Message::InputNewline => form::handle_input_newline(state),
        Message::InputBackspace => form::handle_input_backspace(state),
        Message::ClearField => form::handle_clear_field(state),
        Message::NextRole => form::handle_next_role(state),
        Message::PreviousRole => form::handle_previous_role(state),

        // ─────────────────────────────────────────────────────────
        // Focus & Chart Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus_prev();
            UpdateResult::none()
        }
        Message::ActivateFocused => form::handle_activate_focused(state),
        Message::ChartHoverNext => form::handle_chart_hover(state, true),
        Message::ChartHoverPrevious => form::handle_chart_hover(state, false),

        // ─────────────────────────────────────────────────────────
        // Prompt Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::PromptScrollUp => {
            state.prompt_view.scroll_up(1);
            UpdateResult::none()
        }
        Message::PromptScrollDown => {
            state.prompt_view.scroll_down(1);
            UpdateResult::none()
        }
        Message::PromptPageUp => {
            state.prompt_view.page_up();
            UpdateResult::none()
        }
        Message::PromptPageDown => {
            state.prompt_view.page_down();
            UpdateResult::none()
        }
        Message::PromptScrollToTop => {
            state.prompt_view.scroll_to_top();
            UpdateResult::none()
        }
        Message::PromptScrollToBottom => {
            state.prompt_view.scroll_to_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Generation Messages
        // ─────────────────────────────────────────────────────────
        Message::Generate => generation::handle_generate(state),
        Message::GenerationCompleted { token } => {
            generation::handle_generation_completed(state, token)
        }
        Message::TestLive => generation::handle_test_live(state),
        Message::TestCompleted { token } => generation::handle_test_completed(state, token),
    }
}
