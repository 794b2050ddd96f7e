//! Form editing, focus and chart hover handlers

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::UpdateResult;

pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(text) = state.focused_text_mut() {
        text.push(c);
    }
    UpdateResult::none()
}

pub fn handle_input_newline(state: &mut AppState) -> UpdateResult {
    if let Some(text) = state.focused_text_mut() {
        text.push('\n');
    }
    UpdateResult::none()
}

pub fn handle_input_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(text) = state.focused_text_mut() {
        text.pop();
    }
    UpdateResult::none()
}

pub fn handle_clear_field(state: &mut AppState) -> UpdateResult {
    if let Some(text) = state.focused_text_mut() {
        text.clear();
    }
    UpdateResult::none()
}

pub fn handle_next_role(state: &mut AppState) -> UpdateResult {
    state.form.agent_role = state.form.agent_role.next();
    UpdateResult::none()
}

pub fn handle_previous_role(state: &mut AppState) -> UpdateResult {
    state.form.agent_role = state.form.agent_role.prev();
    UpdateResult::none()
}

/// Enter/Space on a button runs its action; other controls ignore it
pub fn handle_activate_focused(state: &AppState) -> UpdateResult {
    match state.focus {
        Focus::GenerateButton => UpdateResult::message(Message::Generate),
        Focus::TestButton => UpdateResult::message(Message::TestLive),
        Focus::AgentRole => UpdateResult::message(Message::NextRole),
        _ => UpdateResult::none(),
    }
}

pub fn handle_chart_hover(state: &mut AppState, forward: bool) -> UpdateResult {
    let count = state.chart_entries().len();
    if count == 0 || state.focus != Focus::MetricsChart {
        return UpdateResult::none();
    }
    let current = state.chart_hover.unwrap_or(0);
    let next = if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    };
    state.chart_hover = Some(next);
    UpdateResult::none()
}
