//! Key event handlers
//!
//! Global shortcuts first, then keys interpreted by the focused control.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused control
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::CharCtrl('g') => return Some(Message::Generate),
        InputKey::CharCtrl('t') => return Some(Message::TestLive),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        _ => {}
    }

    if state.focus.is_text_field() {
        handle_key_text_field(key)
    } else {
        handle_key_control(state.focus, key)
    }
}

/// Keys while Task Context or Goals is focused. Esc and `q` are plain input
/// here, so quitting mid-sentence takes Ctrl+C.
fn handle_key_text_field(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Enter => Some(Message::InputNewline),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::ClearField),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrevious),
        _ => None,
    }
}

/// Keys while a non-text control is focused
fn handle_key_control(focus: Focus, key: InputKey) -> Option<Message> {
    match (focus, key) {
        (_, InputKey::Char('q') | InputKey::Esc) => Some(Message::Quit),

        (Focus::AgentRole, InputKey::Right | InputKey::Char('l')) => Some(Message::NextRole),
        (Focus::AgentRole, InputKey::Left | InputKey::Char('h')) => Some(Message::PreviousRole),

        (Focus::MetricsChart, InputKey::Down | InputKey::Char('j')) => {
            Some(Message::ChartHoverNext)
        }
        (Focus::MetricsChart, InputKey::Up | InputKey::Char('k')) => {
            Some(Message::ChartHoverPrevious)
        }

        (Focus::PromptEditor, InputKey::Down | InputKey::Char('j')) => {
            Some(Message::PromptScrollDown)
        }
        (Focus::PromptEditor, InputKey::Up | InputKey::Char('k')) => Some(Message::PromptScrollUp),
        (Focus::PromptEditor, InputKey::PageDown) => Some(Message::PromptPageDown),
        (Focus::PromptEditor, InputKey::PageUp) => Some(Message::PromptPageUp),
        (Focus::PromptEditor, InputKey::Home | InputKey::Char('g')) => {
            Some(Message::PromptScrollToTop)
        }
        (Focus::PromptEditor, InputKey::End | InputKey::Char('G')) => {
            Some(Message::PromptScrollToBottom)
        }

        (_, InputKey::Enter | InputKey::Char(' ')) => Some(Message::ActivateFocused),
        (_, InputKey::Down) => Some(Message::FocusNext),
        (_, InputKey::Up) => Some(Message::FocusPrevious),
        _ => None,
    }
}
