//! Semantic style builders for the designer TUI.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::BORDER_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn success() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Solid indigo badge (logo, avatar)
pub fn badge() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Body style for a push button.
///
/// Disabled buttons are dimmed; focus inverts to the bright accent.
pub fn button(enabled: bool, focused: bool) -> Style {
    match (enabled, focused) {
        (false, _) => Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::CARD_BG),
        (true, true) => Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::BORDER_ACTIVE)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD),
    }
}

/// Cosmetic secondary button (Copy, Save Version)
pub fn ghost_button() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .bg(palette::CARD_BG)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_ignores_focus() {
        assert_eq!(button(false, true), button(false, false));
    }

    #[test]
    fn test_focused_button_is_highlighted() {
        assert_ne!(button(true, true), button(true, false));
        assert_eq!(button(true, true).bg, Some(palette::BORDER_ACTIVE));
    }
}
