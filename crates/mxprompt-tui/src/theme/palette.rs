//! Color palette for the designer TUI.
//!
//! Slate surfaces with an indigo accent. Metric bar colors live with the
//! metrics themselves in `mxprompt_core::metrics`.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(15, 23, 42); // slate-900
pub const CARD_BG: Color = Color::Rgb(30, 41, 59); // slate-800
pub const EDITOR_BG: Color = Color::Rgb(2, 6, 23); // slate-950

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85); // slate-700
pub const BORDER_ACTIVE: Color = Color::Rgb(129, 140, 248); // indigo-400

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(99, 102, 241); // indigo-500

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240); // slate-200
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // slate-400
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Editor window dots ---
pub const DOT_RED: Color = Color::Rgb(239, 68, 68);
pub const DOT_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const DOT_GREEN: Color = Color::Rgb(34, 197, 94);

/// Convert an `(r, g, b)` triple into a terminal color
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
