//! Footer key hints, adjusted to the focused control

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mxprompt_app::state::Focus;

use crate::theme::styles;

pub struct KeyHints {
    focus: Focus,
}

impl KeyHints {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("Tab", "Next"), ("S-Tab", "Prev")];
        match self.focus {
            Focus::TaskContext | Focus::Goals => {
                hints.push(("Enter", "Newline"));
                hints.push(("^U", "Clear"));
            }
            Focus::AgentRole => hints.push(("←/→", "Role")),
            Focus::MetricsChart => hints.push(("↑/↓", "Inspect")),
            Focus::PromptEditor => {
                hints.push(("↑/↓", "Scroll"));
                hints.push(("PgUp/PgDn", "Page"));
            }
            Focus::GenerateButton | Focus::TestButton => hints.push(("Enter", "Press")),
        }
        hints.push(("^G", "Generate"));
        hints.push(("^T", "Test"));
        // Esc is swallowed by text fields
        if self.focus.is_text_field() {
            hints.push(("^C", "Quit"));
        } else {
            hints.push(("Esc", "Quit"));
        }
        hints
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
