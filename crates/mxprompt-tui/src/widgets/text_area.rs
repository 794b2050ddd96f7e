//! Multi-line text field with placeholder and cursor tracking
//!
//! Text is wrapped per character cell rather than per word so the cursor
//! position can be computed from the same rows that get drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

/// Bordered text field
pub struct TextArea<'a> {
    title: &'a str,
    text: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextArea<'a> {
    pub fn new(title: &'a str, text: &'a str) -> Self {
        Self {
            title,
            text,
            placeholder: "",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for TextArea<'_> {
    /// Cursor cell, set when the field is focused and visible
    type State = Option<Position>;

    fn render(self, area: Rect, buf: &mut Buffer, cursor: &mut Self::State) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            format!(" {} ", self.title),
            if self.focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.text.is_empty() {
            Paragraph::new(Line::styled(self.placeholder, styles::text_muted()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            if self.focused {
                *cursor = Some(Position::new(inner.x, inner.y));
            }
            return;
        }

        let rows = wrap_chars(self.text, inner.width);
        // Keep the tail (where typing happens) in view
        let skip = rows.len().saturating_sub(inner.height as usize);
        let visible: Vec<Line> = rows
            .iter()
            .skip(skip)
            .map(|row| Line::styled(row.as_str(), styles::text_primary()))
            .collect();
        Paragraph::new(visible).render(inner, buf);

        if self.focused {
            *cursor = Some(end_position(&rows, skip, inner));
        }
    }
}

/// Break `text` into rows no wider than `width` cells, honoring line breaks
pub fn wrap_chars(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(c);
            used += w;
        }
        rows.push(row);
    }

    rows
}

/// Cell just past the last character, clamped to the inner area
fn end_position(rows: &[String], skip: usize, inner: Rect) -> Position {
    let last = rows.last().map(String::as_str).unwrap_or("");
    let last_width: usize = last.chars().filter_map(|c| c.width()).sum();
    let row_index = rows.len().saturating_sub(1 + skip) as u16;

    let (x_offset, y_offset) = if last_width >= inner.width as usize {
        // The next character wraps onto a fresh row
        (0, row_index + 1)
    } else {
        (last_width as u16, row_index)
    };

    Position::new(
        inner.x + x_offset.min(inner.width.saturating_sub(1)),
        inner.y + y_offset.min(inner.height.saturating_sub(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_wrap_chars_splits_long_lines() {
        assert_eq!(wrap_chars("abcdef", 4), vec!["abcd", "ef"]);
    }

    #[test]
    fn test_wrap_chars_keeps_line_breaks() {
        assert_eq!(wrap_chars("ab\n\ncd", 10), vec!["ab", "", "cd"]);
        assert_eq!(wrap_chars("ab\n", 10), vec!["ab", ""]);
    }

    #[test]
    fn test_wrap_chars_counts_wide_chars() {
        assert_eq!(wrap_chars("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let mut term = TestTerminal::with_size(40, 4);
        let mut cursor = None;
        let field = TextArea::new("Goals", "").placeholder("What should the prompt achieve?");

        term.render_stateful_widget(field, term.area(), &mut cursor);

        assert!(term.buffer_contains("Goals"));
        assert!(term.buffer_contains("What should the prompt achieve?"));
        assert!(cursor.is_none(), "unfocused field has no cursor");
    }

    #[test]
    fn test_text_replaces_placeholder() {
        let mut term = TestTerminal::with_size(40, 4);
        let mut cursor = None;
        let field =
            TextArea::new("Goals", "ship it").placeholder("What should the prompt achieve?");

        term.render_stateful_widget(field, term.area(), &mut cursor);

        assert!(term.buffer_contains("ship it"));
        assert!(!term.buffer_contains("What should"));
    }

    #[test]
    fn test_focused_cursor_follows_text() {
        let mut term = TestTerminal::with_size(20, 6);
        let mut cursor = None;
        let field = TextArea::new("Task", "abc\nde").focused(true);

        term.render_stateful_widget(field, term.area(), &mut cursor);

        // Inner area starts at (1, 1); second row, after "de"
        assert_eq!(cursor, Some(Position::new(3, 2)));
    }

    #[test]
    fn test_overflow_scrolls_to_tail() {
        let mut term = TestTerminal::with_size(20, 4);
        let mut cursor = None;
        let field = TextArea::new("Task", "one\ntwo\nthree\nfour").focused(true);

        term.render_stateful_widget(field, term.area(), &mut cursor);

        assert!(term.buffer_contains("four"));
        assert!(!term.buffer_contains("one"));
        assert_eq!(cursor, Some(Position::new(5, 2)));
    }
}
