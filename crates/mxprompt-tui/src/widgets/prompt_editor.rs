//! Read-only `prompt.ts` editor card with the Run API Test button
//!
//! The prompt body is wrapped per cell and scrolled by `PromptViewState`;
//! the rendered size is written back so scroll commands clamp correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use mxprompt_app::PromptViewState;
use mxprompt_core::OUTPUT_PLACEHOLDER;

use crate::theme::{palette, styles};

use super::{spinner_char, wrap_chars};

pub const RUN_TEST_LABEL: &str = "▶ Run API Test";
pub const RUNNING_TEST_LABEL: &str = "Running Test Script...";

pub struct PromptEditor<'a> {
    prompt: Option<&'a str>,
    generated_at: Option<String>,
    is_testing: bool,
    test_focused: bool,
    body_focused: bool,
    spinner_frame: usize,
}

impl<'a> PromptEditor<'a> {
    pub fn new(prompt: Option<&'a str>) -> Self {
        Self {
            prompt,
            generated_at: None,
            is_testing: false,
            test_focused: false,
            body_focused: false,
            spinner_frame: 0,
        }
    }

    /// Generation time shown on the bottom border
    pub fn generated_at(mut self, label: Option<String>) -> Self {
        self.generated_at = label;
        self
    }

    pub fn testing(mut self, is_testing: bool, spinner_frame: usize) -> Self {
        self.is_testing = is_testing;
        self.spinner_frame = spinner_frame;
        self
    }

    pub fn test_focused(mut self, focused: bool) -> Self {
        self.test_focused = focused;
        self
    }

    /// The prompt body has focus and takes scroll keys
    pub fn body_focused(mut self, focused: bool) -> Self {
        self.body_focused = focused;
        self
    }

    fn title_line() -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("●", Style::default().fg(palette::DOT_RED)),
            Span::raw(" "),
            Span::styled("●", Style::default().fg(palette::DOT_YELLOW)),
            Span::raw(" "),
            Span::styled("●", Style::default().fg(palette::DOT_GREEN)),
            Span::raw("  "),
            Span::styled("prompt.ts", styles::text_secondary()),
            Span::raw(" "),
        ])
    }

    fn test_button(&self) -> Line<'static> {
        let label = if self.is_testing {
            format!(" {} {} ", spinner_char(self.spinner_frame), RUNNING_TEST_LABEL)
        } else {
            format!(" {} ", RUN_TEST_LABEL)
        };
        Line::from(Span::styled(label, styles::button(true, self.test_focused))).right_aligned()
    }

    fn action_buttons() -> Line<'static> {
        Line::from(vec![
            Span::styled(" Copy ", styles::ghost_button()),
            Span::raw(" "),
            Span::styled(" Save Version ", styles::ghost_button()),
            Span::raw(" "),
        ])
        .right_aligned()
    }

    fn footer_stamp(&self, view: &PromptViewState) -> Option<Line<'static>> {
        let time = self.generated_at.as_deref()?;
        let more = if view.has_more_below() { " ↓ more" } else { "" };
        Some(Line::from(Span::styled(
            format!(" {}{} ", time, more),
            styles::text_muted(),
        )))
    }
}

impl StatefulWidget for PromptEditor<'_> {
    type State = PromptViewState;

    fn render(self, area: Rect, buf: &mut Buffer, view: &mut PromptViewState) {
        let mut block = styles::glass_block(self.test_focused || self.body_focused)
            .title(Self::title_line())
            .style(Style::default().bg(palette::EDITOR_BG));

        let Some(prompt) = self.prompt else {
            view.reset();
            Paragraph::new(OUTPUT_PLACEHOLDER)
                .style(styles::text_muted())
                .wrap(Wrap { trim: false })
                .block(block)
                .render(area, buf);
            return;
        };

        let inner = block.inner(area);
        let rows = wrap_chars(prompt, inner.width);
        view.update_content_size(rows.len(), inner.height as usize);

        block = block
            .title_top(self.test_button())
            .title_bottom(Self::action_buttons());
        if let Some(stamp) = self.footer_stamp(view) {
            block = block.title_bottom(stamp);
        }

        let visible: Vec<Line> = rows
            .into_iter()
            .skip(view.offset)
            .take(view.visible_lines)
            .map(Line::from)
            .collect();

        Paragraph::new(visible)
            .style(styles::text_primary())
            .block(block)
            .render(area, buf);
    }
}
