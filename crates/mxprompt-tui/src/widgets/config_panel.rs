//! Configuration panel: form fields, role selector, Generate button and the
//! Multi-Agent Setup card

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use mxprompt_app::state::{AppState, Focus};

use crate::theme::styles;

use super::{spinner_char, TextArea};

pub const TASK_CONTEXT_PLACEHOLDER: &str = "Describe the workflow or task for the agent...";
pub const GOALS_PLACEHOLDER: &str = "What should the prompt achieve?";
pub const GENERATE_LABEL: &str = "⚡ Generate Optimized Prompt";
pub const GENERATING_LABEL: &str = "Optimizing Prompt...";

/// Narrow-column fallbacks, widest first
const GENERATE_LABEL_SHORT: [&str; 2] = ["⚡ Generate Prompt", "⚡ Generate"];
const GENERATING_LABEL_SHORT: &str = "Optimizing...";

/// Widest label that fits in `width` cells, or the last one if none does
fn fit_label(labels: &[String], width: u16) -> String {
    labels
        .iter()
        .find(|label| label.width() <= width as usize)
        .or(labels.last())
        .cloned()
        .unwrap_or_default()
}

/// Left column of the screen
pub struct ConfigPanel<'a> {
    state: &'a AppState,
}

impl<'a> ConfigPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_role_selector(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::AgentRole;
        let block = styles::glass_block(focused).title(Span::styled(
            " Agent Role ",
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));

        let role = self.state.form.agent_role.label();
        let line = if focused {
            Line::from(vec![
                Span::styled("◀ ", styles::accent_bold()),
                Span::styled(role, styles::text_bold()),
                Span::styled(" ▶", styles::accent_bold()),
            ])
        } else {
            Line::from(vec![
                Span::styled(role, styles::text_primary()),
                Span::styled(" ▾", styles::text_muted()),
            ])
        };

        Paragraph::new(line).block(block).render(area, buf);
    }

    fn render_generate_button(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::GenerateButton;
        let enabled = self.state.can_generate();
        let style = styles::button(enabled, focused);

        let labels: Vec<String> = if self.state.is_generating() {
            let spinner = spinner_char(self.state.spinner_frame);
            [GENERATING_LABEL, GENERATING_LABEL_SHORT]
                .iter()
                .map(|label| format!("{} {}", spinner, label))
                .collect()
        } else {
            std::iter::once(GENERATE_LABEL)
                .chain(GENERATE_LABEL_SHORT)
                .map(str::to_string)
                .collect()
        };

        let block = styles::glass_block(focused).style(style);
        let label = fit_label(&labels, block.inner(area).width);

        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .style(style)
            .block(block)
            .render(area, buf);
    }

    fn render_agent_setup(&self, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(" Multi-Agent Setup ", styles::text_secondary());
        let block = styles::glass_block(false).title(title);
        let lines = vec![
            Line::from(vec![
                Span::styled("✓ ", styles::success()),
                Span::styled("Orchestrator", styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled("✓ ", styles::success()),
                Span::styled("Executor", styles::text_primary()),
            ]),
        ];
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl StatefulWidget for ConfigPanel<'_> {
    /// Cursor cell of the focused text field
    type State = Option<Position>;

    fn render(self, area: Rect, buf: &mut Buffer, cursor: &mut Self::State) {
        Block::default().style(styles::text_primary()).render(area, buf);

        let setup_height = if self.state.settings.ui.show_agent_setup {
            4
        } else {
            0
        };

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(6), // Task Context (4 rows)
            Constraint::Length(4), // Goals (2 rows)
            Constraint::Length(3), // Agent Role
            Constraint::Length(3), // Generate
            Constraint::Length(setup_height),
            Constraint::Min(0),
        ])
        .split(area);

        Paragraph::new(Line::from(vec![
            Span::styled(" ⚙ ", styles::accent_bold()),
            Span::styled("Configuration", styles::text_bold()),
        ]))
        .render(chunks[0], buf);

        let form = &self.state.form;
        let focus = self.state.focus;

        TextArea::new("Task Context", &form.task_context)
            .placeholder(TASK_CONTEXT_PLACEHOLDER)
            .focused(focus == Focus::TaskContext)
            .render(chunks[1], buf, cursor);

        TextArea::new("Goals", &form.goals)
            .placeholder(GOALS_PLACEHOLDER)
            .focused(focus == Focus::Goals)
            .render(chunks[2], buf, cursor);

        self.render_role_selector(chunks[3], buf);
        self.render_generate_button(chunks[4], buf);

        if setup_height > 0 {
            self.render_agent_setup(chunks[5], buf);
        }
    }
}
