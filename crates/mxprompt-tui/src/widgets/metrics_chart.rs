//! Performance Metrics card: horizontal bar chart with a hover tooltip row

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph, Widget},
};

use mxprompt_core::ChartEntry;

use crate::theme::{palette, styles};

/// Scores are percentages
const CHART_MAX: u64 = 100;

pub struct MetricsChart<'a> {
    entries: &'a [ChartEntry],
    hovered: Option<usize>,
    focused: bool,
}

impl<'a> MetricsChart<'a> {
    pub fn new(entries: &'a [ChartEntry]) -> Self {
        Self {
            entries,
            hovered: None,
            focused: false,
        }
    }

    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn bars(&self) -> Vec<Bar<'a>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let label_style = if self.hovered == Some(i) {
                    styles::text_bold().add_modifier(Modifier::UNDERLINED)
                } else {
                    styles::text_secondary()
                };
                Bar::default()
                    .value(u64::from(entry.value))
                    .label(Line::styled(entry.name(), label_style))
                    .style(Style::default().fg(palette::rgb(entry.kind.rgb())))
                    // Values stay hidden; the tooltip row reports them
                    .text_value(String::new())
            })
            .collect()
    }

    fn tooltip_line(&self) -> Line<'static> {
        match self.hovered.and_then(|i| self.entries.get(i)) {
            Some(entry) => Line::from(vec![
                Span::styled("▸ ", styles::text_muted()),
                Span::styled(
                    entry.tooltip(),
                    Style::default()
                        .fg(palette::rgb(entry.kind.rgb()))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            None if self.focused => Line::styled("↑/↓ to inspect a bar", styles::text_muted()),
            None => Line::styled("Tab to the chart to inspect scores", styles::text_muted()),
        }
    }
}

impl Widget for MetricsChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Performance Metrics ", styles::text_bold()))
            .title_top(
                Line::from(Span::styled(" Tested via LLM API ", styles::success())).right_aligned(),
            );
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 || self.entries.is_empty() {
            return;
        }

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        // Bars need room to the right of the longest label
        let label_width = self.entries.iter().map(|e| e.name().len()).max().unwrap_or(0) as u16;
        if inner.height < 2 || chunks[0].width <= label_width + 1 {
            Paragraph::new(self.tooltip_line()).render(chunks[1], buf);
            return;
        }

        let bars = self.bars();
        BarChart::default()
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1)
            .max(CHART_MAX)
            .data(BarGroup::default().bars(&bars))
            .render(chunks[0], buf);

        Paragraph::new(self.tooltip_line()).render(chunks[1], buf);
    }
}
