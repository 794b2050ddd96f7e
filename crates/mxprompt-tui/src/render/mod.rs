//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use mxprompt_app::state::{AppState, Focus};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Takes `&mut AppState` so the prompt card can record its rendered size in
/// `state.prompt_view`. Nothing else is written.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.settings.ui.avatar_initial()),
        areas.header,
    );

    let mut cursor = None;
    frame.render_stateful_widget(widgets::ConfigPanel::new(state), areas.config, &mut cursor);

    let entries = state.chart_entries();
    let output = layout::output(areas.output, !entries.is_empty());

    if let Some(metrics_area) = output.metrics {
        let chart = widgets::MetricsChart::new(&entries)
            .hovered(state.hovered_entry().and(state.chart_hover))
            .focused(state.focus == Focus::MetricsChart);
        frame.render_widget(chart, metrics_area);
    }

    // Field borrows, so the view state can be borrowed mutably alongside
    let prompt = state
        .output
        .as_ref()
        .map(|o| o.prompt.as_str())
        .filter(|p| !p.is_empty());
    let editor = widgets::PromptEditor::new(prompt)
        .generated_at(state.output.as_ref().map(|o| o.generated_time_label()))
        .testing(state.pending_test.is_some(), state.spinner_frame)
        .test_focused(state.focus == Focus::TestButton)
        .body_focused(state.focus == Focus::PromptEditor);
    frame.render_stateful_widget(editor, output.editor, &mut state.prompt_view);

    frame.render_widget(widgets::KeyHints::new(state.focus), areas.footer);

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
