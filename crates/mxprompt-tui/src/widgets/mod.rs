//! Custom widget components

mod config_panel;
mod footer;
mod header;
mod metrics_chart;
mod prompt_editor;
mod text_area;

pub use config_panel::{
    ConfigPanel, GENERATE_LABEL, GENERATING_LABEL, GOALS_PLACEHOLDER, TASK_CONTEXT_PLACEHOLDER,
};
pub use footer::KeyHints;
pub use header::{MainHeader, PRODUCT_NAME, SUBTITLE};
pub use metrics_chart::MetricsChart;
pub use prompt_editor::{PromptEditor, RUNNING_TEST_LABEL, RUN_TEST_LABEL};
pub use text_area::{wrap_chars, TextArea};

/// Braille spinner frames, advanced once per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(crate) fn spinner_char(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}
