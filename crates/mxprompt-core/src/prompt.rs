//! Prompt template and the generated output record

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::metrics::PromptMetrics;
use crate::types::FormInput;

/// Fixed body appended after the interpolated goals sentence
pub const PROMPT_BODY: &str = "Apply a critical thinking framework to synthesize information and generate actionable results.

**Constraints:**
- Prioritize verifiable data sources
- Structure output clearly with headers
- Highlight potential risks or edge cases

**Output Format:**
1. Executive Summary
2. Key Findings
3. Actionable Recommendations (Prioritized 1-3)
4. Review Points";

/// Text shown in the output area before anything has been generated
pub const OUTPUT_PLACEHOLDER: &str =
    "Click 'Generate Optimized Prompt' on the left to see results here...";

/// Render the prompt for a form snapshot.
///
/// Values are substituted verbatim; nothing is escaped or trimmed.
pub fn render_prompt(input: &FormInput) -> String {
    format!(
        "# Role: {role}\n## Context: {context}\n\nYou are tasked with {goals}. {body}",
        role = input.agent_role.label(),
        context = input.task_context,
        goals = input.goals,
        body = PROMPT_BODY,
    )
}

/// Prompt text and metrics, always produced and cleared together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedOutput {
    pub prompt: String,
    pub metrics: PromptMetrics,
    #[serde(skip)]
    pub generated_at: DateTime<Local>,
}

impl GeneratedOutput {
    /// Build the output for a form snapshot
    pub fn from_input(input: &FormInput) -> Self {
        Self {
            prompt: render_prompt(input),
            metrics: PromptMetrics::FIXED,
            generated_at: Local::now(),
        }
    }

    /// Local wall-clock time of generation, shown on the editor card
    pub fn generated_time_label(&self) -> String {
        self.generated_at.format("%H:%M:%S").to_string()
    }
}
