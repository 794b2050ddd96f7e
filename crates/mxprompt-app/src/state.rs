//! Application state (Model in TEA pattern)

use mxprompt_core::{
    chart_entries, AgentRole, ChartEntry, FormInput, GeneratedOutput, PromptMetrics,
};

use crate::config::Settings;
use crate::prompt_view_state::PromptViewState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Focusable controls, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TaskContext,
    Goals,
    AgentRole,
    GenerateButton,
    /// "Run API Test" button; only reachable once a prompt exists
    TestButton,
    /// Generated prompt body, scrollable; only reachable once a prompt exists
    PromptEditor,
    /// Metrics chart; only reachable once metrics exist
    MetricsChart,
}

impl Focus {
    const RING: [Focus; 7] = [
        Focus::TaskContext,
        Focus::Goals,
        Focus::AgentRole,
        Focus::GenerateButton,
        Focus::TestButton,
        Focus::PromptEditor,
        Focus::MetricsChart,
    ];

    /// Whether this control accepts typed characters
    pub fn is_text_field(&self) -> bool {
        matches!(self, Focus::TaskContext | Focus::Goals)
    }
}

/// A generation whose timer has not fired yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    /// Token the completion message must carry
    pub token: u64,
    /// Form values captured when generation started
    pub input: FormInput,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// Form fields
    pub form: FormInput,

    /// Focused control
    pub focus: Focus,

    /// Set while the generation timer is pending
    pub pending_generation: Option<PendingGeneration>,

    /// Token of the running test window, if any
    pub pending_test: Option<u64>,

    /// Last generated prompt and metrics; cleared when generation starts
    pub output: Option<GeneratedOutput>,

    /// Scroll position of the prompt card
    pub prompt_view: PromptViewState,

    /// Index of the hovered chart bar (tooltip target)
    pub chart_hover: Option<usize>,

    /// Spinner animation frame, advanced on Tick while busy
    pub spinner_frame: usize,

    /// Monotonic source for timer tokens
    next_token: u64,

    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let mut state = Self::default();
        state.form.agent_role = settings.behavior.default_role;
        state.settings = settings;
        state
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Derived status
    // ─────────────────────────────────────────────────────────

    /// Generation Status flag
    pub fn is_generating(&self) -> bool {
        self.pending_generation.is_some()
    }

    /// Test Status flag
    pub fn is_testing(&self) -> bool {
        self.pending_test.is_some()
    }

    /// Generate is enabled iff a task context exists and nothing is in flight
    pub fn can_generate(&self) -> bool {
        self.form.has_task_context() && !self.is_generating()
    }

    /// The Run API Test control is only shown once a prompt exists
    pub fn can_test(&self) -> bool {
        self.generated_prompt().is_some()
    }

    pub fn generated_prompt(&self) -> Option<&str> {
        self.output
            .as_ref()
            .map(|o| o.prompt.as_str())
            .filter(|p| !p.is_empty())
    }

    pub fn metrics(&self) -> Option<&PromptMetrics> {
        self.output.as_ref().map(|o| &o.metrics)
    }

    /// Chart rows for the current metrics (empty when absent)
    pub fn chart_entries(&self) -> Vec<ChartEntry> {
        chart_entries(self.metrics())
    }

    /// Tooltip for the hovered bar, if the chart is focused and hovered
    pub fn hovered_entry(&self) -> Option<ChartEntry> {
        if self.focus != Focus::MetricsChart {
            return None;
        }
        let idx = self.chart_hover?;
        self.chart_entries().get(idx).copied()
    }

    // ─────────────────────────────────────────────────────────
    // Form setters
    // ─────────────────────────────────────────────────────────

    pub fn set_task_context(&mut self, text: impl Into<String>) {
        self.form.task_context = text.into();
    }

    pub fn set_goals(&mut self, text: impl Into<String>) {
        self.form.goals = text.into();
    }

    pub fn set_agent_role(&mut self, role: AgentRole) {
        self.form.agent_role = role;
    }

    /// The text buffer behind the focused control, if it is a text field
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::TaskContext => Some(&mut self.form.task_context),
            Focus::Goals => Some(&mut self.form.goals),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    fn is_focusable(&self, focus: Focus) -> bool {
        match focus {
            Focus::TestButton | Focus::PromptEditor => self.can_test(),
            Focus::MetricsChart => self.metrics().is_some(),
            _ => true,
        }
    }

    fn step_focus(&mut self, forward: bool) {
        let len = Focus::RING.len();
        let start = Focus::RING
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        for step in 1..=len {
            let idx = if forward {
                (start + step) % len
            } else {
                (start + len - step) % len
            };
            let candidate = Focus::RING[idx];
            if self.is_focusable(candidate) {
                self.focus = candidate;
                break;
            }
        }
        self.sync_chart_hover();
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    /// Move focus off controls that disappeared with the output
    pub fn repair_focus(&mut self) {
        if !self.is_focusable(self.focus) {
            self.focus = Focus::GenerateButton;
        }
        self.sync_chart_hover();
    }

    fn sync_chart_hover(&mut self) {
        if self.focus == Focus::MetricsChart {
            if self.chart_hover.is_none() {
                self.chart_hover = Some(0);
            }
        } else {
            self.chart_hover = None;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Timer tokens
    // ─────────────────────────────────────────────────────────

    /// Allocate a fresh token for a scheduled timer
    pub fn issue_token(&mut self) -> u64 {
        self.next_token = self.next_token.wrapping_add(1);
        self.next_token
    }

    /// Advance the spinner while something is busy
    pub fn tick_spinner(&mut self) {
        if self.is_generating() || self.is_testing() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
