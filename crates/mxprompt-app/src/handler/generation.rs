//! Mock generation and API test handlers
//!
//! Neither trigger does real work. Each flips a busy flag, asks the event
//! loop for a timer, and settles state when the matching completion arrives.
//! Completions carry the token issued at scheduling time; any other token
//! belongs to a superseded timer and is dropped.

use std::time::Duration;

use mxprompt_core::GeneratedOutput;
use tracing::{debug, info};

use crate::state::{AppState, PendingGeneration};

use super::{TimerKind, UpdateAction, UpdateResult};

/// Simulated prompt optimization time
pub const GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Simulated API test window
pub const TEST_DELAY: Duration = Duration::from_millis(3000);

/// Start generation: clear output, raise the busy flag, schedule completion
pub fn handle_generate(state: &mut AppState) -> UpdateResult {
    if !state.form.has_task_context() {
        debug!("Generate ignored: task context is empty");
        return UpdateResult::none();
    }
    if state.is_generating() {
        debug!("Generate ignored: generation already in flight");
        return UpdateResult::none();
    }

    // Prompt and metrics leave together
    state.output = None;
    state.prompt_view.reset();
    state.repair_focus();

    let token = state.issue_token();
    state.pending_generation = Some(PendingGeneration {
        token,
        input: state.form.clone(),
    });

    info!(
        "Generation started (token {}, role {})",
        token, state.form.agent_role
    );

    UpdateResult::action(UpdateAction::ScheduleTimer {
        kind: TimerKind::Generation,
        token,
        delay: GENERATION_DELAY,
    })
}

/// Generation timer fired: publish prompt and metrics as one value
pub fn handle_generation_completed(state: &mut AppState, token: u64) -> UpdateResult {
    match state.pending_generation.take() {
        Some(pending) if pending.token == token => {
            state.output = Some(GeneratedOutput::from_input(&pending.input));
            info!("Generation completed (token {})", token);
        }
        other => {
            debug!("Dropping stale generation completion (token {})", token);
            state.pending_generation = other;
        }
    }
    UpdateResult::none()
}

/// Start (or restart) the API test window
pub fn handle_test_live(state: &mut AppState) -> UpdateResult {
    if !state.can_test() {
        debug!("Test ignored: no generated prompt");
        return UpdateResult::none();
    }

    let token = state.issue_token();
    state.pending_test = Some(token);
    info!("API test started (token {})", token);

    UpdateResult::action(UpdateAction::ScheduleTimer {
        kind: TimerKind::Test,
        token,
        delay: TEST_DELAY,
    })
}

/// Test timer fired: lower the busy flag if it is still ours
pub fn handle_test_completed(state: &mut AppState, token: u64) -> UpdateResult {
    if state.pending_test == Some(token) {
        state.pending_test = None;
        info!("API test finished (token {})", token);
    } else {
        debug!("Dropping stale test completion (token {})", token);
    }
    UpdateResult::none()
}
