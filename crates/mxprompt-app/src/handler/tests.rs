//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};
use mxprompt_core::{AgentRole, PromptMetrics, OUTPUT_PLACEHOLDER};

fn state_with_context(ctx: &str) -> AppState {
    let mut state = AppState::new();
    state.set_task_context(ctx);
    state
}

/// Run Generate and feed back the completion for the issued token
fn generate_and_complete(state: &mut AppState) {
    let result = update(state, Message::Generate);
    let Some(UpdateAction::ScheduleTimer { token, .. }) = result.action else {
        panic!("Generate did not schedule a timer");
    };
    update(state, Message::GenerationCompleted { token });
}

fn scheduled_token(result: &UpdateResult) -> u64 {
    match result.action {
        Some(UpdateAction::ScheduleTimer { token, .. }) => token,
        None => panic!("expected a scheduled timer"),
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}

#[test]
fn test_escape_quits_from_controls() {
    let mut state = AppState::new();
    state.focus = Focus::AgentRole;
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
}

#[test]
fn test_escape_is_ignored_in_text_fields() {
    let mut state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Esc), None);

    state.focus = Focus::Goals;
    assert_eq!(handle_key(&state, InputKey::Esc), None);

    update(&mut state, Message::Key(InputKey::Esc));
    assert!(!state.should_quit());
}

#[test]
fn test_q_types_into_text_field() {
    let state = AppState::new();
    assert_eq!(state.focus, Focus::TaskContext);
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::InputChar('q'))
    );
}

#[test]
fn test_q_quits_from_button() {
    let mut state = AppState::new();
    state.focus = Focus::GenerateButton;
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
}

// ─────────────────────────────────────────────────────────
// Generation
// ─────────────────────────────────────────────────────────

#[test]
fn test_generate_with_empty_context_is_ignored() {
    let mut state = AppState::new();

    let result = update(&mut state, Message::Generate);

    assert!(result.action.is_none());
    assert!(!state.is_generating());
    assert!(state.output.is_none());
}

#[test]
fn test_generate_with_whitespace_context_is_allowed() {
    let mut state = state_with_context("   ");

    let result = update(&mut state, Message::Generate);

    assert!(result.action.is_some());
    assert!(state.is_generating());
}

#[test]
fn test_generate_schedules_two_second_timer() {
    let mut state = state_with_context("ctx");

    let result = update(&mut state, Message::Generate);

    assert!(matches!(
        result.action,
        Some(UpdateAction::ScheduleTimer {
            kind: TimerKind::Generation,
            delay,
            ..
        }) if delay == GENERATION_DELAY
    ));
    assert!(state.is_generating());
    assert!(!state.can_generate());
}

#[test]
fn test_generate_clears_previous_output() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);
    assert!(state.output.is_some());

    update(&mut state, Message::Generate);

    assert!(state.output.is_none());
    assert!(state.generated_prompt().is_none());
    assert!(state.metrics().is_none());
}

#[test]
fn test_generate_while_generating_is_ignored() {
    let mut state = state_with_context("ctx");
    let first = update(&mut state, Message::Generate);
    let token = scheduled_token(&first);

    let second = update(&mut state, Message::Generate);

    assert!(second.action.is_none());
    assert_eq!(state.pending_generation.as_ref().map(|p| p.token), Some(token));
}

#[test]
fn test_generation_completed_publishes_prompt_and_metrics() {
    let mut state = state_with_context("summarize articles");
    state.set_goals("produce concise digests");
    state.set_agent_role(AgentRole::CodeReviewer);

    generate_and_complete(&mut state);

    assert!(!state.is_generating());
    let prompt = state.generated_prompt().unwrap();
    assert!(prompt.starts_with("# Role: Code Reviewer\n## Context: summarize articles\n\n"));
    assert!(prompt.contains("You are tasked with produce concise digests. "));
    assert_eq!(state.metrics(), Some(&PromptMetrics::FIXED));
}

#[test]
fn test_generation_uses_form_snapshot_from_start() {
    let mut state = state_with_context("first context");
    let result = update(&mut state, Message::Generate);
    let token = scheduled_token(&result);

    // Edits made while the timer is pending do not leak into the prompt
    update(&mut state, Message::SetTaskContext("edited".into()));
    update(&mut state, Message::SetAgentRole(AgentRole::FinancialAnalyst));
    update(&mut state, Message::GenerationCompleted { token });

    let prompt = state.generated_prompt().unwrap();
    assert!(prompt.contains("## Context: first context"));
    assert!(prompt.contains("# Role: Research Assistant"));
    assert_eq!(state.form.task_context, "edited");
}

#[test]
fn test_empty_goals_render_verbatim() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);

    assert!(state
        .generated_prompt()
        .unwrap()
        .contains("You are tasked with . "));
}

#[test]
fn test_stale_generation_completion_is_dropped() {
    let mut state = state_with_context("ctx");
    let result = update(&mut state, Message::Generate);
    let token = scheduled_token(&result);

    update(
        &mut state,
        Message::GenerationCompleted {
            token: token.wrapping_add(100),
        },
    );

    assert!(state.is_generating());
    assert!(state.output.is_none());
}

#[test]
fn test_generation_completion_without_pending_is_noop() {
    let mut state = state_with_context("ctx");
    update(&mut state, Message::GenerationCompleted { token: 1 });
    assert!(state.output.is_none());
    assert!(!state.is_generating());
}

#[test]
fn test_output_placeholder_constant() {
    assert_eq!(
        OUTPUT_PLACEHOLDER,
        "Click 'Generate Optimized Prompt' on the left to see results here..."
    );
}

// ─────────────────────────────────────────────────────────
// API Test
// ─────────────────────────────────────────────────────────

#[test]
fn test_test_live_without_prompt_is_ignored() {
    let mut state = state_with_context("ctx");

    let result = update(&mut state, Message::TestLive);

    assert!(result.action.is_none());
    assert!(!state.is_testing());
}

#[test]
fn test_test_live_schedules_three_second_window() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);

    let result = update(&mut state, Message::TestLive);

    assert!(matches!(
        result.action,
        Some(UpdateAction::ScheduleTimer {
            kind: TimerKind::Test,
            delay,
            ..
        }) if delay == TEST_DELAY
    ));
    assert!(state.is_testing());
}

#[test]
fn test_test_completed_clears_flag_and_keeps_output() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);
    let prompt_before = state.generated_prompt().map(str::to_owned);

    let result = update(&mut state, Message::TestLive);
    let token = scheduled_token(&result);
    update(&mut state, Message::TestCompleted { token });

    assert!(!state.is_testing());
    assert_eq!(state.generated_prompt().map(str::to_owned), prompt_before);
    assert_eq!(state.metrics(), Some(&PromptMetrics::FIXED));
}

#[test]
fn test_retrigger_test_supersedes_first_window() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);

    let first = scheduled_token(&update(&mut state, Message::TestLive));
    let second = scheduled_token(&update(&mut state, Message::TestLive));
    assert_ne!(first, second);

    update(&mut state, Message::TestCompleted { token: first });
    assert!(state.is_testing(), "stale completion must not end the window");

    update(&mut state, Message::TestCompleted { token: second });
    assert!(!state.is_testing());
}

#[test]
fn test_generate_during_test_leaves_test_running() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);
    let test_token = scheduled_token(&update(&mut state, Message::TestLive));

    update(&mut state, Message::Generate);
    assert!(state.is_testing());
    assert!(state.is_generating());

    update(&mut state, Message::TestCompleted { token: test_token });
    assert!(!state.is_testing());
}

// ─────────────────────────────────────────────────────────
// Form editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_edits_focused_field() {
    let mut state = AppState::new();
    for c in "hi".chars() {
        update(&mut state, Message::InputChar(c));
    }
    update(&mut state, Message::InputNewline);
    update(&mut state, Message::InputChar('x'));
    assert_eq!(state.form.task_context, "hi\nx");

    update(&mut state, Message::InputBackspace);
    assert_eq!(state.form.task_context, "hi\n");

    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, Focus::Goals);
    update(&mut state, Message::InputChar('g'));
    assert_eq!(state.form.goals, "g");

    update(&mut state, Message::ClearField);
    assert!(state.form.goals.is_empty());
    assert_eq!(state.form.task_context, "hi\n");
}

#[test]
fn test_input_char_ignored_on_non_text_focus() {
    let mut state = AppState::new();
    state.focus = Focus::AgentRole;
    update(&mut state, Message::InputChar('z'));
    assert!(state.form.task_context.is_empty());
    assert!(state.form.goals.is_empty());
}

#[test]
fn test_role_cycling_wraps() {
    let mut state = AppState::new();
    update(&mut state, Message::PreviousRole);
    assert_eq!(state.form.agent_role, AgentRole::TechnicalWriter);
    update(&mut state, Message::NextRole);
    assert_eq!(state.form.agent_role, AgentRole::ResearchAssistant);
}

#[test]
fn test_role_keys_on_role_selector() {
    let mut state = AppState::new();
    state.focus = Focus::AgentRole;
    assert_eq!(
        handle_key(&state, InputKey::Right),
        Some(Message::NextRole)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('h')),
        Some(Message::PreviousRole)
    );
}

#[test]
fn test_key_message_chains_to_input() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::Char('a')));
    assert_eq!(result.message, Some(Message::InputChar('a')));
}

// ─────────────────────────────────────────────────────────
// Activation & shortcuts
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_on_generate_button_activates() {
    let mut state = state_with_context("ctx");
    state.focus = Focus::GenerateButton;
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::ActivateFocused)
    );

    let result = update(&mut state, Message::ActivateFocused);
    assert_eq!(result.message, Some(Message::Generate));
}

#[test]
fn test_enter_on_test_button_activates_test() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);
    state.focus = Focus::TestButton;

    let result = update(&mut state, Message::ActivateFocused);
    assert_eq!(result.message, Some(Message::TestLive));
}

#[test]
fn test_global_shortcuts_from_text_field() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('g')),
        Some(Message::Generate)
    );
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('t')),
        Some(Message::TestLive)
    );
    assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::FocusNext));
    assert_eq!(
        handle_key(&state, InputKey::BackTab),
        Some(Message::FocusPrevious)
    );
}

#[test]
fn test_enter_in_text_field_inserts_newline() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::InputNewline)
    );
}

// ─────────────────────────────────────────────────────────
// Chart hover
// ─────────────────────────────────────────────────────────

#[test]
fn test_chart_hover_cycles_through_bars() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);
    state.focus = Focus::TestButton;
    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, Focus::MetricsChart);
    assert_eq!(state.hovered_entry().unwrap().tooltip(), "Accuracy: 94");

    update(&mut state, Message::ChartHoverPrevious);
    assert_eq!(
        state.hovered_entry().unwrap().tooltip(),
        "Hallucination Risk: 12"
    );

    update(&mut state, Message::ChartHoverNext);
    update(&mut state, Message::ChartHoverNext);
    assert_eq!(state.hovered_entry().unwrap().tooltip(), "Consistency: 88");
}

#[test]
fn test_chart_keys_map_to_hover() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);
    state.focus = Focus::MetricsChart;
    assert_eq!(
        handle_key(&state, InputKey::Char('j')),
        Some(Message::ChartHoverNext)
    );
    assert_eq!(
        handle_key(&state, InputKey::Up),
        Some(Message::ChartHoverPrevious)
    );
}

#[test]
fn test_chart_hover_ignored_without_metrics() {
    let mut state = AppState::new();
    update(&mut state, Message::ChartHoverNext);
    assert!(state.chart_hover.is_none());
}

#[test]
fn test_regenerate_moves_focus_off_chart() {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);
    state.focus = Focus::MetricsChart;
    state.chart_hover = Some(3);

    update(&mut state, Message::Generate);

    assert_eq!(state.focus, Focus::GenerateButton);
    assert!(state.chart_hover.is_none());
    assert!(state.hovered_entry().is_none());
}

#[test]
fn test_tick_advances_spinner_while_generating() {
    let mut state = state_with_context("ctx");
    update(&mut state, Message::Generate);
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 1);
}

// ─────────────────────────────────────────────────────────
// Prompt scrolling
// ─────────────────────────────────────────────────────────

/// Generated prompt with a rendered size of 30 wrapped rows in an 8-row card
fn scrollable_state() -> AppState {
    let mut state = state_with_context("ctx");
    generate_and_complete(&mut state);
    state.focus = Focus::PromptEditor;
    state.prompt_view.update_content_size(30, 8);
    state
}

#[test]
fn test_prompt_editor_keys_map_to_scroll() {
    let state = scrollable_state();
    let cases = [
        (InputKey::Down, Message::PromptScrollDown),
        (InputKey::Char('j'), Message::PromptScrollDown),
        (InputKey::Up, Message::PromptScrollUp),
        (InputKey::PageDown, Message::PromptPageDown),
        (InputKey::PageUp, Message::PromptPageUp),
        (InputKey::Home, Message::PromptScrollToTop),
        (InputKey::Char('G'), Message::PromptScrollToBottom),
    ];
    for (key, expected) in cases {
        assert_eq!(handle_key(&state, key), Some(expected), "key {:?}", key);
    }
}

#[test]
fn test_prompt_scroll_messages_move_offset() {
    let mut state = scrollable_state();

    let chained = update(&mut state, Message::Key(InputKey::Down)).message;
    update(&mut state, chained.expect("Down should map to a scroll message"));
    assert_eq!(state.prompt_view.offset, 1);

    update(&mut state, Message::PromptPageDown);
    assert_eq!(state.prompt_view.offset, 7);

    update(&mut state, Message::PromptScrollToBottom);
    assert_eq!(state.prompt_view.offset, 22);

    update(&mut state, Message::PromptScrollToTop);
    assert_eq!(state.prompt_view.offset, 0);
}

#[test]
fn test_regenerate_resets_prompt_scroll() {
    let mut state = scrollable_state();
    update(&mut state, Message::PromptScrollToBottom);
    assert!(state.prompt_view.offset > 0);

    update(&mut state, Message::Generate);

    assert_eq!(state.prompt_view.offset, 0);
    assert_eq!(state.focus, Focus::GenerateButton);
}
