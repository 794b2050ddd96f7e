//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the timer registry and
//! the event broadcaster. Both frontends feed it messages and read state back.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use crate::actions::TimerRegistry;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals::{self, Frontend};
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StateSnapshot {
    generation_token: Option<u64>,
    test_token: Option<u64>,
    has_output: bool,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            generation_token: state.pending_generation.as_ref().map(|p| p.token),
            test_token: state.pending_test,
            has_output: state.output.is_some(),
        }
    }
}

/// Orchestration engine for MX Prompt Designer.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, timers).
    msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    msg_rx: mpsc::Receiver<Message>,

    /// Pending timer tasks; aborted on shutdown
    timers: TimerRegistry,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,

    /// OS signal listener, if a frontend installed one
    signal_task: Option<JoinHandle<()>>,
}

impl Engine {
    /// Create an Engine with loaded settings.
    ///
    /// Nothing is spawned here; timers are spawned lazily as messages
    /// request them, so this must run inside a tokio runtime only once
    /// messages are processed.
    pub fn new(settings: Settings) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            timers: TimerRegistry::new(),
            event_tx,
            signal_task: None,
        }
    }

    /// Listen for SIGINT/SIGTERM and turn them into `Message::Quit`.
    ///
    /// Replaces any listener installed earlier; must run inside a runtime.
    pub fn spawn_signal_handler(&mut self, frontend: Frontend) {
        let handle = signals::spawn_signal_handler(self.msg_tx.clone(), frontend);
        if let Some(previous) = self.signal_task.replace(handle) {
            previous.abort();
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.timers);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from timers or other input sources.
    ///
    /// The engine holds a sender itself, so this only returns `None` if the
    /// channel was closed explicitly.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Initiate shutdown: cancel pending timers so nothing fires after
    /// teardown, and stop the signal listener.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        if let Some(task) = self.signal_task.take() {
            task.abort();
        }

        let cancelled = self.timers.abort_all();
        if cancelled > 0 {
            info!("Cancelled {} pending timer(s) on shutdown", cancelled);
        }
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.generation_token.is_some() && post.generation_token != pre.generation_token {
            if let Some(pending) = &self.state.pending_generation {
                self.emit(EngineEvent::GenerationStarted {
                    input: pending.input.clone(),
                });
            }
        }

        if pre.generation_token.is_some() && post.generation_token.is_none() && post.has_output {
            if let Some(output) = &self.state.output {
                self.emit(EngineEvent::GenerationCompleted {
                    output: output.clone(),
                });
            }
        }

        if post.test_token.is_some() && post.test_token != pre.test_token {
            self.emit(EngineEvent::TestStarted);
        }

        if pre.test_token.is_some() && post.test_token.is_none() {
            self.emit(EngineEvent::TestCompleted);
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
