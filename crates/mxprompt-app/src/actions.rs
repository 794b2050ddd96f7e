//! Action handlers: UpdateAction dispatch and timer task tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::handler::{TimerKind, UpdateAction};
use crate::message::Message;

/// Handles of scheduled timer tasks, one slot per [`TimerKind`].
///
/// Cloning shares the same slots.
#[derive(Debug, Clone, Default)]
pub struct TimerRegistry {
    tasks: Arc<Mutex<HashMap<TimerKind, JoinHandle<()>>>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` for `kind`, aborting whatever was there before
    pub fn replace(&self, kind: TimerKind, handle: JoinHandle<()>) {
        let previous = match self.tasks.lock() {
            Ok(mut map) => map.insert(kind, handle),
            Err(poisoned) => poisoned.into_inner().insert(kind, handle),
        };
        if let Some(previous) = previous {
            if !previous.is_finished() {
                debug!("Cancelling superseded {:?} timer", kind);
            }
            previous.abort();
        }
    }

    /// Abort every pending timer. Returns how many were still running.
    pub fn abort_all(&self) -> usize {
        let drained: Vec<_> = match self.tasks.lock() {
            Ok(mut map) => map.drain().collect(),
            Err(poisoned) => poisoned.into_inner().drain().collect(),
        };
        let mut cancelled = 0;
        for (kind, handle) in drained {
            if !handle.is_finished() {
                debug!("Aborting pending {:?} timer", kind);
                cancelled += 1;
            }
            handle.abort();
        }
        cancelled
    }
}

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    timers: &TimerRegistry,
) {
    match action {
        UpdateAction::ScheduleTimer { kind, token, delay } => {
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if msg_tx.send(kind.completion_message(token)).await.is_err() {
                    warn!("{:?} timer fired after the message channel closed", kind);
                }
            });
            timers.replace(kind, handle);
        }
    }
}
