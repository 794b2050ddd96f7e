//! Headless mode runner - main event loop without TUI
//!
//! Pre-fills the form, starts one generation and forwards engine events as
//! NDJSON until generation (and the optional API test) has finished.

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use mxprompt_app::{config::Settings, message::Message, signals::Frontend, Engine, EngineEvent};
use mxprompt_core::prelude::*;

use super::HeadlessEvent;
use crate::launch::LaunchOptions;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings, options: LaunchOptions) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("MX Prompt Designer starting in HEADLESS mode");
    info!("Run API test: {}", options.run_test);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    engine.spawn_signal_handler(Frontend::Headless);

    // Subscribe before the first message so no event is missed
    let mut events = engine.subscribe();

    for msg in options.startup_messages() {
        engine.process_message(msg);
    }

    if !engine.state.can_generate() {
        let err = Error::EmptyTaskContext;
        HeadlessEvent::from_error(&err).emit();
        engine.shutdown();
        return Err(err);
    }

    engine.process_message(Message::Generate);

    let result = drive(&mut engine, &mut events, options.run_test, |event| event.emit()).await;

    engine.shutdown();

    info!("MX Prompt Designer headless mode exiting");
    result
}

/// Forward engine events to `sink` until the run is complete.
///
/// The run ends after `GenerationCompleted`, or after `TestCompleted` when
/// `run_test` is set (the test is started as soon as the prompt exists).
/// A quit request ends it early. A closed engine channel is an error.
pub async fn drive<F>(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    run_test: bool,
    mut sink: F,
) -> Result<()>
where
    F: FnMut(HeadlessEvent),
{
    loop {
        let mut finished = false;

        loop {
            let event = match events.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Lagged(n)) => {
                    warn!("Headless event receiver lagged, {} event(s) dropped", n);
                    continue;
                }
                Err(TryRecvError::Closed) => return Err(Error::ChannelClosed),
            };

            debug!("Engine event: {}", event.event_type());

            if let Some(headless) = HeadlessEvent::from_engine(&event) {
                sink(headless);
            }

            match event {
                EngineEvent::GenerationCompleted { .. } if run_test => {
                    engine.process_message(Message::TestLive);
                }
                EngineEvent::GenerationCompleted { .. } | EngineEvent::TestCompleted => {
                    finished = true;
                }
                _ => {}
            }
        }

        if finished {
            break;
        }

        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.next_message().await {
            Some(msg) => engine.process_message(msg),
            None => return Err(Error::ChannelClosed),
        }
    }

    Ok(())
}
