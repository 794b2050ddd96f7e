//! Main TUI runner - entry point and event loop

use std::time::Duration;

use mxprompt_app::config::Settings;
use mxprompt_app::message::Message;
use mxprompt_app::signals::Frontend;
use mxprompt_app::Engine;
use mxprompt_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// `startup` messages (pre-filled form values from the command line) are
/// processed before the first frame is drawn.
pub async fn run(settings: Settings, startup: Vec<Message>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let poll_interval = settings.ui.poll_interval();
    let mut engine = Engine::new(settings);

    // Signal handler (sends Message::Quit on SIGINT/SIGTERM)
    engine.spawn_signal_handler(Frontend::Tui);

    for msg in startup {
        engine.process_message(msg);
    }

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("TUI started (poll interval {:?})", poll_interval);

    let result = run_loop(&mut term, &mut engine, poll_interval);

    // Cancel pending timers before the terminal goes away
    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine,
    poll_interval: Duration,
) -> Result<()> {
    while !engine.should_quit() {
        // Timer completions and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll(poll_interval)? {
            engine.process_message(message);
        }
    }

    info!("TUI loop exited");
    Ok(())
}
