//! OS signal handling for graceful shutdown
//!
//! One listener per Engine. A termination signal becomes `Message::Quit` on
//! the engine channel so the frontend tears down through its normal path
//! (timers aborted, terminal restored).

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use mxprompt_core::prelude::*;

/// Frontend driving the engine, named in shutdown logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Tui,
    Headless,
}

impl Frontend {
    pub fn label(&self) -> &'static str {
        match self {
            Frontend::Tui => "TUI",
            Frontend::Headless => "headless run",
        }
    }
}

/// Termination request received from the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl+C on Windows
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl ShutdownSignal {
    pub fn name(&self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

/// Spawn a task that turns the first termination signal into `Message::Quit`.
///
/// The handle is owned by the Engine and aborted on shutdown.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>, frontend: Frontend) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => {
                forward_quit(&tx, frontend, signal).await;
            }
            Err(e) => error!("Signal handler error ({}): {}", frontend.label(), e),
        }
    })
}

/// Send the quit request. Returns false if the engine is already gone.
async fn forward_quit(
    tx: &mpsc::Sender<Message>,
    frontend: Frontend,
    signal: ShutdownSignal,
) -> bool {
    info!("{} received, stopping {}", signal.name(), frontend.label());
    if tx.send(Message::Quit).await.is_err() {
        warn!(
            "{} exited before the {} quit request was delivered",
            frontend.label(),
            signal.name()
        );
        return false;
    }
    true
}

/// Wait for a termination signal
async fn wait_for_signal() -> Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        let received = tokio::select! {
            _ = sigint.recv() => ShutdownSignal::Interrupt,
            _ = sigterm.recv() => ShutdownSignal::Terminate,
        };
        Ok(received)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok(ShutdownSignal::Interrupt)
    }
}
