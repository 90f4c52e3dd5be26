use std::ops::ControlFlow;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{PlaygroundError, Result};

// ---------------------------------------------------------------------------
// Fit state machine
// ---------------------------------------------------------------------------

/// Lifecycle of fitting for one session.
///
/// `Idle → Running` on start; a second start while running is rejected.
/// `Running → Idle` only on an explicit stop; there is no natural completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitState {
    #[default]
    Idle,
    Running {
        /// Passes completed since this run started.
        passes: u64,
    },
}

impl FitState {
    pub fn is_running(&self) -> bool {
        matches!(self, FitState::Running { .. })
    }

    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(PlaygroundError::AlreadyRunning);
        }
        *self = FitState::Running { passes: 0 };
        Ok(())
    }

    /// Returns `true` if a run was actually stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        *self = FitState::Idle;
        was_running
    }

    /// Counts one more pass and returns its 1-based number, or `None` when idle.
    pub fn next_pass(&mut self) -> Option<u64> {
        match self {
            FitState::Running { passes } => {
                *passes += 1;
                Some(*passes)
            }
            FitState::Idle => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Recurring task
// ---------------------------------------------------------------------------

/// Periodic driver for training passes.
pub struct FitLoop;

impl FitLoop {
    /// Runs `tick` on a background thread, waiting `period` before every call.
    ///
    /// The wait starts after the previous tick returns, so ticks never overlap
    /// and an overrunning pass delays the next one instead of queueing it.
    /// The loop ends when `tick` breaks or the returned handle is cancelled
    /// or dropped.
    pub fn spawn<F>(period: Duration, mut tick: F) -> Result<FitHandle>
    where
        F: FnMut(u64) -> ControlFlow<()> + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let thread = thread::Builder::new()
            .name("fit-loop".into())
            .spawn(move || {
                let mut ticks = 0u64;
                loop {
                    match cancel_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {}
                        // Explicit cancel or the handle was dropped.
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                    ticks += 1;
                    if tick(ticks).is_break() {
                        break;
                    }
                }
                debug!(ticks, "fit loop exited");
            })
            .map_err(PlaygroundError::Spawn)?;

        info!(period_ms = period.as_millis() as u64, "fit loop started");
        Ok(FitHandle { cancel_tx: Some(cancel_tx), thread: Some(thread) })
    }
}

/// Owner's handle on a running [`FitLoop`].
///
/// Dropping the handle signals the loop to stop without waiting for it.
pub struct FitHandle {
    cancel_tx: Option<mpsc::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FitHandle {
    /// Signals the loop and waits for the thread to exit. A pass in progress
    /// runs to completion first, so callers must not hold any lock the tick
    /// closure takes.
    pub fn cancel(mut self) {
        self.signal();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        info!("fit loop cancelled");
    }

    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    fn signal(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for FitHandle {
    fn drop(&mut self) {
        self.signal();
    }
}
