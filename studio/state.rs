use std::sync::{Arc, Mutex, mpsc};

use decision_canvas::{Demo, FitHandle, PassReport, PlaygroundConfig, Session};

// ---------------------------------------------------------------------------
// Per-demo slot
// ---------------------------------------------------------------------------

/// Receiving end of a fit loop's report channel, shared with SSE handlers.
pub type ReportRx = Arc<Mutex<mpsc::Receiver<PassReport>>>;

pub struct DemoSlot {
    pub session: Session,
    /// Present while the background fit loop is alive.
    pub fit:     Option<FitHandle>,
    /// Reports from the most recent fit loop. Outlives the loop so the SSE
    /// handler can observe the disconnect and send `stopped`.
    pub reports: Option<ReportRx>,
}

// ---------------------------------------------------------------------------
// Flash messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum FlashKind { Success, Error }

#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Success, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Error, text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Main state struct
// ---------------------------------------------------------------------------

pub struct StudioState {
    pub config: PlaygroundConfig,
    /// Indexed by `Demo as usize`, in `Demo::ALL` order.
    slots:      Vec<DemoSlot>,
    /// One-shot flash message for the next page render.
    pub flash:  Option<FlashMessage>,
}

impl StudioState {
    pub fn new(config: PlaygroundConfig) -> Self {
        let slots = Demo::ALL.into_iter()
            .map(|demo| DemoSlot {
                session: Session::new(demo, config.clone()),
                fit:     None,
                reports: None,
            })
            .collect();
        StudioState { config, slots, flash: None }
    }

    pub fn slot(&self, demo: Demo) -> &DemoSlot {
        &self.slots[demo as usize]
    }

    pub fn slot_mut(&mut self, demo: Demo) -> &mut DemoSlot {
        &mut self.slots[demo as usize]
    }

    /// Takes and returns the current flash message, clearing it.
    pub fn take_flash(&mut self) -> Option<FlashMessage> {
        self.flash.take()
    }
}

/// Shared state type: an `Arc<Mutex<StudioState>>` passed to every handler.
pub type SharedState = Arc<Mutex<StudioState>>;
