use std::io::Cursor;
use std::sync::{Arc, Mutex, mpsc};
use tiny_http::Response;
use tracing::warn;

use decision_canvas::{Demo, FitLoop, PassReport, UiEvent};

use crate::state::{FlashMessage, SharedState};

/// Reports buffered for SSE subscribers before the loop starts dropping them.
const REPORT_BUFFER: usize = 16;

// ---------------------------------------------------------------------------
// POST /{demo}/fit/start
// ---------------------------------------------------------------------------

pub fn handle_start(state: SharedState, demo: Demo) -> Response<Cursor<Vec<u8>>> {
    let location = format!("/{}", demo.slug());
    let mut st = state.lock().unwrap();
    let period = st.config.fit_period();

    if let Err(e) = st.slot_mut(demo).session.handle(UiEvent::StartFitRequested) {
        st.flash = Some(FlashMessage::error(e.to_string()));
        drop(st);
        return crate::routes::redirect(&location);
    }

    // Just started, so the session always has a current run here.
    let Some(run) = st.slot(demo).session.fit_run() else {
        drop(st);
        return crate::routes::redirect(&location);
    };

    let (tx, rx) = mpsc::sync_channel::<PassReport>(REPORT_BUFFER);
    st.slot_mut(demo).reports = Some(Arc::new(Mutex::new(rx)));

    // The run id keeps a loop from a stopped run out of a newer one.
    let state_clone = state.clone();
    let spawned = FitLoop::spawn(period, move |_tick| {
        let mut st = state_clone.lock().unwrap();
        st.slot_mut(demo).session.fit_tick(run, &tx)
    });

    match spawned {
        Ok(handle) => st.slot_mut(demo).fit = Some(handle),
        Err(e) => {
            warn!(%demo, "could not start fit loop: {e}");
            st.slot_mut(demo).session.handle(UiEvent::StopFitRequested).ok();
            st.slot_mut(demo).reports = None;
            st.flash = Some(FlashMessage::error(e.to_string()));
        }
    }
    drop(st);

    crate::routes::redirect(&location)
}

// ---------------------------------------------------------------------------
// POST /{demo}/fit/stop
// ---------------------------------------------------------------------------

pub fn handle_stop(state: SharedState, demo: Demo) -> Response<Cursor<Vec<u8>>> {
    let handle = {
        let mut st = state.lock().unwrap();
        let slot = st.slot_mut(demo);
        slot.session.handle(UiEvent::StopFitRequested).ok();
        slot.fit.take()
    };

    // Joining waits for an in-flight pass, which needs the state lock.
    if let Some(handle) = handle {
        handle.cancel();
    }

    crate::routes::redirect(&format!("/{}", demo.slug()))
}
