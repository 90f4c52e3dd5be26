use std::io::Cursor;
use tiny_http::{Request, Response};
use tracing::debug;

use decision_canvas::{Architecture, ClassLabel, Demo, Outcome, UiEvent};

use crate::state::{FlashMessage, SharedState, StudioState};
use crate::util::form::{form_f64, form_get, read_form};

// ---------------------------------------------------------------------------
// GET /{demo}/canvas.svg
// ---------------------------------------------------------------------------

pub fn handle_svg(state: SharedState, demo: Demo) -> Response<Cursor<Vec<u8>>> {
    let svg = state.lock().unwrap().slot(demo).session.svg();
    crate::routes::svg_response(svg)
}

// ---------------------------------------------------------------------------
// POST /{demo}/point
// ---------------------------------------------------------------------------

/// Expects surface pixel coordinates `x` and `y`. Redirects to the fresh
/// canvas so a script posting the click can swap the drawing in one round trip.
pub fn handle_point(request: &mut Request, state: SharedState, demo: Demo) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let (Some(pixel_x), Some(pixel_y)) = (form_f64(&form, "x"), form_f64(&form, "y")) else {
        return crate::routes::redirect(&format!("/{}", demo.slug()));
    };

    let mut st = state.lock().unwrap();
    dispatch_event(&mut st, demo, UiEvent::PointAdded { pixel_x, pixel_y });
    drop(st);

    crate::routes::redirect(&format!("/{}/canvas.svg", demo.slug()))
}

// ---------------------------------------------------------------------------
// POST /{demo}/class
// ---------------------------------------------------------------------------

pub fn handle_class(request: &mut Request, state: SharedState, demo: Demo) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let mut st = state.lock().unwrap();

    match form_get(&form, "class").and_then(ClassLabel::parse) {
        Some(label) => { dispatch_event(&mut st, demo, UiEvent::ClassChanged(label)); }
        None => st.flash = Some(FlashMessage::error("Unknown class; pick red or green.")),
    }
    drop(st);

    crate::routes::redirect(&format!("/{}", demo.slug()))
}

// ---------------------------------------------------------------------------
// POST /{demo}/clear
// ---------------------------------------------------------------------------

pub fn handle_clear(state: SharedState, demo: Demo) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    if let Some(Outcome::Cleared { removed }) = dispatch_event(&mut st, demo, UiEvent::ClearRequested) {
        st.flash = Some(FlashMessage::success(format!("Removed {removed} point(s).")));
    }
    drop(st);

    crate::routes::redirect(&format!("/{}", demo.slug()))
}

// ---------------------------------------------------------------------------
// POST /{demo}/architecture
// ---------------------------------------------------------------------------

pub fn handle_architecture(request: &mut Request, state: SharedState, demo: Demo) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let arch = form_get(&form, "layers")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .and_then(Architecture::from_hidden_layers);

    let mut st = state.lock().unwrap();
    match arch {
        Some(arch) => {
            if let Some(Outcome::ArchitectureChanged(arch)) = dispatch_event(&mut st, demo, UiEvent::ArchitectureChanged(arch)) {
                st.flash = Some(FlashMessage::success(format!("Switched to {arch}; fit again to train it.")));
            }
        }
        None => st.flash = Some(FlashMessage::error("Choose between 1 and 3 hidden layers.")),
    }
    drop(st);

    crate::routes::redirect(&format!("/{}", demo.slug()))
}

/// Hands an event to the demo's session. Errors become an error flash;
/// ignored events are only logged.
fn dispatch_event(st: &mut StudioState, demo: Demo, event: UiEvent) -> Option<Outcome> {
    match st.slot_mut(demo).session.handle(event) {
        Ok(Outcome::Ignored(reason)) => {
            debug!(%demo, ?event, ?reason, "event ignored");
            None
        }
        Ok(outcome) => Some(outcome),
        Err(e) => {
            st.flash = Some(FlashMessage::error(e.to_string()));
            None
        }
    }
}
