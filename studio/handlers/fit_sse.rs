use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tiny_http::Request;
use tracing::debug;

use decision_canvas::Demo;

use crate::state::SharedState;
use crate::util::sse::{format_sse_event, write_frame, SSE_KEEPALIVE, SSE_RESPONSE_HEAD};

/// `GET /{demo}/events`: streams one `pass` event per training pass.
///
/// Sends a keep-alive comment every 500 ms without a report, and a final
/// `stopped` event once the fit loop is gone (or if it was never started).
pub fn handle(request: Request, state: SharedState, demo: Demo) {
    let mut writer = request.into_writer();
    if write_frame(&mut writer, SSE_RESPONSE_HEAD).is_err() {
        return;
    }

    // Clone the receiver out so the state lock is not held while streaming.
    let reports = {
        let st = state.lock().unwrap();
        st.slot(demo).reports.clone()
    };

    let Some(rx_arc) = reports else {
        let _ = write_frame(&mut writer, &format_sse_event("stopped", "{}"));
        return;
    };

    loop {
        let result = {
            let rx = rx_arc.lock().unwrap();
            rx.recv_timeout(Duration::from_millis(500))
        };

        let frame = match result {
            Ok(report) => match serde_json::to_string(&report) {
                Ok(json) => format_sse_event("pass", &json),
                Err(_) => continue,
            },
            Err(RecvTimeoutError::Timeout) => SSE_KEEPALIVE.to_owned(),
            Err(RecvTimeoutError::Disconnected) => {
                let _ = write_frame(&mut writer, &format_sse_event("stopped", "{}"));
                break;
            }
        };

        if write_frame(&mut writer, &frame).is_err() {
            debug!(%demo, "event stream client disconnected");
            break;
        }
    }
}
