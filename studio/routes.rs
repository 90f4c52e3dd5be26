use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use decision_canvas::Demo;

use crate::state::SharedState;
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn header(name: &str, value: &str) -> Header {
    // Only called with static ASCII names and values built from demo slugs.
    Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap()
}

fn body_response(status: u16, content_type: &str, body: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = body.len();
    Response::new(
        StatusCode(status),
        vec![
            header("Content-Type", content_type),
            header("Cache-Control", "no-store"),
        ],
        Cursor::new(body),
        Some(len),
        None,
    )
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    body_response(200, "text/html; charset=utf-8", body.into_bytes())
}

pub fn svg_response(body: String) -> Response<Cursor<Vec<u8>>> {
    body_response(200, "image/svg+xml", body.into_bytes())
}

pub fn redirect(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(303),
        vec![
            header("Location", location),
            header("Content-Length", "0"),
        ],
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    body_response(404, "text/plain", b"404 Not Found".to_vec())
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
///
/// Every route except `/` lives under a demo slug: `/{demo}` and
/// `/{demo}/{action}`. The SSE handler takes ownership of the request to
/// stream; all others return a response the dispatcher sends.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let url    = request.url().to_owned();
    let path   = url.split('?').next().unwrap_or("").trim_end_matches('/').to_owned();

    if path.is_empty() {
        let _ = request.respond(redirect("/neural"));
        return;
    }

    let mut segments = path.trim_start_matches('/').splitn(2, '/');
    let demo = match segments.next().and_then(Demo::from_slug) {
        Some(demo) => demo,
        None => {
            let _ = request.respond(not_found());
            return;
        }
    };
    let action = segments.next().unwrap_or("");

    // SSE is long-lived; the handler takes ownership and drives the stream loop.
    if method == Method::Get && action == "events" {
        handlers::fit_sse::handle(request, state, demo);
        return;
    }

    let response = match (method, action) {
        (Method::Get,  "")             => handlers::page::handle_get(state, demo),
        (Method::Get,  "canvas.svg")   => handlers::canvas::handle_svg(state, demo),

        (Method::Post, "point")        => handlers::canvas::handle_point(&mut request, state, demo),
        (Method::Post, "class")        => handlers::canvas::handle_class(&mut request, state, demo),
        (Method::Post, "clear")        => handlers::canvas::handle_clear(state, demo),
        (Method::Post, "architecture") => handlers::canvas::handle_architecture(&mut request, state, demo),

        (Method::Post, "fit/start")    => handlers::fit::handle_start(state, demo),
        (Method::Post, "fit/stop")     => handlers::fit::handle_stop(state, demo),

        _ => not_found(),
    };

    let _ = request.respond(response);
}
