/// decision-canvas Studio
///
/// Browser playground for three teaching demos: click to place points, then
/// watch a model fit them live.
/// Served by a synchronous tiny_http server.
///
/// Run with:
///   cargo run --bin studio --release [config.json]
/// Then open http://127.0.0.1:7878
///
/// Pages:
///   /linear   : linear regression, fitted line redrawn every pass
///   /logistic : logistic regression, decision-boundary mask
///   /neural   : 1 to 3 hidden layer classifier, decision-boundary mask

mod state;
mod render;
mod routes;
mod handlers;
mod util;

use std::sync::{Arc, Mutex};
use tiny_http::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use decision_canvas::PlaygroundConfig;
use state::StudioState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match PlaygroundConfig::load_json(&path) {
            Ok(config) => {
                info!(%path, "loaded config");
                config
            }
            Err(e) => {
                error!(%path, "{e}");
                std::process::exit(1);
            }
        },
        None => PlaygroundConfig::default(),
    };

    let server = match Server::http(config.addr.as_str()) {
        Ok(server) => server,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind HTTP server: {e}");
            std::process::exit(1);
        }
    };

    info!("decision-canvas studio listening on http://{}", config.addr);

    let shared_state = Arc::new(Mutex::new(StudioState::new(config)));

    // One thread per request: the SSE handler blocks for as long as the
    // browser keeps the stream open.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
