use thiserror::Error;

use crate::playground::demo::Demo;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),
    #[error("invalid trainer settings: {0}")]
    InvalidTrainer(String),
    #[error("fitting is already running")]
    AlreadyRunning,
    #[error("{action} is not available in the {demo} demo")]
    Unsupported { action: &'static str, demo: Demo },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to spawn fit loop thread: {0}")]
    Spawn(#[source] std::io::Error),
}

pub type Result<T, E = PlaygroundError> = std::result::Result<T, E>;
