pub mod config;
pub mod demo;
pub mod events;
pub mod session;

pub use config::PlaygroundConfig;
pub use demo::Demo;
pub use events::{IgnoreReason, Outcome, UiEvent};
pub use session::{PassReport, Session};
