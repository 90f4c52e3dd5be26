pub mod config;
pub mod scale;

pub use config::{Domain, ViewportConfig};
pub use scale::{AxisMapper, PlaneMapper};
