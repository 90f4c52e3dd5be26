use std::path::Path;
use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::error::{PlaygroundError, Result};
use crate::optim::SgdConfig;
use crate::viewport::ViewportConfig;

/// Everything fixed at startup. Handed by value to each session; nothing
/// reads configuration from global state.
///
/// Every field has a default, so a config file only lists what it changes:
///
/// ```json
/// { "viewport": { "width": 800, "height": 800, "margin": 50, "cell_size": 20 }, "seed": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Studio listen address.
    pub addr: String,
    pub viewport: ViewportConfig,
    /// Delay between training passes.
    pub fit_period_ms: u64,
    pub trainer: SgdConfig,
    /// Seeds weight initialisation; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        PlaygroundConfig {
            addr: "127.0.0.1:7878".into(),
            viewport: ViewportConfig::default(),
            fit_period_ms: 100,
            trainer: SgdConfig::default(),
            seed: None,
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlaygroundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The viewport validates itself on deserialization; this covers the rest.
    pub fn validate(&self) -> Result<()> {
        if self.fit_period_ms == 0 {
            return Err(PlaygroundError::InvalidTrainer("fit period must be at least 1 ms".into()));
        }
        self.trainer.validate()
    }

    pub fn fit_period(&self) -> Duration {
        Duration::from_millis(self.fit_period_ms)
    }
}
