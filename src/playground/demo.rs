use std::fmt;

use serde::{Serialize, Deserialize};

use crate::train::LossReporting;
use crate::viewport::Domain;

/// The three teaching demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Demo {
    Linear,
    Logistic,
    Neural,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Linear, Demo::Logistic, Demo::Neural];

    /// URL path segment.
    pub fn slug(self) -> &'static str {
        match self {
            Demo::Linear   => "linear",
            Demo::Logistic => "logistic",
            Demo::Neural   => "neural",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Demo::ALL.into_iter().find(|d| d.slug() == slug)
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Linear   => "Linear Regression",
            Demo::Logistic => "Logistic Regression",
            Demo::Neural   => "Neural Network",
        }
    }

    pub fn domain(self) -> Domain {
        match self {
            Demo::Linear | Demo::Logistic => Domain::TEN,
            Demo::Neural => Domain::UNIT,
        }
    }

    pub fn is_classifier(self) -> bool {
        !matches!(self, Demo::Linear)
    }

    /// The neural demo trains on plain labels and reports no loss.
    pub fn reporting(self) -> LossReporting {
        match self {
            Demo::Neural => LossReporting::Silent,
            Demo::Linear | Demo::Logistic => LossReporting::Mean,
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_ascii_lowercase())
    }
}
