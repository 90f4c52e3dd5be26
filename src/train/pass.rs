use std::time::Instant;

use serde::{Serialize, Deserialize};

use crate::data::point::Point;

/// Whether a pass reports its aggregate loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReporting {
    /// Report `total_loss / examples`.
    Mean,
    /// Plain-labels variant: train, but report no loss.
    Silent,
}

/// Anything that can learn from a stored datapoint.
pub trait Learner {
    /// Performs one update for `point` and returns its loss, or `None` if
    /// the point cannot be used by this model (e.g. a classifier given an
    /// unlabeled point).
    fn learn(&mut self, point: &Point) -> Option<f64>;
}

/// Statistics for one completed training pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassStats {
    /// 1-based pass number since fitting started.
    pub pass: u64,
    /// Examples that contributed an update.
    pub examples: usize,
    /// Mean loss over `examples`; `None` when reporting is silent or no
    /// example was usable.
    pub mean_loss: Option<f64>,
    pub elapsed_ms: u64,
}

/// Feeds every point, in insertion order, to `learner` exactly once.
pub fn run_pass<L: Learner + ?Sized>(
    learner: &mut L,
    points: &[Point],
    reporting: LossReporting,
    pass: u64,
) -> PassStats {
    let started = Instant::now();
    let mut total_loss = 0.0;
    let mut examples = 0usize;

    for point in points {
        if let Some(loss) = learner.learn(point) {
            total_loss += loss;
            examples += 1;
        }
    }

    let mean_loss = match reporting {
        LossReporting::Mean if examples > 0 => Some(total_loss / examples as f64),
        _ => None,
    };

    PassStats {
        pass,
        examples,
        mean_loss,
        elapsed_ms: started.elapsed().as_millis() as u64,
    }
}
