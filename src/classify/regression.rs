use serde::{Serialize, Deserialize};

use crate::data::point::Point;
use crate::train::{Learner, Target, Trainable};
use crate::viewport::Domain;

/// `y = slope·x + intercept` in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LineParams {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Simple linear regression over a single-input, single-output predictor.
///
/// Both axes are normalized by the domain before training, so the predictor
/// learns `y' = m'·x' + b'`. `params()` recovers `m'` and `b'` from two
/// forward passes and converts them back to logical units.
pub struct LineModel<P> {
    predictor: P,
    domain: Domain,
}

impl<P: Trainable> LineModel<P> {
    pub fn new(predictor: P, domain: Domain) -> Self {
        LineModel { predictor, domain }
    }

    /// Reads the current line off the predictor's outputs at x' = 0 and x' = 1.
    /// Takes `&mut self` because inference does.
    pub fn params(&mut self) -> LineParams {
        let b = self.predictor.forward(&[0.0])[0];
        let m = self.predictor.forward(&[1.0])[0] - b;
        let Domain { lo, .. } = self.domain;
        // y = lo + span·(m·(x - lo)/span + b)
        LineParams {
            slope: m,
            intercept: lo - m * lo + self.domain.span() * b,
        }
    }
}

impl<P: Trainable> Learner for LineModel<P> {
    fn learn(&mut self, point: &Point) -> Option<f64> {
        let input = [self.domain.normalize(point.x)];
        let target = Target::Value(vec![self.domain.normalize(point.y)]);
        Some(self.predictor.train_example(&input, &target))
    }
}
