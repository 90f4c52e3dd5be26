use crate::data::point::{ClassLabel, Point};
use crate::train::{Learner, Target, Trainable};
use crate::viewport::Domain;

/// Two-class model over logical (x, y) coordinates.
///
/// Inputs are packed as `[x, y]` normalized to [0, 1] by the demo domain;
/// the predictor's first two outputs are read as (red, green) scores.
pub struct ClassifierModel<P> {
    predictor: P,
    domain: Domain,
}

impl<P: Trainable> ClassifierModel<P> {
    pub fn new(predictor: P, domain: Domain) -> Self {
        ClassifierModel { predictor, domain }
    }

    fn pack(&self, x: f64, y: f64) -> [f64; 2] {
        [self.domain.normalize(x), self.domain.normalize(y)]
    }

    /// One label per coordinate, same order. Works on an untrained predictor.
    ///
    /// # Panics
    /// Panics if the predictor does not produce exactly two scores.
    pub fn classify(&mut self, coords: &[(f64, f64)]) -> Vec<ClassLabel> {
        coords.iter()
            .map(|&(x, y)| {
                let input = self.pack(x, y);
                let scores = self.predictor.forward(&input);
                assert_eq!(scores.len(), 2, "classifier predictor must output one score per class");
                ClassLabel::from_scores(scores[0], scores[1])
            })
            .collect()
    }
}

impl<P: Trainable> Learner for ClassifierModel<P> {
    fn learn(&mut self, point: &Point) -> Option<f64> {
        let label = point.label?;
        let input = self.pack(point.x, point.y);
        Some(self.predictor.train_example(&input, &Target::Class(label.index())))
    }
}
