use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, SeedableRng};

use decision_canvas::train::{run_pass, LossReporting};
use decision_canvas::{
    ClassLabel, ClassifierModel, DataSource, DatapointStore, Domain, LineModel, Network,
    NetworkSpec, Point, SgdConfig, Target, Trainable, Trainer,
};

fn fast_config() -> SgdConfig {
    SgdConfig { learning_rate: 0.3, momentum: 0.5, batch_size: 1, l2_decay: 0.0 }
}

fn trainer(spec: &NetworkSpec, seed: u64) -> Trainer {
    let mut rng = StdRng::seed_from_u64(seed);
    Trainer::new(Network::from_spec(spec, &mut rng), spec.loss, &fast_config())
}

/// Fixed scores, for checking label selection in isolation.
struct Constant(Vec<f64>);

impl Trainable for Constant {
    fn forward(&mut self, _input: &[f64]) -> Vec<f64> {
        self.0.clone()
    }
    fn train_example(&mut self, _input: &[f64], _target: &Target) -> f64 {
        0.0
    }
}

/// `y' = slope·x' + intercept` on normalized inputs.
struct Affine {
    slope: f64,
    intercept: f64,
}

impl Trainable for Affine {
    fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        vec![self.slope * input[0] + self.intercept]
    }
    fn train_example(&mut self, _input: &[f64], _target: &Target) -> f64 {
        0.0
    }
}

#[test]
fn empty_query_yields_empty_labels() {
    let mut model = ClassifierModel::new(trainer(&NetworkSpec::logistic(), 1), Domain::TEN);
    assert!(model.classify(&[]).is_empty());
}

#[test]
fn untrained_model_labels_every_coordinate() {
    let mut model = ClassifierModel::new(trainer(&NetworkSpec::logistic(), 2), Domain::TEN);
    let coords: Vec<(f64, f64)> = (0..37).map(|i| (i as f64 / 4.0, 10.0 - i as f64 / 4.0)).collect();
    assert_eq!(model.classify(&coords).len(), 37);
}

#[test]
fn tied_scores_go_to_red() {
    let mut model = ClassifierModel::new(Constant(vec![0.5, 0.5]), Domain::UNIT);
    assert_eq!(model.classify(&[(0.1, 0.9), (0.7, 0.2)]), vec![ClassLabel::Red; 2]);

    let mut model = ClassifierModel::new(Constant(vec![0.4, 0.6]), Domain::UNIT);
    assert_eq!(model.classify(&[(0.5, 0.5)]), vec![ClassLabel::Green]);
}

#[test]
#[should_panic(expected = "one score per class")]
fn classifier_rejects_single_output_predictor() {
    let mut model = ClassifierModel::new(Constant(vec![0.7]), Domain::UNIT);
    model.classify(&[(0.5, 0.5)]);
}

#[test]
fn line_params_come_from_predictor_outputs() {
    let mut model = LineModel::new(Affine { slope: 0.5, intercept: 0.2 }, Domain::TEN);
    let params = model.params();
    assert_abs_diff_eq!(params.slope, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(params.intercept, 2.0, epsilon = 1e-12);

    // Offset domain: x = 2 maps to x' = 0, so y(2) = 2 + 2·0.2.
    let mut model = LineModel::new(Affine { slope: 0.5, intercept: 0.2 }, Domain { lo: 2.0, hi: 4.0 });
    let params = model.params();
    assert_abs_diff_eq!(params.slope, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(params.at(2.0), 2.4, epsilon = 1e-12);
    assert_abs_diff_eq!(params.at(4.0), 3.4, epsilon = 1e-12);
}

#[test]
fn logistic_model_separates_two_clusters() {
    let mut store = DatapointStore::new();
    for &(x, y) in &[(1.0, 1.5), (2.0, 1.0), (1.5, 2.5), (2.5, 2.0)] {
        store.add(Point::labeled(x, y, ClassLabel::Red));
    }
    for &(x, y) in &[(8.0, 8.5), (7.5, 9.0), (9.0, 7.5), (8.5, 8.0)] {
        store.add(Point::labeled(x, y, ClassLabel::Green));
    }

    let mut model = ClassifierModel::new(trainer(&NetworkSpec::logistic(), 3), Domain::TEN);
    let first = run_pass(&mut model, store.points(), LossReporting::Mean, 1);
    let mut last = first.clone();
    for pass in 2..=500 {
        last = run_pass(&mut model, store.points(), LossReporting::Mean, pass);
    }

    assert_eq!(last.examples, 8);
    assert!(last.mean_loss.unwrap() < first.mean_loss.unwrap());
    assert_eq!(model.classify(&[(2.0, 2.0), (8.0, 8.0)]), vec![ClassLabel::Red, ClassLabel::Green]);
}

#[test]
fn unlabeled_points_are_skipped_by_classifiers() {
    let mut model = ClassifierModel::new(trainer(&NetworkSpec::logistic(), 4), Domain::TEN);
    let points = [Point::new(1.0, 1.0), Point::labeled(2.0, 2.0, ClassLabel::Green)];
    let stats = run_pass(&mut model, &points, LossReporting::Mean, 1);
    assert_eq!(stats.examples, 1);
}

#[test]
fn line_model_recovers_slope_and_intercept() {
    let points: Vec<Point> = (0..=10).map(|i| {
        let x = i as f64;
        Point::new(x, 0.5 * x + 2.0)
    }).collect();

    let mut model = LineModel::new(trainer(&NetworkSpec::line(), 5), Domain::TEN);
    for pass in 1..=2000 {
        run_pass(&mut model, &points, LossReporting::Mean, pass);
    }

    let params = model.params();
    assert_abs_diff_eq!(params.slope, 0.5, epsilon = 0.05);
    assert_abs_diff_eq!(params.intercept, 2.0, epsilon = 0.05);
}

#[test]
fn silent_reporting_hides_loss_but_trains() {
    let points = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let mut model = LineModel::new(trainer(&NetworkSpec::line(), 6), Domain::TEN);
    let before = model.params();
    let stats = run_pass(&mut model, &points, LossReporting::Silent, 1);

    assert_eq!(stats.examples, 2);
    assert_eq!(stats.mean_loss, None);
    assert_ne!(model.params(), before);
}

#[test]
fn empty_pass_reports_no_loss() {
    let mut model = LineModel::new(trainer(&NetworkSpec::line(), 7), Domain::TEN);
    let stats = run_pass(&mut model, &[], LossReporting::Mean, 3);
    assert_eq!(stats.pass, 3);
    assert_eq!(stats.examples, 0);
    assert_eq!(stats.mean_loss, None);
}

#[test]
fn store_clear_then_add() {
    let mut store = DatapointStore::new();
    store.clear();
    assert!(store.is_empty());
    store.add(Point::labeled(3.0, 4.0, ClassLabel::Green));
    assert_eq!(store.len(), 1);
    assert_eq!(store.points()[0], Point::labeled(3.0, 4.0, ClassLabel::Green));
}
