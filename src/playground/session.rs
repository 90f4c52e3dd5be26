use std::ops::ControlFlow;
use std::sync::mpsc::{SyncSender, TrySendError};

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::classify::{ClassifierModel, LineModel, LineParams};
use crate::data::{ClassLabel, DataSource, DatapointStore, Point};
use crate::error::{PlaygroundError, Result};
use crate::lattice::GridSampler;
use crate::network::{Architecture, Network, NetworkSpec};
use crate::playground::config::PlaygroundConfig;
use crate::playground::demo::Demo;
use crate::playground::events::{IgnoreReason, Outcome, UiEvent};
use crate::render::shape::{class_color, LINE_COLOR, POINT_RADIUS, UNLABELED_COLOR};
use crate::render::{MaskRenderer, Renderer, Shape, ShapeKind, SvgCanvas};
use crate::train::{run_pass, FitState, PassStats, Trainer};
use crate::viewport::PlaneMapper;

/// Sent to observers after every training pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassReport {
    pub demo: Demo,
    #[serde(flatten)]
    pub stats: PassStats,
    /// Fitted line, linear demo only.
    pub line: Option<LineParams>,
}

enum DemoModel {
    Line(LineModel<Trainer>),
    Classifier(ClassifierModel<Trainer>),
}

/// Model, view and controller for one demo.
///
/// The store and the canvas's point marks are always mutated together, so
/// the drawing never disagrees with the training data.
pub struct Session {
    demo: Demo,
    config: PlaygroundConfig,
    mapper: PlaneMapper,
    store: DatapointStore,
    model: DemoModel,
    architecture: Architecture,
    canvas: SvgCanvas,
    mask: MaskRenderer,
    current_class: ClassLabel,
    fit: FitState,
    /// Runs started so far; identifies the current run to its fit loop.
    fit_runs: u64,
    last_report: Option<PassReport>,
    rng: StdRng,
}

impl Session {
    pub fn new(demo: Demo, config: PlaygroundConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mapper = PlaneMapper::new(&config.viewport, demo.domain());
        let architecture = Architecture::default();
        let model = build_model(demo, architecture, &config, &mut rng);

        Session {
            demo,
            canvas: SvgCanvas::new(config.viewport, mapper),
            config,
            mapper,
            store: DatapointStore::new(),
            model,
            architecture,
            mask: MaskRenderer,
            current_class: ClassLabel::default(),
            fit: FitState::Idle,
            fit_runs: 0,
            last_report: None,
            rng,
        }
    }

    pub fn demo(&self) -> Demo { self.demo }
    pub fn config(&self) -> &PlaygroundConfig { &self.config }
    pub fn mapper(&self) -> &PlaneMapper { &self.mapper }
    pub fn points(&self) -> &[Point] { self.store.points() }
    pub fn architecture(&self) -> Architecture { self.architecture }
    pub fn current_class(&self) -> ClassLabel { self.current_class }
    pub fn canvas(&self) -> &SvgCanvas { &self.canvas }
    pub fn last_report(&self) -> Option<&PassReport> { self.last_report.as_ref() }

    pub fn is_fitting(&self) -> bool {
        self.fit.is_running()
    }

    /// Id of the current fitting run, `None` while idle. A stopped run's id
    /// is never reused.
    pub fn fit_run(&self) -> Option<u64> {
        self.fit.is_running().then_some(self.fit_runs)
    }

    pub fn svg(&self) -> String {
        self.canvas.to_svg()
    }

    pub fn handle(&mut self, event: UiEvent) -> Result<Outcome> {
        let locked = self.fit.is_running();

        let outcome = match event {
            UiEvent::PointAdded { .. }
            | UiEvent::ClassChanged(_)
            | UiEvent::ClearRequested
            | UiEvent::ArchitectureChanged(_) if locked => Outcome::Ignored(IgnoreReason::InputLocked),

            UiEvent::PointAdded { pixel_x, pixel_y } => self.add_point(pixel_x, pixel_y),

            UiEvent::ClassChanged(label) => {
                self.require_classifier("class selection")?;
                self.current_class = label;
                Outcome::ClassChanged(label)
            }

            UiEvent::ClearRequested => {
                let removed = self.canvas.remove_all(ShapeKind::Datapoint);
                self.store.clear();
                Outcome::Cleared { removed }
            }

            UiEvent::StartFitRequested => {
                self.fit.start()?;
                self.fit_runs += 1;
                info!(demo = %self.demo, run = self.fit_runs, points = self.store.len(), "fitting started");
                Outcome::FitStarted
            }

            UiEvent::StopFitRequested => {
                if self.fit.stop() {
                    info!(demo = %self.demo, "fitting stopped");
                    Outcome::FitStopped
                } else {
                    Outcome::Ignored(IgnoreReason::NotRunning)
                }
            }

            UiEvent::ArchitectureChanged(arch) => {
                if self.demo != Demo::Neural {
                    return Err(PlaygroundError::Unsupported { action: "architecture change", demo: self.demo });
                }
                self.architecture = arch;
                self.model = build_model(self.demo, arch, &self.config, &mut self.rng);
                // Tiles from the previous network no longer describe the model.
                self.mask.clear(&mut self.canvas);
                info!(architecture = %arch, "network rebuilt");
                Outcome::ArchitectureChanged(arch)
            }
        };

        debug!(demo = %self.demo, ?event, ?outcome, "ui event handled");
        Ok(outcome)
    }

    /// One full training pass over the stored points, then a redraw.
    ///
    /// Also usable while idle; the pass number then continues from the last
    /// report.
    pub fn fit_pass(&mut self) -> PassReport {
        let pass = self.fit.next_pass()
            .unwrap_or_else(|| self.last_report.as_ref().map_or(1, |r| r.stats.pass + 1));
        let reporting = self.demo.reporting();
        let points = self.store.points();

        let stats = match &mut self.model {
            DemoModel::Line(model) => run_pass(model, points, reporting, pass),
            DemoModel::Classifier(model) => run_pass(model, points, reporting, pass),
        };

        let line = self.redraw();
        debug!(demo = %self.demo, pass, examples = stats.examples, mean_loss = ?stats.mean_loss, "training pass");

        let report = PassReport { demo: self.demo, stats, line };
        self.last_report = Some(report.clone());
        report
    }

    /// One fit-loop tick on behalf of run `run`: a pass, then its report
    /// offered to `observer` without blocking.
    ///
    /// Breaks without training once `run` is no longer the current run, and
    /// after the pass if the observer is gone. A full observer only loses
    /// this report.
    pub fn fit_tick(&mut self, run: u64, observer: &SyncSender<PassReport>) -> ControlFlow<()> {
        if self.fit_run() != Some(run) {
            debug!(demo = %self.demo, run, "fit loop outlived its run");
            return ControlFlow::Break(());
        }

        let report = self.fit_pass();
        match observer.try_send(report) {
            Ok(()) => ControlFlow::Continue(()),
            Err(TrySendError::Full(report)) => {
                debug!(demo = %self.demo, pass = report.stats.pass, "observer is behind; report dropped");
                ControlFlow::Continue(())
            }
            Err(TrySendError::Disconnected(_)) => ControlFlow::Break(()),
        }
    }

    /// Labels for arbitrary logical coordinates; `None` for the linear demo.
    pub fn classify(&mut self, coords: &[(f64, f64)]) -> Option<Vec<ClassLabel>> {
        match &mut self.model {
            DemoModel::Classifier(model) => Some(model.classify(coords)),
            DemoModel::Line(_) => None,
        }
    }

    pub fn line_params(&mut self) -> Option<LineParams> {
        match &mut self.model {
            DemoModel::Line(model) => Some(model.params()),
            DemoModel::Classifier(_) => None,
        }
    }

    fn add_point(&mut self, pixel_x: f64, pixel_y: f64) -> Outcome {
        let Some((x, y)) = self.mapper.from_click(pixel_x, pixel_y) else {
            return Outcome::Ignored(IgnoreReason::OutsideViewport);
        };

        let point = if self.demo.is_classifier() {
            Point::labeled(x, y, self.current_class)
        } else {
            Point::new(x, y)
        };

        let (cx, cy) = self.mapper.to_pixel(point.x, point.y);
        let fill = point.label.map_or(UNLABELED_COLOR, class_color);
        self.canvas.append(Shape::Circle { cx, cy, r: POINT_RADIUS, fill });
        self.store.add(point);

        Outcome::PointStored(point)
    }

    /// Redraws the model overlay; returns the line for the linear demo.
    fn redraw(&mut self) -> Option<LineParams> {
        match &mut self.model {
            DemoModel::Line(model) => {
                let params = model.params();
                let domain = self.demo.domain();
                let (x1, y1) = self.mapper.to_pixel(domain.lo, params.at(domain.lo));
                let (x2, y2) = self.mapper.to_pixel(domain.hi, params.at(domain.hi));
                self.canvas.remove_all(ShapeKind::FitLine);
                self.canvas.append(Shape::Line { x1, y1, x2, y2, stroke: LINE_COLOR });
                Some(params)
            }
            DemoModel::Classifier(model) => {
                let lattice = GridSampler::generate(&self.config.viewport, &self.mapper);
                let labels = model.classify(&lattice.logical_coords());
                self.mask.redraw(&mut self.canvas, &lattice, &labels);
                None
            }
        }
    }

    fn require_classifier(&self, action: &'static str) -> Result<()> {
        if self.demo.is_classifier() {
            Ok(())
        } else {
            Err(PlaygroundError::Unsupported { action, demo: self.demo })
        }
    }
}

fn build_model(demo: Demo, architecture: Architecture, config: &PlaygroundConfig, rng: &mut StdRng) -> DemoModel {
    let spec = match demo {
        Demo::Linear   => NetworkSpec::line(),
        Demo::Logistic => NetworkSpec::logistic(),
        Demo::Neural   => architecture.spec(),
    };
    let trainer = Trainer::new(Network::from_spec(&spec, rng), spec.loss, &config.trainer);

    match demo {
        Demo::Linear => DemoModel::Line(LineModel::new(trainer, demo.domain())),
        Demo::Logistic | Demo::Neural => DemoModel::Classifier(ClassifierModel::new(trainer, demo.domain())),
    }
}
