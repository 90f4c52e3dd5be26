pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod viewport;
pub mod data;
pub mod lattice;
pub mod render;
pub mod classify;
pub mod playground;

// Convenience re-exports
pub use error::{PlaygroundError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{Architecture, Network, NetworkSpec};
pub use loss::LossType;
pub use optim::{Sgd, SgdConfig};
pub use train::{FitHandle, FitLoop, FitState, LossReporting, PassStats, Target, Trainable, Trainer};
pub use viewport::{Domain, PlaneMapper, ViewportConfig};
pub use data::{ClassLabel, DataSource, DatapointStore, Point};
pub use lattice::{GridSampler, Lattice};
pub use render::{MaskRenderer, Renderer, Shape, ShapeKind, SvgCanvas};
pub use classify::{ClassifierModel, LineModel, LineParams};
pub use playground::{Demo, Outcome, PassReport, PlaygroundConfig, Session, UiEvent};
