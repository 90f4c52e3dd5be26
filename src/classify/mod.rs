pub mod classifier;
pub mod regression;

pub use classifier::ClassifierModel;
pub use regression::{LineModel, LineParams};
