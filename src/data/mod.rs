pub mod point;
pub mod store;

pub use point::{ClassLabel, Point};
pub use store::{DataSource, DatapointStore};
