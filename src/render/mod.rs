pub mod shape;
pub mod mask;
pub mod svg;

pub use shape::{class_color, Renderer, Shape, ShapeKind};
pub use mask::MaskRenderer;
pub use svg::SvgCanvas;
