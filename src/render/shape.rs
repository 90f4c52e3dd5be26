use crate::data::point::ClassLabel;

pub const POINT_RADIUS: f64 = 10.0;
pub const MASK_OPACITY: f64 = 0.25;
pub const LINE_COLOR: &str = "#2B2D42";
pub const UNLABELED_COLOR: &str = "#3A86FF";

/// Fill color for a class; shared by points and mask tiles.
pub fn class_color(label: ClassLabel) -> &'static str {
    match label {
        ClassLabel::Red   => "#EF233C",
        ClassLabel::Green => "#70E000",
    }
}

/// Kinds of marks a renderer can hold; `remove_all` works per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    MaskTile,
    FitLine,
    Datapoint,
}

/// A drawable mark in interior pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Tile { x: f64, y: f64, size: f64, fill: &'static str, opacity: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, stroke: &'static str },
    Circle { cx: f64, cy: f64, r: f64, fill: &'static str },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Tile { .. }   => ShapeKind::MaskTile,
            Shape::Line { .. }   => ShapeKind::FitLine,
            Shape::Circle { .. } => ShapeKind::Datapoint,
        }
    }
}

/// The drawing surface the playground renders onto.
pub trait Renderer {
    fn append(&mut self, shape: Shape);

    /// Removes every shape of `kind` and returns how many were removed.
    fn remove_all(&mut self, kind: ShapeKind) -> usize;

    fn count(&self, kind: ShapeKind) -> usize;
}
