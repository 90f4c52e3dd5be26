use crate::data::point::Point;

/// Owner of the accumulated datapoints.
pub trait DataSource {
    fn add(&mut self, point: Point);
    fn clear(&mut self);
    fn points(&self) -> &[Point];

    fn len(&self) -> usize {
        self.points().len()
    }

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

/// Insertion-ordered, unbounded list of points. Nothing is deduplicated or
/// range-checked.
#[derive(Debug, Clone, Default)]
pub struct DatapointStore {
    points: Vec<Point>,
}

impl DatapointStore {
    pub fn new() -> Self {
        DatapointStore::default()
    }
}

impl DataSource for DatapointStore {
    fn add(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Swaps in a fresh sequence; the old allocation is dropped, not truncated.
    fn clear(&mut self) {
        self.points = Vec::new();
    }

    fn points(&self) -> &[Point] {
        &self.points
    }
}
