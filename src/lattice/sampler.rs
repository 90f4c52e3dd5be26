use crate::viewport::{PlaneMapper, ViewportConfig};

/// One mask tile, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell {
    pub row: usize,
    pub col: usize,
    /// Interior pixel coordinates of the anchor.
    pub pixel_x: f64,
    pub pixel_y: f64,
    /// Logical coordinates of the same anchor.
    pub logical_x: f64,
    pub logical_y: f64,
}

/// Row-major sequence of cells covering the viewport interior.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    cells: Vec<LatticeCell>,
    cell_size: u32,
}

impl Lattice {
    pub fn cells(&self) -> &[LatticeCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Logical anchors in lattice order, ready for classification.
    pub fn logical_coords(&self) -> Vec<(f64, f64)> {
        self.cells.iter().map(|c| (c.logical_x, c.logical_y)).collect()
    }
}

/// Builds the sampling lattice for a viewport. Stateless and deterministic.
pub struct GridSampler;

impl GridSampler {
    /// Rows top to bottom, columns left to right. Each anchor is the cell's
    /// top-left corner, not its centre.
    pub fn generate(viewport: &ViewportConfig, mapper: &PlaneMapper) -> Lattice {
        let size = viewport.cell_size();
        let (rows, cols) = (viewport.rows(), viewport.cols());

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let pixel_x = (col as u32 * size) as f64;
                let pixel_y = (row as u32 * size) as f64;
                let (logical_x, logical_y) = mapper.to_logical(pixel_x, pixel_y);
                cells.push(LatticeCell { row, col, pixel_x, pixel_y, logical_x, logical_y });
            }
        }

        Lattice { cells, cell_size: size }
    }
}
