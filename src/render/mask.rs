use crate::data::point::ClassLabel;
use crate::lattice::Lattice;
use crate::render::shape::{class_color, Renderer, Shape, ShapeKind, MASK_OPACITY};

/// Draws the decision-boundary overlay: one translucent tile per lattice cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskRenderer;

impl MaskRenderer {
    /// # Panics
    /// Panics if `labels` is not aligned 1:1 with `lattice`.
    pub fn render<R: Renderer + ?Sized>(&self, surface: &mut R, lattice: &Lattice, labels: &[ClassLabel]) {
        assert_eq!(
            labels.len(),
            lattice.len(),
            "mask labels must align 1:1 with lattice cells"
        );

        let size = lattice.cell_size() as f64;
        for (cell, &label) in lattice.cells().iter().zip(labels) {
            surface.append(Shape::Tile {
                x: cell.pixel_x,
                y: cell.pixel_y,
                size,
                fill: class_color(label),
                opacity: MASK_OPACITY,
            });
        }
    }

    /// Removes every mask tile. Safe to call when nothing is drawn.
    pub fn clear<R: Renderer + ?Sized>(&self, surface: &mut R) -> usize {
        surface.remove_all(ShapeKind::MaskTile)
    }

    /// `clear` then `render`, so stale tiles never accumulate.
    pub fn redraw<R: Renderer + ?Sized>(&self, surface: &mut R, lattice: &Lattice, labels: &[ClassLabel]) {
        self.clear(surface);
        self.render(surface, lattice, labels);
    }
}
