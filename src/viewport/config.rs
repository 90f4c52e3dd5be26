use serde::{Serialize, Deserialize};

use crate::error::{PlaygroundError, Result};

/// Pixel geometry of the drawing surface.
///
/// Fields are private and there are no setters: once built (or deserialized,
/// which runs the same validation) a viewport is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport", into = "RawViewport")]
pub struct ViewportConfig {
    width: u32,
    height: u32,
    margin: u32,
    cell_size: u32,
}

impl ViewportConfig {
    pub fn new(width: u32, height: u32, margin: u32, cell_size: u32) -> Result<Self> {
        let interior = |extent: u32, name: &str| -> Result<u32> {
            extent
                .checked_sub(margin.saturating_mul(2))
                .filter(|&inner| inner > 0)
                .ok_or_else(|| PlaygroundError::InvalidViewport(
                    format!("{name} {extent} leaves no interior inside a margin of {margin}")
                ))
        };
        let inner_width = interior(width, "width")?;
        let inner_height = interior(height, "height")?;

        if cell_size == 0 {
            return Err(PlaygroundError::InvalidViewport("cell size must be positive".into()));
        }
        if cell_size > inner_width.min(inner_height) {
            return Err(PlaygroundError::InvalidViewport(
                format!("cell size {cell_size} exceeds the {inner_width}x{inner_height} interior")
            ));
        }

        Ok(ViewportConfig { width, height, margin, cell_size })
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn margin(&self) -> u32 { self.margin }
    pub fn cell_size(&self) -> u32 { self.cell_size }

    pub fn inner_width(&self) -> u32 {
        self.width - 2 * self.margin
    }

    pub fn inner_height(&self) -> u32 {
        self.height - 2 * self.margin
    }

    /// Lattice rows; a trailing partial cell is not sampled.
    pub fn rows(&self) -> usize {
        (self.inner_height() / self.cell_size) as usize
    }

    pub fn cols(&self) -> usize {
        (self.inner_width() / self.cell_size) as usize
    }

    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig { width: 600, height: 600, margin: 50, cell_size: 10 }
    }
}

#[derive(Serialize, Deserialize)]
struct RawViewport {
    width: u32,
    height: u32,
    margin: u32,
    cell_size: u32,
}

impl TryFrom<RawViewport> for ViewportConfig {
    type Error = PlaygroundError;

    fn try_from(raw: RawViewport) -> Result<Self> {
        ViewportConfig::new(raw.width, raw.height, raw.margin, raw.cell_size)
    }
}

impl From<ViewportConfig> for RawViewport {
    fn from(v: ViewportConfig) -> Self {
        RawViewport { width: v.width, height: v.height, margin: v.margin, cell_size: v.cell_size }
    }
}

/// Closed interval of logical units shown along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub lo: f64,
    pub hi: f64,
}

impl Domain {
    pub const UNIT: Domain = Domain { lo: 0.0, hi: 1.0 };
    pub const TEN: Domain = Domain { lo: 0.0, hi: 10.0 };

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Maps `value` to [0, 1] over this domain (no clamping).
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.lo) / self.span()
    }

    pub fn denormalize(&self, unit: f64) -> f64 {
        self.lo + unit * self.span()
    }
}
