use crate::viewport::config::{Domain, ViewportConfig};

/// Affine map between a logical interval and a pixel interval.
///
/// The pixel range may be reversed (`pixel_from > pixel_to`), which is how
/// the Y axis is flipped. Values outside either interval extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapper {
    domain: Domain,
    pixel_from: f64,
    pixel_to: f64,
}

impl AxisMapper {
    pub fn new(domain: Domain, pixel_from: f64, pixel_to: f64) -> Self {
        AxisMapper { domain, pixel_from, pixel_to }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn to_pixel(&self, logical: f64) -> f64 {
        self.pixel_from + self.domain.normalize(logical) * (self.pixel_to - self.pixel_from)
    }

    pub fn to_logical(&self, pixel: f64) -> f64 {
        self.domain.denormalize((pixel - self.pixel_from) / (self.pixel_to - self.pixel_from))
    }
}

/// Both axes of one viewport. Pixel coordinates here are relative to the
/// interior's top-left corner (i.e. with the margin already removed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMapper {
    pub x: AxisMapper,
    pub y: AxisMapper,
    margin: f64,
    inner_width: f64,
    inner_height: f64,
}

impl PlaneMapper {
    pub fn new(viewport: &ViewportConfig, domain: Domain) -> Self {
        let inner_width = viewport.inner_width() as f64;
        let inner_height = viewport.inner_height() as f64;
        PlaneMapper {
            x: AxisMapper::new(domain, 0.0, inner_width),
            y: AxisMapper::new(domain, inner_height, 0.0),
            margin: viewport.margin() as f64,
            inner_width,
            inner_height,
        }
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.to_pixel(x), self.y.to_pixel(y))
    }

    pub fn to_logical(&self, pixel_x: f64, pixel_y: f64) -> (f64, f64) {
        (self.x.to_logical(pixel_x), self.y.to_logical(pixel_y))
    }

    /// Converts a click in whole-surface pixels (margin included) to logical
    /// coordinates. Returns `None` for clicks outside the interior.
    pub fn from_click(&self, surface_x: f64, surface_y: f64) -> Option<(f64, f64)> {
        let px = surface_x - self.margin;
        let py = surface_y - self.margin;
        let inside = (0.0..=self.inner_width).contains(&px) && (0.0..=self.inner_height).contains(&py);
        inside.then(|| self.to_logical(px, py))
    }
}
