use std::fmt::Write as _;

use crate::render::shape::{Renderer, Shape, ShapeKind};
use crate::viewport::{PlaneMapper, ViewportConfig};

const TICKS: usize = 10;
const AXIS_COLOR: &str = "#333";

/// In-memory shape list that serializes to a standalone SVG document.
///
/// Shapes are kept in insertion order but emitted layer by layer
/// (mask, then fit line, then points) so tiles never hide the data.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    viewport: ViewportConfig,
    mapper: PlaneMapper,
    shapes: Vec<Shape>,
}

impl SvgCanvas {
    pub fn new(viewport: ViewportConfig, mapper: PlaneMapper) -> Self {
        SvgCanvas { viewport, mapper, shapes: Vec::new() }
    }

    pub fn to_svg(&self) -> String {
        let v = &self.viewport;
        let mut svg = String::with_capacity(256 + self.shapes.len() * 96);

        let _ = write!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" preserveAspectRatio="xMidYMid meet" viewBox="0 0 {w} {h}" style="background-color:#FFF">"##,
            w = v.width(),
            h = v.height(),
        );
        let _ = write!(svg, r#"<g transform="translate({m}, {m})">"#, m = v.margin());

        let _ = write!(
            svg,
            r#"<defs><clipPath id="interior"><rect width="{w}" height="{h}"/></clipPath></defs>"#,
            w = v.inner_width(),
            h = v.inner_height(),
        );

        for kind in [ShapeKind::MaskTile, ShapeKind::FitLine, ShapeKind::Datapoint] {
            // The fitted line spans the whole domain and may leave the interior.
            let clipped = kind == ShapeKind::FitLine;
            if clipped {
                svg.push_str(r#"<g clip-path="url(#interior)">"#);
            }
            for shape in self.shapes.iter().filter(|s| s.kind() == kind) {
                write_shape(&mut svg, shape);
            }
            if clipped {
                svg.push_str("</g>");
            }
        }

        self.write_axes(&mut svg);
        svg.push_str("</g></svg>");
        svg
    }

    fn write_axes(&self, svg: &mut String) {
        let inner_w = self.viewport.inner_width() as f64;
        let inner_h = self.viewport.inner_height() as f64;
        let domain = self.mapper.x.domain();
        let step = domain.span() / TICKS as f64;
        let decimals = (-step.log10().floor()).max(0.0) as usize;

        let _ = write!(
            svg,
            r#"<g class="axis" stroke="{c}" font-size="11" font-family="sans-serif"><line x1="0" y1="{h}" x2="{w}" y2="{h}"/><line x1="0" y1="0" x2="0" y2="{h}"/>"#,
            c = AXIS_COLOR, w = inner_w, h = inner_h,
        );

        for i in 0..=TICKS {
            let value = domain.lo + step * i as f64;
            let label = format!("{:.*}", decimals, value);

            let x = self.mapper.x.to_pixel(value);
            let _ = write!(
                svg,
                r#"<line x1="{x:.1}" y1="{h}" x2="{x:.1}" y2="{t}"/><text x="{x:.1}" y="{ty}" text-anchor="middle" stroke="none" fill="{c}">{label}</text>"#,
                h = inner_h, t = inner_h + 6.0, ty = inner_h + 20.0, c = AXIS_COLOR,
            );

            let y = self.mapper.y.to_pixel(value);
            let _ = write!(
                svg,
                r#"<line x1="-6" y1="{y:.1}" x2="0" y2="{y:.1}"/><text x="-9" y="{y:.1}" dy="0.32em" text-anchor="end" stroke="none" fill="{c}">{label}</text>"#,
                c = AXIS_COLOR,
            );
        }

        svg.push_str("</g>");
    }
}

fn write_shape(svg: &mut String, shape: &Shape) {
    let _ = match shape {
        Shape::Tile { x, y, size, fill, opacity } => write!(
            svg,
            r#"<rect class="mask" x="{x}" y="{y}" width="{size}" height="{size}" stroke="transparent" fill="{fill}" style="opacity:{opacity}"/>"#,
        ),
        Shape::Line { x1, y1, x2, y2, stroke } => write!(
            svg,
            r#"<line class="fit-line" x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="3"/>"#,
        ),
        Shape::Circle { cx, cy, r, fill } => write!(
            svg,
            r#"<circle class="point" cx="{cx:.2}" cy="{cy:.2}" r="{r}" style="fill:{fill}"/>"#,
        ),
    };
}

impl Renderer for SvgCanvas {
    fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    fn remove_all(&mut self, kind: ShapeKind) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.kind() != kind);
        before - self.shapes.len()
    }

    fn count(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }
}
