use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::error::{PinwheelError, PinwheelResult};
use crate::palette::ColorPalette;

/// Flattening tolerance for arc outlines, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

/// Extra margin around a wedge's geometric bounds that anti-aliasing may touch.
const AA_PAD_PX: f64 = 2.0;

/// One arc-drawing task: a filled sector built from concentric arc strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeSpec {
    /// Wedge position in the palette.
    pub index: usize,
    /// Pinwheel center in canvas pixels.
    pub center: Point,
    /// Outer radius of the first (largest) arc.
    pub radius: i32,
    /// Fill color.
    pub color: Rgb8,
    /// Window start in degrees, clockwise from +x in image space.
    pub angle_start: u32,
    /// Window width in degrees.
    pub angle_span: u32,
    /// Width of every arc stroke in pixels.
    pub stroke_width: u32,
}

impl WedgeSpec {
    /// Window end in degrees (exclusive).
    pub fn angle_end(&self) -> u32 {
        self.angle_start + self.angle_span
    }

    /// Ring bounds `(inner, outer)` covered by the stroke at outer radius `r`.
    pub(crate) fn ring(&self, r: i32) -> (f64, f64) {
        let outer = f64::from(r);
        let inner = (outer - f64::from(self.stroke_width)).max(0.0);
        (inner, outer)
    }

    /// Integer canvas-pixel bounds the wedge may touch, clipped to `[0, canvas_side)`.
    ///
    /// Returns `None` when nothing would be drawn.
    pub fn pixel_bounds(&self, canvas_side: u32) -> Option<(u32, u32, u32, u32)> {
        if self.radius <= 0 || self.angle_span == 0 {
            return None;
        }
        let r = f64::from(self.radius);
        let start = f64::from(self.angle_start);
        let end = f64::from(self.angle_end());

        let mut rect = Rect::from_points(self.center, self.center);
        let mut include_angle = |deg: f64| {
            let a = deg.to_radians();
            rect = rect.union_pt(Point::new(
                self.center.x + r * a.cos(),
                self.center.y + r * a.sin(),
            ));
        };
        include_angle(start);
        include_angle(end);
        let mut cardinal = (start / 90.0).ceil() * 90.0;
        while cardinal < end {
            include_angle(cardinal);
            cardinal += 90.0;
        }

        let side = f64::from(canvas_side);
        let rect = rect.inflate(AA_PAD_PX, AA_PAD_PX);
        let x0 = rect.x0.floor().clamp(0.0, side);
        let y0 = rect.y0.floor().clamp(0.0, side);
        let x1 = rect.x1.ceil().clamp(0.0, side);
        let y1 = rect.y1.ceil().clamp(0.0, side);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Angular width given to each wedge (integer degrees).
pub fn wedge_span_degrees(palette_len: usize) -> u32 {
    if palette_len == 0 {
        return 0;
    }
    (360 / palette_len).min(360) as u32
}

/// Degrees of `[0, 360)` left uncovered after integer division of the circle.
pub fn uncovered_degrees(palette_len: usize) -> u32 {
    if palette_len == 0 {
        return 360;
    }
    360 - wedge_span_degrees(palette_len) * palette_len.min(360) as u32
}

/// Lay out one wedge per palette entry around `center`.
pub fn wedge_specs(palette: &ColorPalette, center: Point, radius: i32) -> Vec<WedgeSpec> {
    let span = wedge_span_degrees(palette.len());
    palette
        .iter()
        .enumerate()
        .map(|(index, color)| WedgeSpec {
            index,
            center,
            radius,
            color,
            angle_start: span * index as u32,
            angle_span: span,
            stroke_width: span,
        })
        .collect()
}

/// Offscreen rendering of a single wedge, positioned on the canvas by `origin`.
pub struct WedgeLayer {
    /// Wedge the layer was rendered from.
    pub index: usize,
    /// Top-left canvas pixel covered by the layer.
    pub origin: (u32, u32),
    /// Premultiplied RGBA8 pixels.
    pub pixmap: vello_cpu::Pixmap,
    /// Number of arc strokes issued.
    pub strokes: u32,
}

impl WedgeLayer {
    /// Layer width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    /// Layer height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.pixmap.height())
    }
}

/// Draws wedges as stacks of concentric, anti-aliased arc strokes.
#[derive(Clone, Copy, Debug)]
pub struct ArcRenderer {
    canvas_side: u32,
}

impl ArcRenderer {
    /// Renderer for a square canvas of `canvas_side` pixels.
    pub fn new(canvas_side: u32) -> PinwheelResult<Self> {
        if canvas_side == 0 || canvas_side > u32::from(u16::MAX) {
            return Err(PinwheelError::geometry(format!(
                "canvas side {canvas_side} must be in 1..={}",
                u16::MAX
            )));
        }
        Ok(Self { canvas_side })
    }

    /// Canvas side the renderer clips against.
    pub fn canvas_side(&self) -> u32 {
        self.canvas_side
    }

    /// Render `spec` into its own offscreen layer.
    ///
    /// Arcs are stroked from `spec.radius` down to 1, one pixel at a time, all spanning the
    /// same angular window. Returns `None` (and draws nothing) when the wedge has no area
    /// on the canvas.
    #[tracing::instrument(level = "trace", skip(self), fields(index = spec.index))]
    pub fn render(&self, spec: &WedgeSpec) -> PinwheelResult<Option<WedgeLayer>> {
        let Some((x0, y0, x1, y1)) = spec.pixel_bounds(self.canvas_side) else {
            return Ok(None);
        };
        let width_u16: u16 = (x1 - x0)
            .try_into()
            .map_err(|_| PinwheelError::geometry("wedge layer width exceeds u16"))?;
        let height_u16: u16 = (y1 - y0)
            .try_into()
            .map_err(|_| PinwheelError::geometry("wedge layer height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            -f64::from(x0),
            -f64::from(y0),
        )));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            spec.color.r,
            spec.color.g,
            spec.color.b,
            255,
        ));

        let center = point_to_cpu(spec.center);
        let start = f64::from(spec.angle_start).to_radians();
        let sweep = f64::from(spec.angle_span).to_radians();

        let mut strokes = 0u32;
        let mut radius = spec.radius;
        while radius > 0 {
            let (inner, outer) = spec.ring(radius);
            let mid = (inner + outer) / 2.0;
            let arc = vello_cpu::kurbo::Arc::new(
                center,
                vello_cpu::kurbo::Vec2::new(mid, mid),
                start,
                sweep,
                0.0,
            );
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(outer - inner)
                    .with_caps(vello_cpu::kurbo::Cap::Butt),
            );
            ctx.stroke_path(&arc.to_path(ARC_TOLERANCE));
            strokes += 1;
            radius -= 1;
        }

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(Some(WedgeLayer {
            index: spec.index,
            origin: (x0, y0),
            pixmap,
            strokes,
        }))
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/arc.rs"]
mod tests;
