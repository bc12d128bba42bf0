use crate::{
    foundation::core::{Point, Rgb8},
    foundation::error::{WalkaError, WalkaResult},
    render::{composite, surface::Surface},
};

/// One stroked line of the trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start point in canvas coordinates.
    pub from: Point,
    /// End point in canvas coordinates.
    pub to: Point,
    /// Opaque stroke color.
    pub color: Rgb8,
}

/// Strokes batches of segments with round caps and blends them onto a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentRasterizer {
    stroke_width: f64,
}

impl SegmentRasterizer {
    /// Rasterizer with the given stroke width in pixels.
    pub fn new(stroke_width: f64) -> WalkaResult<Self> {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(WalkaError::invalid_configuration(
                "stroke_width must be finite and > 0",
            ));
        }
        Ok(Self { stroke_width })
    }

    /// Stroke width in pixels.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Stroke `segments` in order into a scratch layer, then source-over it onto `target`.
    pub fn draw(&self, target: &mut Surface, segments: &[Segment]) -> WalkaResult<()> {
        if segments.is_empty() {
            return Ok(());
        }

        let (w, h) = target.size_u16();
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(self.stroke_width).with_caps(vello_cpu::kurbo::Cap::Round),
        );

        for seg in segments {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                seg.color.r,
                seg.color.g,
                seg.color.b,
                255,
            ));
            let mut path = vello_cpu::kurbo::BezPath::new();
            path.move_to(point_to_cpu(seg.from));
            path.line_to(point_to_cpu(seg.to));
            ctx.stroke_path(&path);
        }
        ctx.flush();

        let mut layer = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut layer);
        composite::over_in_place(target.data_mut(), layer.data_as_u8_slice())
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
