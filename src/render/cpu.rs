use kurbo::{PathEl, Shape};

use crate::{
    foundation::core::{BezPath, Point},
    foundation::error::{GlyphcycleError, GlyphcycleResult},
    render::scene::{FrameScene, FrameSink, SceneStyle},
};

// Circles smaller than this are invisible at any line width worth drawing.
const MIN_CIRCLE_RADIUS_PX: f64 = 0.25;
const SHAPE_TOLERANCE: f64 = 0.1;

/// One rendered frame in row-major RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, four per pixel.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// CPU rasterizer for [`FrameScene`]s built on `vello_cpu`.
#[derive(Clone, Debug, Default)]
pub struct CpuSink {
    style: SceneStyle,
}

impl CpuSink {
    /// Sink drawing with `style`.
    pub fn new(style: SceneStyle) -> GlyphcycleResult<Self> {
        if !style.line_width_px.is_finite() || style.line_width_px <= 0.0 {
            return Err(GlyphcycleError::validation(
                "line_width_px must be finite and > 0",
            ));
        }
        Ok(Self { style })
    }

    /// Style in use.
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }
}

impl FrameSink for CpuSink {
    type Output = FrameRGBA;

    fn draw(&mut self, scene: &FrameScene) -> GlyphcycleResult<FrameRGBA> {
        let width: u16 = scene
            .canvas
            .width
            .try_into()
            .map_err(|_| GlyphcycleError::validation("canvas width exceeds u16"))?;
        let height: u16 = scene
            .canvas
            .height
            .try_into()
            .map_err(|_| GlyphcycleError::validation("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(GlyphcycleError::validation("canvas must be non-empty"));
        }

        let stroke = kurbo::Stroke::new(self.style.line_width_px);
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        set_color(&mut ctx, self.style.background_rgba8);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        set_color(&mut ctx, self.style.circle_rgba8);
        for c in &scene.circles {
            if c.radius.is_nan() || c.radius < MIN_CIRCLE_RADIUS_PX {
                continue;
            }
            let path = kurbo::Circle::new(c.center, c.radius).to_path(SHAPE_TOLERANCE);
            fill_stroke(&mut ctx, &path, &stroke);
        }

        set_color(&mut ctx, self.style.arm_rgba8);
        for arm in &scene.arms {
            fill_stroke(&mut ctx, &polyline(&[arm.from, arm.to]), &stroke);
        }

        if scene.trail.len() >= 2 {
            set_color(&mut ctx, self.style.trail_rgba8);
            fill_stroke(&mut ctx, &polyline(&scene.trail), &stroke);
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: scene.canvas.width,
            height: scene.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, [r, g, b, a]: [u8; 4]) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
}

fn fill_stroke(ctx: &mut vello_cpu::RenderContext, path: &BezPath, stroke: &kurbo::Stroke) {
    let outline = kurbo::stroke(
        path.iter(),
        stroke,
        &kurbo::StrokeOpts::default(),
        SHAPE_TOLERANCE,
    );
    ctx.fill_path(&bezpath_to_cpu(&outline));
}

fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.iter().copied().filter(|p| p.is_finite());
    if let Some(first) = it.next() {
        path.move_to(first);
        for p in it {
            path.line_to(p);
        }
    }
    path
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
