use crate::{
    foundation::core::{Canvas, Point},
    foundation::error::GlyphcycleResult,
    synth::compose::Epicycles,
};

/// Colors and line width used by sinks that rasterize a [`FrameScene`].
///
/// Colors are straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneStyle {
    /// Surface clear color.
    pub background_rgba8: [u8; 4],
    /// Epicycle circle outlines.
    pub circle_rgba8: [u8; 4],
    /// Arms joining consecutive circle centers.
    pub arm_rgba8: [u8; 4],
    /// Reconstructed trail.
    pub trail_rgba8: [u8; 4],
    /// Stroke width in pixels.
    pub line_width_px: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background_rgba8: [18, 20, 28, 255],
            circle_rgba8: [120, 130, 160, 90],
            arm_rgba8: [200, 205, 220, 200],
            trail_rgba8: [255, 196, 64, 255],
            line_width_px: 1.5,
        }
    }
}

/// Circle centered on a joint of the chain.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Circle {
    /// Center in surface coordinates.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
}

/// Straight arm from one joint to the next.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameScene {
    /// Target surface size.
    pub canvas: Canvas,
    /// One circle per drawn term, in rank order.
    pub circles: Vec<Circle>,
    /// One arm per drawn term, in rank order.
    pub arms: Vec<Segment>,
    /// Trail polyline, oldest point first.
    pub trail: Vec<Point>,
    /// Current reconstructed point; `None` when nothing is loaded.
    pub tip: Option<Point>,
}

impl FrameScene {
    /// Scene with nothing to draw besides the background.
    pub fn empty(canvas: Canvas) -> Self {
        Self {
            canvas,
            circles: Vec::new(),
            arms: Vec::new(),
            trail: Vec::new(),
            tip: None,
        }
    }

    /// Build draw primitives from a composed chain and the trail so far.
    pub fn from_epicycles(canvas: Canvas, epicycles: &Epicycles, trail: &[Point]) -> Self {
        let mut circles = Vec::with_capacity(epicycles.joints.len());
        let mut arms = Vec::with_capacity(epicycles.joints.len());
        for (center, tip, radius) in epicycles.arms() {
            circles.push(Circle { center, radius });
            arms.push(Segment { from: center, to: tip });
        }
        Self {
            canvas,
            circles,
            arms,
            trail: trail.to_vec(),
            tip: Some(epicycles.tip),
        }
    }

    /// Whether the scene draws anything besides the background.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.trail.is_empty() && self.tip.is_none()
    }
}

/// Consumer of per-frame scenes. Sinks never call back into the pipeline.
pub trait FrameSink {
    /// What one drawn frame produces (pixels, a recording, nothing).
    type Output;

    /// Draw `scene`.
    fn draw(&mut self, scene: &FrameScene) -> GlyphcycleResult<Self::Output>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
