use std::f64::consts::TAU;

use crate::{analysis::spectrum::FourierTerm, foundation::core::Point};

/// Where and how the epicycle chain is placed on the drawing surface.
///
/// The analysis runs in the source curve's own axis orientation. `flip_y` is the single place where
/// the imaginary axis may be inverted on the way to the surface: leave it `false` when the surface
/// shares the source's convention (glyph outlines and raster canvases are both y-down), set it
/// when drawing y-down data into a y-up frame or vice versa.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawFrame {
    /// Anchor of the first epicycle.
    pub origin: Point,
    /// Uniform scale applied to every radius.
    pub scale: f64,
    /// Negate the sine component of every arm.
    pub flip_y: bool,
}

impl Default for DrawFrame {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            scale: 1.0,
            flip_y: false,
        }
    }
}

/// Joint chain for one instant of the animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Epicycles {
    /// Center of the first circle.
    pub origin: Point,
    /// Tip of each arm, in rank order.
    pub joints: Vec<Point>,
    /// Scaled radius of each arm, in rank order.
    pub radii: Vec<f64>,
    /// Reconstructed point: the last joint, or the origin when no term is drawn.
    pub tip: Point,
}

impl Epicycles {
    /// `(center, tip, radius)` for every arm, in drawing order.
    pub fn arms(&self) -> impl Iterator<Item = (Point, Point, f64)> + '_ {
        let centers = std::iter::once(self.origin).chain(self.joints.iter().copied());
        centers
            .zip(self.joints.iter().copied())
            .zip(self.radii.iter().copied())
            .map(|((center, tip), r)| (center, tip, r))
    }
}

/// Chain the first `m` ranked terms at time `t ∈ [0, 1)`.
///
/// Arm `i` has radius `amp · scale` and angle `2π · freq · t + phase`. With every term drawn,
/// no flip, unit scale, and a zero origin, the tip at `t = n / N` is sample `n` of the curve.
pub fn compose(terms: &[FourierTerm], m: usize, t: f64, frame: &DrawFrame) -> Epicycles {
    let count = m.min(terms.len());
    let mut joints = Vec::with_capacity(count);
    let mut radii = Vec::with_capacity(count);
    let y_sign = if frame.flip_y { -1.0 } else { 1.0 };

    let mut p = frame.origin;
    for c in &terms[..count] {
        let r = c.amp * frame.scale;
        let theta = TAU * (c.freq as f64) * t + c.phase;
        let (sin, cos) = theta.sin_cos();
        p = Point::new(p.x + r * cos, p.y + y_sign * r * sin);
        joints.push(p);
        radii.push(r);
    }

    Epicycles {
        origin: frame.origin,
        joints,
        radii,
        tip: p,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/compose.rs"]
mod tests;
