use std::ops::{Add, AddAssign, Mul};

use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};

pub use kurbo::{BezPath, Point, Vec2};

/// A planar sample reinterpreted as a complex number (`re = x`, `im = y`).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Additive identity.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Construct from rectangular parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Unit vector at angle `theta` (radians): `cos θ + i sin θ`.
    pub fn expi(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    /// Magnitude.
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Argument in `(-π, π]`.
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Divide both parts by a real scalar.
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl From<Point> for Complex {
    fn from(p: Point) -> Self {
        Self { re: p.x, im: p.y }
    }
}

impl From<Complex> for Point {
    fn from(c: Complex) -> Self {
        Point::new(c.re, c.im)
    }
}

/// Drawing surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized surfaces.
    pub fn new(width: u32, height: u32) -> GlyphcycleResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Reject zero-sized surfaces.
    pub fn validate(self) -> GlyphcycleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GlyphcycleError::validation(
                "canvas width and height must be > 0",
            ));
        }
        Ok(())
    }

    /// Center of the surface.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Shorter side length.
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
