use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{BezPath, Point};

/// Arc-length accuracy used when measuring and inverting Bezier segments.
pub const ARCLEN_ACCURACY: f64 = 1e-6;

/// Parametric planar path addressed by arc length.
///
/// This is the only capability the analysis pipeline needs from an outline. Implementations must
/// accept any offset in `[0, total_length()]`; offsets outside that range are clamped.
pub trait PathSource {
    /// Total arc length of the path.
    fn total_length(&self) -> f64;

    /// Point located `s` units of arc length from the start of the path.
    fn point_at_length(&self, s: f64) -> Point;
}

impl<T: PathSource + ?Sized> PathSource for &T {
    fn total_length(&self) -> f64 {
        (**self).total_length()
    }

    fn point_at_length(&self, s: f64) -> Point {
        (**self).point_at_length(s)
    }
}

/// A [`BezPath`] with precomputed per-segment arc lengths.
///
/// Subpaths are walked in order; the jump between one subpath's end and the next `MoveTo` adds no
/// length. Closed subpaths include their implicit closing line.
#[derive(Clone, Debug)]
pub struct ArclenPath {
    segments: Vec<PathSeg>,
    // Arc length at which each segment starts.
    offsets: Vec<f64>,
    lengths: Vec<f64>,
    total: f64,
}

impl ArclenPath {
    /// Measure `path` once so repeated lookups are cheap.
    pub fn new(path: &BezPath) -> Self {
        let segments: Vec<PathSeg> = path.segments().collect();
        let mut offsets = Vec::with_capacity(segments.len());
        let mut lengths = Vec::with_capacity(segments.len());
        let mut total = 0.0;
        for seg in &segments {
            let len = seg.arclen(ARCLEN_ACCURACY);
            offsets.push(total);
            lengths.push(len);
            total += len;
        }
        Self {
            segments,
            offsets,
            lengths,
            total,
        }
    }

    /// Number of drawable segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path contains no drawable segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&BezPath> for ArclenPath {
    fn from(path: &BezPath) -> Self {
        Self::new(path)
    }
}

impl PathSource for ArclenPath {
    fn total_length(&self) -> f64 {
        self.total
    }

    fn point_at_length(&self, s: f64) -> Point {
        if self.segments.is_empty() {
            return Point::ZERO;
        }
        if s.is_nan() {
            return Point::new(f64::NAN, f64::NAN);
        }

        let s = s.clamp(0.0, self.total);
        let idx = self
            .offsets
            .partition_point(|&o| o <= s)
            .saturating_sub(1);
        let seg = self.segments[idx];
        let len = self.lengths[idx];
        if len <= 0.0 {
            return seg.eval(0.0);
        }

        let local = (s - self.offsets[idx]).clamp(0.0, len);
        let t = seg.inv_arclen(local, ARCLEN_ACCURACY);
        seg.eval(t.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/outline/source.rs"]
mod tests;
