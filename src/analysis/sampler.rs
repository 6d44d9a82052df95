use crate::{
    foundation::core::Point,
    foundation::error::{GlyphcycleError, GlyphcycleResult},
    outline::source::PathSource,
};

/// Shortest arc length (in source units) that still counts as something to draw.
pub const MIN_ARC_LENGTH: f64 = 0.1;

/// Reject sample counts that cannot form a curve.
pub fn check_sample_count(n: usize) -> GlyphcycleResult<()> {
    if n < 2 {
        return Err(GlyphcycleError::InvalidSampleCount { count: n });
    }
    Ok(())
}

/// Sample `n` points spaced uniformly by arc length along `path`.
///
/// Point `i` sits at offset `i / (n - 1) * L`, so both endpoints are included.
pub fn sample_path<P: PathSource + ?Sized>(path: &P, n: usize) -> GlyphcycleResult<Vec<Point>> {
    check_sample_count(n)?;

    let length = path.total_length();
    if !length.is_finite() || length <= MIN_ARC_LENGTH {
        tracing::warn!(length, "path has no drawable length");
        return Err(GlyphcycleError::DegenerateCurve { length });
    }

    let last = (n - 1) as f64;
    let points = (0..n)
        .map(|i| path.point_at_length((i as f64 / last) * length))
        .collect();
    Ok(points)
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/sampler.rs"]
mod tests;
