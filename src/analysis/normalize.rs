use crate::foundation::core::{Complex, Point, Vec2};

/// Center `points` on their centroid and scale so the largest coordinate magnitude is 1.
///
/// Takes the samples by value: the raw positions are not meaningful after this step. A curve that
/// collapses to a single point keeps scale 1 and ends up at the origin. NaN coordinates propagate
/// through the translation; they are skipped when searching for the scale.
pub fn normalize(mut points: Vec<Point>) -> Vec<Point> {
    if points.is_empty() {
        return points;
    }

    let n = points.len() as f64;
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let centroid = sum / n;

    let mut max_abs = 0.0_f64;
    for p in &mut points {
        *p -= centroid;
        max_abs = max_abs.max(p.x.abs()).max(p.y.abs());
    }

    let s = if max_abs > 0.0 { 1.0 / max_abs } else { 1.0 };
    for p in &mut points {
        p.x *= s;
        p.y *= s;
    }
    points
}

/// Reinterpret planar points as complex samples (`re = x`, `im = y`), keeping order.
pub fn to_complex(points: &[Point]) -> Vec<Complex> {
    points.iter().copied().map(Complex::from).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/normalize.rs"]
mod tests;
