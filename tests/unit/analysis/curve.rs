use super::*;
use crate::{
    foundation::core::{BezPath, Point},
    foundation::error::GlyphcycleError,
    outline::source::ArclenPath,
};

fn rect(w: f64, h: f64) -> ArclenPath {
    let mut p = BezPath::new();
    p.move_to((10.0, 10.0));
    p.line_to((10.0 + w, 10.0));
    p.line_to((10.0 + w, 10.0 + h));
    p.line_to((10.0, 10.0 + h));
    p.close_path();
    ArclenPath::new(&p)
}

#[test]
fn pipeline_produces_one_term_per_sample() {
    let a = CurveAnalysis::from_path(&rect(40.0, 20.0), 64).unwrap();
    assert_eq!(a.sample_count(), 64);
    assert_eq!(a.terms().len(), 64);
    assert!((a.arc_length() - 120.0).abs() < 1e-9);
    assert_eq!(a.fingerprint(), fingerprint_terms(a.terms()));
}

#[test]
fn samples_are_normalized() {
    let a = CurveAnalysis::from_path(&rect(40.0, 20.0), 101).unwrap();
    let n = a.sample_count() as f64;
    let mean = a
        .samples()
        .iter()
        .fold(Complex::ZERO, |acc, z| acc + *z)
        .scale(1.0 / n);
    assert!(mean.abs() < 1e-12);
    let max = a
        .samples()
        .iter()
        .fold(0.0_f64, |m, z| m.max(z.re.abs()).max(z.im.abs()));
    assert!((max - 1.0).abs() < 1e-12);
}

#[test]
fn dc_term_vanishes_after_centering() {
    let a = CurveAnalysis::from_path(&rect(30.0, 30.0), 50).unwrap();
    let dc = a.terms().iter().find(|t| t.freq == 0).unwrap();
    assert!(dc.amp < 1e-12);
}

#[test]
fn degenerate_path_fails_before_analysis() {
    let mut p = BezPath::new();
    p.move_to(Point::new(1.0, 1.0));
    p.line_to(Point::new(1.05, 1.0));
    let err = CurveAnalysis::from_path(&ArclenPath::new(&p), 32).unwrap_err();
    assert!(matches!(err, GlyphcycleError::DegenerateCurve { .. }));
}

#[test]
fn large_sample_counts_match_serial_analysis() {
    let path = rect(17.0, 9.0);
    let n = PARALLEL_THRESHOLD;
    let analysis = CurveAnalysis::from_path(&path, n).unwrap();
    let serial = analyze(analysis.samples()).unwrap();
    assert_eq!(analysis.fingerprint(), fingerprint_terms(&serial));
}
