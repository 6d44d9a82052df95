use super::*;

#[test]
fn complex_mul_matches_rotation() {
    let i = Complex::new(0.0, 1.0);
    let one = Complex::new(1.0, 0.0);
    assert_eq!(one * i, i);
    assert_eq!(i * i, Complex::new(-1.0, 0.0));
}

#[test]
fn expi_and_polar_parts_agree() {
    let z = Complex::expi(std::f64::consts::FRAC_PI_2).scale(2.0);
    assert!((z.abs() - 2.0).abs() < 1e-12);
    assert!((z.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn point_complex_conversion_keeps_axes() {
    let c = Complex::from(Point::new(3.0, -4.0));
    assert_eq!(c, Complex::new(3.0, -4.0));
    assert_eq!(Point::from(c), Point::new(3.0, -4.0));
}

#[test]
fn canvas_rejects_zero_sides() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(640, 360).unwrap();
    assert_eq!(c.center(), Point::new(320.0, 180.0));
    assert_eq!(c.min_side(), 360.0);
}
