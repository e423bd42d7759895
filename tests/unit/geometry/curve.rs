use super::*;

#[test]
fn constants_match_closed_forms() {
    assert!((X_EXTENT - 3f64.sqrt()).abs() < 1e-15);
    assert!((Y_MID - 3f64.cbrt() / 2.0).abs() < 1e-15);
}

#[test]
fn edges_are_exactly_zero_for_any_k() {
    for k in [0.0, 0.22, 4.0, 18.0, -7.5, 1000.0] {
        assert_eq!(heart_y(X_EXTENT, k), 0.0);
        assert_eq!(heart_y(-X_EXTENT, k), 0.0);
        assert_eq!(heart_y(3f64.sqrt(), k), 0.0);
        assert_eq!(heart_y(-(3f64.sqrt()), k), 0.0);
    }
}

#[test]
fn outside_domain_is_flat() {
    assert_eq!(heart_y(2.0, 18.0), 0.0);
    assert_eq!(heart_y(-10.0, 18.0), 0.0);
}

#[test]
fn center_is_zero_and_k_zero_is_plain_lobe() {
    assert_eq!(heart_y(0.0, 18.0), 0.0);
    let x = 1.0;
    assert!((heart_y(x, 0.0) - 1.0).abs() < 1e-12);
}

#[test]
fn ripple_term_matches_formula() {
    let (x, k): (f64, f64) = (0.7, 18.0);
    let expected = (x * x).cbrt() + 0.9 * (k * x).sin() * (3.0 - x * x).sqrt();
    assert!((heart_y(x, k) - expected).abs() < 1e-12);
}

#[test]
fn sample_centered_spans_domain() {
    let c = HeartCurve::new(18.0);
    let (x0, y0) = c.sample_centered(0.0);
    let (x1, y1) = c.sample_centered(1.0);
    assert_eq!(x0, -X_EXTENT);
    assert!((x1 - X_EXTENT).abs() < 1e-12);
    assert_eq!(y0, -Y_MID);
    assert_eq!(y1, -Y_MID);
    let (xm, _) = c.sample_centered(0.5);
    assert!(xm.abs() < 1e-12);
}
