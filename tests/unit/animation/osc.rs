use super::*;

#[test]
fn oscillation_starts_at_min() {
    let osc = Oscillation::new(4.0, 18.0, 6000.0).unwrap();
    assert_eq!(osc.sample(0.0), 4.0);
}

#[test]
fn oscillation_reaches_max_at_half_period() {
    let osc = Oscillation::new(4.0, 18.0, 6000.0).unwrap();
    assert!((osc.sample(3000.0) - 18.0).abs() < 1e-9);
}

#[test]
fn oscillation_is_bounded_and_periodic() {
    let osc = Oscillation::new(4.0, 18.0, 6000.0).unwrap();
    for i in 0..500 {
        let t = i as f64 * 37.3;
        let v = osc.sample(t);
        assert!((4.0..=18.0).contains(&v), "k({t}) = {v}");
        assert!((v - osc.sample(t + 6000.0)).abs() < 1e-9);
    }
}

#[test]
fn oscillation_rejects_bad_parameters() {
    assert!(Oscillation::new(5.0, 1.0, 1000.0).is_err());
    assert!(Oscillation::new(1.0, 5.0, 0.0).is_err());
    assert!(Oscillation::new(1.0, 1.0, 1000.0).is_ok());
}

#[test]
fn pulse_flattens_then_restores() {
    let pulse = PulseCycle {
        to_flat_ms: 350.0,
        to_glyph_ms: 700.0,
        ease: Ease::InOutCubic,
    };
    assert_eq!(pulse.sample(0.0), 1.0);
    assert_eq!(pulse.sample(350.0), 0.0);
    assert_eq!(pulse.sample(1050.0), 1.0);
    assert!(pulse.sample(175.0) > 0.0 && pulse.sample(175.0) < 1.0);
    assert_eq!(pulse.sample(1050.0 + 350.0), 0.0);
}
