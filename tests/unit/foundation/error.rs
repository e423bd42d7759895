use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HeartlineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        HeartlineError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        HeartlineError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        HeartlineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HeartlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
