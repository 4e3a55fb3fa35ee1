use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        JourneyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        JourneyError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        JourneyError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = JourneyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
