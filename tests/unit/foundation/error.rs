use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlyphcycleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GlyphcycleError::outline("x")
            .to_string()
            .contains("outline error:")
    );
    assert!(
        GlyphcycleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        GlyphcycleError::InvalidSampleCount { count: 1 }
            .to_string()
            .contains("invalid sample count 1")
    );
}

#[test]
fn degenerate_is_flagged() {
    let err = GlyphcycleError::DegenerateCurve { length: 0.0 };
    assert!(err.is_degenerate());
    assert!(!GlyphcycleError::validation("x").is_degenerate());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlyphcycleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
