use super::*;

#[test]
fn defaults_are_valid() {
    let c = EpicycleConfig::default();
    c.validate().unwrap();
    assert_eq!(c.sample_count, 512);
    assert!((c.fit_scale() - 0.42 * 540.0).abs() < 1e-9);
}

#[test]
fn partial_json_fills_defaults() {
    let c = EpicycleConfig::from_json_str(
        r#"{ "text": "Fourier", "sample_count": 128, "canvas": { "width": 300, "height": 200 } }"#,
    )
    .unwrap();
    assert_eq!(c.text, "Fourier");
    assert_eq!(c.sample_count, 128);
    assert_eq!(c.term_count, EpicycleConfig::default().term_count);
    assert!((c.fit_scale() - 84.0).abs() < 1e-9);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = EpicycleConfig::from_json_str(r#"{ "samples": 10 }"#).unwrap_err();
    assert!(matches!(err, GlyphcycleError::Serde(_)));
}

#[test]
fn invalid_values_are_rejected() {
    let bad = [
        r#"{ "sample_count": 1 }"#,
        r#"{ "font_size": 0.0 }"#,
        r#"{ "fit_ratio": -1.0 }"#,
        r#"{ "canvas": { "width": 0, "height": 10 } }"#,
        r#"{ "style": { "line_width_px": 0.0 } }"#,
    ];
    for json in bad {
        assert!(EpicycleConfig::from_json_str(json).is_err(), "{json}");
    }
    assert!(matches!(
        EpicycleConfig::from_json_str(r#"{ "sample_count": 1 }"#),
        Err(GlyphcycleError::InvalidSampleCount { count: 1 })
    ));
}

#[test]
fn json_round_trip_preserves_config() {
    let c = EpicycleConfig {
        term_count: 17,
        flip_y: true,
        ..EpicycleConfig::default()
    };
    let back = EpicycleConfig::from_json_str(&c.to_json_string().unwrap()).unwrap();
    assert_eq!(back, c);
}

#[test]
fn missing_file_reports_path() {
    let err = EpicycleConfig::from_json_file("nope/config.json").unwrap_err();
    assert!(err.to_string().contains("nope/config.json"));
}
