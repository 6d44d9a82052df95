use super::*;
use crate::outline::source::{ArclenPath, PathSource};

#[test]
fn parse_svg_path_accepts_path_data() {
    let p = parse_svg_path("M0 0 L10 0 L10 10 Z").unwrap();
    assert!((ArclenPath::new(&p).total_length() - (20.0 + 200f64.sqrt())).abs() < 1e-9);
}

#[test]
fn parse_svg_path_rejects_empty_and_garbage() {
    assert!(matches!(
        parse_svg_path("   "),
        Err(GlyphcycleError::Validation(_))
    ));
    assert!(parse_svg_path("M 0 0 K 1 1").is_err());
}

#[test]
fn svg_outline_applies_node_transforms() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
        <g transform="translate(5 5)"><path d="M0 0 L10 0 L10 10 Z"/></g>
    </svg>"#;
    let path = svg_outline(svg).unwrap();
    let first = path.elements().first().copied();
    assert_eq!(first, Some(kurbo::PathEl::MoveTo(Point::new(5.0, 5.0))));
    assert!((ArclenPath::new(&path).total_length() - (20.0 + 200f64.sqrt())).abs() < 1e-4);
}

#[test]
fn svg_outline_rejects_malformed_documents() {
    assert!(matches!(
        svg_outline("<svg"),
        Err(GlyphcycleError::Outline(_))
    ));
}

#[test]
fn fixed_outline_ignores_text_and_size() {
    let source = FixedOutline::from_svg_path("M0 0 L4 0").unwrap();
    let a = source.outline("a", 10.0).unwrap();
    let b = source.outline("something else", 99.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn font_bytes_without_faces_are_rejected() {
    let err = GlyphOutliner::from_bytes(b"definitely not a font".to_vec()).unwrap_err();
    assert!(matches!(err, GlyphcycleError::Outline(_)));
}

#[test]
fn missing_font_file_reports_path() {
    let err = GlyphOutliner::from_file("does/not/exist.ttf").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.ttf"));
}

#[test]
fn xml_escaping_covers_markup_characters() {
    assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
}
