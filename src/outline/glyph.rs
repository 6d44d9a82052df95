use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::{
    core::{BezPath, Point},
    error::{GlyphcycleError, GlyphcycleResult},
};

/// Producer of outline geometry for a text string at a given font size.
///
/// The analysis pipeline never builds paths itself; a session asks its outline source for a fresh
/// path whenever the text or font size changes.
pub trait OutlineSource {
    /// Outline of `text` set at `font_size`, in y-down source units.
    fn outline(&self, text: &str, font_size: f64) -> GlyphcycleResult<BezPath>;
}

/// Outline source that ignores text and always yields the same path.
#[derive(Clone, Debug)]
pub struct FixedOutline {
    path: BezPath,
}

impl FixedOutline {
    /// Wrap an existing path.
    pub fn new(path: BezPath) -> Self {
        Self { path }
    }

    /// Parse SVG path data (`d` attribute syntax).
    pub fn from_svg_path(d: &str) -> GlyphcycleResult<Self> {
        Ok(Self::new(parse_svg_path(d)?))
    }
}

impl OutlineSource for FixedOutline {
    fn outline(&self, _text: &str, _font_size: f64) -> GlyphcycleResult<BezPath> {
        Ok(self.path.clone())
    }
}

/// Text outliner backed by a single font face.
///
/// Text is laid out on a baseline at the origin, so glyph bodies sit at negative `y`. Only the
/// relative geometry matters downstream because the normalizer recenters every curve.
#[derive(Clone)]
pub struct GlyphOutliner {
    fontdb: Arc<usvg::fontdb::Database>,
    family: String,
}

impl std::fmt::Debug for GlyphOutliner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphOutliner")
            .field("family", &self.family)
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl GlyphOutliner {
    /// Load a font file from disk. Blocks until the bytes are read.
    pub fn from_file(path: impl AsRef<Path>) -> GlyphcycleResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))?;
        Self::from_bytes(bytes)
    }

    /// Register font bytes (TTF/OTF/TTC) and use the first face's family for layout.
    pub fn from_bytes(bytes: Vec<u8>) -> GlyphcycleResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_font_data(bytes);

        let family = db
            .faces()
            .next()
            .ok_or_else(|| GlyphcycleError::outline("no font faces found in font data"))?
            .families
            .first()
            .map(|(name, _)| name.clone())
            .ok_or_else(|| GlyphcycleError::outline("font face has no family name"))?;

        tracing::debug!(family = %family, faces = db.len(), "font loaded");
        Ok(Self {
            fontdb: Arc::new(db),
            family,
        })
    }

    /// Family name used for layout.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Parse a full SVG document with this outliner's fonts and collect every path, including
    /// text converted to glyph outlines.
    pub fn outline_svg(&self, svg: &str) -> GlyphcycleResult<BezPath> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_family: self.family.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| GlyphcycleError::outline(format!("parse svg tree: {e}")))?;
        Ok(tree_to_bezpath(&tree))
    }
}

impl OutlineSource for GlyphOutliner {
    #[tracing::instrument(skip(self), fields(family = %self.family))]
    fn outline(&self, text: &str, font_size: f64) -> GlyphcycleResult<BezPath> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(GlyphcycleError::validation(
                "font size must be finite and > 0",
            ));
        }

        let text = match text.trim() {
            "" => " ",
            t => t,
        };
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"><text x="0" y="0" font-family="{family}" font-size="{font_size}" xml:space="preserve">{text}</text></svg>"#,
            family = escape_xml(&self.family),
            text = escape_xml(text),
        );
        self.outline_svg(&svg)
    }
}

/// Parse SVG path data into a [`BezPath`].
pub fn parse_svg_path(d: &str) -> GlyphcycleResult<BezPath> {
    let d = d.trim();
    if d.is_empty() {
        return Err(GlyphcycleError::validation("svg path data must be non-empty"));
    }

    BezPath::from_svg(d).map_err(|e| GlyphcycleError::validation(format!("invalid svg path: {e}")))
}

/// Collect every path of an SVG document without any fonts loaded; `<text>` is dropped.
pub fn svg_outline(svg: &str) -> GlyphcycleResult<BezPath> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| GlyphcycleError::outline(format!("parse svg tree: {e}")))?;
    Ok(tree_to_bezpath(&tree))
}

fn tree_to_bezpath(tree: &usvg::Tree) -> BezPath {
    let mut out = BezPath::new();
    append_group(&mut out, tree.root());
    out
}

fn append_group(out: &mut BezPath, group: &usvg::Group) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => append_group(out, g.as_ref()),
            usvg::Node::Path(p) => append_path(out, p.data(), p.abs_transform()),
            usvg::Node::Text(t) => append_group(out, t.flattened()),
            usvg::Node::Image(_) => {}
        }
    }
}

fn append_path(out: &mut BezPath, data: &usvg::tiny_skia_path::Path, ts: usvg::Transform) {
    use usvg::tiny_skia_path::PathSegment;

    let affine = kurbo::Affine::new([
        f64::from(ts.sx),
        f64::from(ts.ky),
        f64::from(ts.kx),
        f64::from(ts.sy),
        f64::from(ts.tx),
        f64::from(ts.ty),
    ]);
    let pt = |p: usvg::tiny_skia_path::Point| affine * Point::new(f64::from(p.x), f64::from(p.y));

    for seg in data.segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => out.close_path(),
        }
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/outline/glyph.rs"]
mod tests;
