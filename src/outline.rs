pub(crate) mod glyph;
pub(crate) mod source;
