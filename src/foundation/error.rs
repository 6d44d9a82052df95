/// Convenience result type used across glyphcycle.
pub type GlyphcycleResult<T> = Result<T, GlyphcycleError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlyphcycleError {
    /// The sampled path has no usable arc length (non-finite or too short to draw).
    #[error("degenerate curve: arc length {length} is not drawable")]
    DegenerateCurve {
        /// Arc length reported by the path source.
        length: f64,
    },

    /// Fewer than two samples were requested.
    #[error("invalid sample count {count}: at least 2 samples are required")]
    InvalidSampleCount {
        /// Requested sample count.
        count: usize,
    },

    /// Invalid user-provided configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading fonts or extracting glyph outlines.
    #[error("outline error: {0}")]
    Outline(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphcycleError {
    /// Build a [`GlyphcycleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphcycleError::Outline`] value.
    pub fn outline(msg: impl Into<String>) -> Self {
        Self::Outline(msg.into())
    }

    /// Build a [`GlyphcycleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error means "nothing to draw" rather than a hard failure.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateCurve { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
