use std::path::Path;

use anyhow::Context;

use crate::{
    analysis::sampler::check_sample_count,
    foundation::core::Canvas,
    foundation::error::{GlyphcycleError, GlyphcycleResult},
    render::scene::SceneStyle,
};

/// Share of the canvas's shorter side covered by a unit-amplitude epicycle.
pub const DEFAULT_FIT_RATIO: f64 = 0.42;

/// Host-facing options for one epicycle session.
///
/// Missing fields fall back to [`Default`]; unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EpicycleConfig {
    /// Text whose outline is traced.
    pub text: String,
    /// Font size handed to the outline source. Only scales the source path.
    pub font_size: f64,
    /// Curve resolution `N`; also the number of frames per cycle.
    pub sample_count: usize,
    /// Epicycles drawn per frame `M`.
    pub term_count: usize,
    /// Drawing surface.
    pub canvas: Canvas,
    /// Fit scale as a fraction of the canvas's shorter side.
    pub fit_ratio: f64,
    /// Invert the imaginary axis when drawing.
    pub flip_y: bool,
    /// Colors and stroke width for raster sinks.
    pub style: SceneStyle,
}

impl Default for EpicycleConfig {
    fn default() -> Self {
        Self {
            text: "Hello".to_string(),
            font_size: 200.0,
            sample_count: 512,
            term_count: 200,
            canvas: Canvas {
                width: 960,
                height: 540,
            },
            fit_ratio: DEFAULT_FIT_RATIO,
            flip_y: false,
            style: SceneStyle::default(),
        }
    }
}

impl EpicycleConfig {
    /// Check every option; the first problem found is returned.
    pub fn validate(&self) -> GlyphcycleResult<()> {
        check_sample_count(self.sample_count)?;
        validate_font_size(self.font_size)?;
        self.canvas.validate()?;
        if !self.fit_ratio.is_finite() || self.fit_ratio <= 0.0 {
            return Err(GlyphcycleError::validation(
                "fit_ratio must be finite and > 0",
            ));
        }
        if !self.style.line_width_px.is_finite() || self.style.line_width_px <= 0.0 {
            return Err(GlyphcycleError::validation(
                "style.line_width_px must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> GlyphcycleResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| GlyphcycleError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> GlyphcycleResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Pretty JSON form.
    pub fn to_json_string(&self) -> GlyphcycleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GlyphcycleError::serde(e.to_string()))
    }

    /// Uniform scale from normalized curve units to canvas pixels.
    pub fn fit_scale(&self) -> f64 {
        self.fit_ratio * self.canvas.min_side()
    }
}

pub(crate) fn validate_font_size(font_size: f64) -> GlyphcycleResult<()> {
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(GlyphcycleError::validation(
            "font_size must be finite and > 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
