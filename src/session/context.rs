use std::{fmt, sync::Arc};

use crate::{
    analysis::{curve::CurveAnalysis, sampler::check_sample_count},
    foundation::core::Canvas,
    foundation::error::GlyphcycleResult,
    outline::{glyph::OutlineSource, source::ArclenPath},
    render::scene::{FrameScene, FrameSink},
    session::config::{EpicycleConfig, validate_font_size},
    synth::{compose::DrawFrame, driver::AnimationDriver},
};

/// Host input understood by [`EpicycleSession::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Re-run outline, sampling, and analysis with the current settings.
    Render,
    /// Replace the text. Applied on the next [`Command::Render`].
    SetText(String),
    /// Replace the font size. Applied on the next [`Command::Render`].
    SetFontSize(f64),
    /// Replace `N`. Applied on the next [`Command::Render`].
    SetSampleCount(usize),
    /// Replace `M`. Applied on the next frame without resetting.
    SetTermCount(usize),
    /// Freeze or resume time and trail.
    TogglePause,
    /// Restart the current cycle.
    Reset,
    /// Change the drawing surface. Restarts the current cycle.
    Resize(Canvas),
}

/// What a host shows next to the animation.
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    /// Nothing rendered yet.
    Idle,
    /// A curve is loaded and animating.
    Ready {
        /// Arc length of the source outline, in source units.
        arc_length: f64,
        /// Samples (and frames per cycle) of the loaded curve.
        sample_count: usize,
    },
    /// The last render produced a path too short to draw.
    NothingToDraw,
    /// The last render failed for another reason.
    Failed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Click Render."),
            Self::Ready {
                arc_length,
                sample_count,
            } => write!(
                f,
                "Ready. Path length={arc_length:.1} | N={sample_count} | terms sorted by amplitude"
            ),
            Self::NothingToDraw => {
                f.write_str("Nothing to draw (path length ~0). Try different text.")
            }
            Self::Failed(msg) => write!(f, "Render failed: {msg}"),
        }
    }
}

/// One independent text-to-epicycles pipeline: settings, outline source, and animation state.
///
/// All mutation goes through `&mut self`, so a frame always sees either the previous analysis or
/// the new one, never a mix.
pub struct EpicycleSession {
    config: EpicycleConfig,
    source: Box<dyn OutlineSource>,
    driver: AnimationDriver,
    status: Status,
}

impl fmt::Debug for EpicycleSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EpicycleSession")
            .field("config", &self.config)
            .field("driver", &self.driver)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl EpicycleSession {
    /// Idle session over `source`. Nothing is analyzed until [`Command::Render`].
    pub fn new(
        config: EpicycleConfig,
        source: impl OutlineSource + 'static,
    ) -> GlyphcycleResult<Self> {
        config.validate()?;
        Ok(Self {
            driver: AnimationDriver::new(config.term_count),
            config,
            source: Box::new(source),
            status: Status::Idle,
        })
    }

    /// Apply one host command.
    ///
    /// Setters validate their argument and leave the session untouched on error.
    pub fn handle(&mut self, cmd: Command) -> GlyphcycleResult<()> {
        tracing::debug!(?cmd, "session command");
        match cmd {
            Command::Render => self.render(),
            Command::SetText(text) => {
                self.config.text = text;
                Ok(())
            }
            Command::SetFontSize(font_size) => {
                validate_font_size(font_size)?;
                self.config.font_size = font_size;
                Ok(())
            }
            Command::SetSampleCount(n) => {
                check_sample_count(n)?;
                self.config.sample_count = n;
                Ok(())
            }
            Command::SetTermCount(m) => {
                self.config.term_count = m;
                self.driver.set_term_count(m);
                Ok(())
            }
            Command::TogglePause => {
                self.driver.toggle_pause();
                Ok(())
            }
            Command::Reset => {
                self.driver.reset();
                Ok(())
            }
            Command::Resize(canvas) => {
                canvas.validate()?;
                self.config.canvas = canvas;
                self.driver.reset();
                Ok(())
            }
        }
    }

    /// Outline, sample, normalize, and analyze the current text, then restart the animation.
    ///
    /// On failure the previous curve and animation keep running and only the status changes.
    #[tracing::instrument(skip(self), fields(text = %self.config.text, n = self.config.sample_count))]
    pub fn render(&mut self) -> GlyphcycleResult<()> {
        match self.analyze() {
            Ok(curve) => {
                self.status = Status::Ready {
                    arc_length: curve.arc_length(),
                    sample_count: curve.sample_count(),
                };
                self.driver.load(Arc::new(curve));
                tracing::info!(status = %self.status, "render complete");
                Ok(())
            }
            Err(e) => {
                self.status = if e.is_degenerate() {
                    Status::NothingToDraw
                } else {
                    Status::Failed(e.to_string())
                };
                tracing::warn!(error = %e, "render failed; keeping previous curve");
                Err(e)
            }
        }
    }

    fn analyze(&self) -> GlyphcycleResult<CurveAnalysis> {
        let outline = self
            .source
            .outline(&self.config.text, self.config.font_size)?;
        let path = ArclenPath::new(&outline);
        CurveAnalysis::from_path(&path, self.config.sample_count)
    }

    /// Placement of the chain on the current canvas.
    pub fn draw_frame(&self) -> DrawFrame {
        DrawFrame {
            origin: self.config.canvas.center(),
            scale: self.config.fit_scale(),
            flip_y: self.config.flip_y,
        }
    }

    /// Produce the scene for the current instant, then advance time by one sample.
    ///
    /// An idle session yields an empty scene.
    pub fn tick(&mut self) -> FrameScene {
        let canvas = self.config.canvas;
        let frame = self.draw_frame();
        let Some(epicycles) = self.driver.compose_frame(&frame) else {
            return FrameScene::empty(canvas);
        };
        let scene = FrameScene::from_epicycles(canvas, &epicycles, self.driver.trail());
        self.driver.advance();
        scene
    }

    /// [`Self::tick`] and hand the scene to `sink`.
    pub fn render_frame<S: FrameSink>(&mut self, sink: &mut S) -> GlyphcycleResult<S::Output> {
        let scene = self.tick();
        sink.draw(&scene)
    }

    /// Current settings, including pending ones not yet rendered.
    pub fn config(&self) -> &EpicycleConfig {
        &self.config
    }

    /// Status of the last render.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Animation state.
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Loaded analysis, if any.
    pub fn curve(&self) -> Option<&Arc<CurveAnalysis>> {
        self.driver.curve()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/context.rs"]
mod tests;
