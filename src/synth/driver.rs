use std::sync::Arc;

use crate::{
    analysis::curve::CurveAnalysis,
    foundation::core::Point,
    synth::compose::{DrawFrame, Epicycles, compose},
};

/// Coarse lifecycle of an [`AnimationDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DriverState {
    /// No curve loaded; ticks draw nothing.
    Idle,
    /// Curve loaded and time advancing.
    Running,
    /// Curve loaded, time and trail frozen.
    Paused,
}

/// Owns animation time and the reconstructed trail.
///
/// Time is kept as an integer step so that `t = step / N` lands exactly on the sample grid and a
/// cycle is exactly `N` advances long, whatever `N` is.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    curve: Option<Arc<CurveAnalysis>>,
    term_count: usize,
    step: usize,
    trail: Vec<Point>,
    paused: bool,
    cycles: u64,
}

impl AnimationDriver {
    /// Idle driver drawing at most `term_count` epicycles once a curve is loaded.
    pub fn new(term_count: usize) -> Self {
        Self {
            curve: None,
            term_count,
            step: 0,
            trail: Vec::new(),
            paused: false,
            cycles: 0,
        }
    }

    /// Swap in a new analysis and restart from `t = 0` with an empty trail.
    pub fn load(&mut self, curve: Arc<CurveAnalysis>) {
        self.trail = Vec::with_capacity(curve.sample_count());
        self.curve = Some(curve);
        self.step = 0;
        self.cycles = 0;
    }

    /// Drop the current curve and go back to idle.
    pub fn unload(&mut self) {
        self.curve = None;
        self.reset();
    }

    /// Restart the cycle: `t = 0`, trail cleared. Pause state is kept.
    pub fn reset(&mut self) {
        self.step = 0;
        self.trail.clear();
    }

    /// Flip between running and paused. Returns the new paused flag.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Set the paused flag explicitly.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether time is frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of epicycles drawn per frame (`M`). Takes effect on the next frame.
    pub fn set_term_count(&mut self, term_count: usize) {
        self.term_count = term_count;
    }

    /// Current `M`.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        match (&self.curve, self.paused) {
            (None, _) => DriverState::Idle,
            (Some(_), false) => DriverState::Running,
            (Some(_), true) => DriverState::Paused,
        }
    }

    /// Loaded analysis, if any.
    pub fn curve(&self) -> Option<&Arc<CurveAnalysis>> {
        self.curve.as_ref()
    }

    /// Animation time in `[0, 1)`.
    pub fn t(&self) -> f64 {
        match &self.curve {
            Some(c) => self.step as f64 / c.sample_count() as f64,
            None => 0.0,
        }
    }

    /// Reconstructed points since the last wrap or reset.
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    /// Completed cycles since the current curve was loaded.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Compose the chain at the current `t` and, unless paused, append its tip to the trail.
    ///
    /// Returns `None` while idle.
    pub fn compose_frame(&mut self, frame: &DrawFrame) -> Option<Epicycles> {
        let curve = self.curve.as_ref()?;
        let epicycles = compose(curve.terms(), self.term_count, self.t(), frame);
        if !self.paused {
            self.trail.push(epicycles.tip);
        }
        Some(epicycles)
    }

    /// Move time forward by `1/N`. Wrapping at `t >= 1` clears the trail.
    ///
    /// Returns `true` when this advance completed a cycle.
    pub fn advance(&mut self) -> bool {
        let Some(n) = self.curve.as_ref().map(|c| c.sample_count()) else {
            return false;
        };
        if self.paused {
            return false;
        }

        self.step += 1;
        if self.step >= n {
            self.reset();
            self.cycles += 1;
            tracing::trace!(cycles = self.cycles, "animation cycle complete");
            return true;
        }
        false
    }

    /// One full frame: [`Self::compose_frame`] then [`Self::advance`].
    pub fn tick(&mut self, frame: &DrawFrame) -> Option<Epicycles> {
        let out = self.compose_frame(frame);
        self.advance();
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/driver.rs"]
mod tests;
