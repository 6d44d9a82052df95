//! Glyphcycle turns a glyph outline into a chain of rotating epicycles that redraws it.
//!
//! The outline is treated as a closed curve in the complex plane, resampled by arc length,
//! transformed with a discrete Fourier transform, and replayed as a sum of circles ranked by
//! amplitude.
//!
//! # Pipeline overview
//!
//! 1. **Outline**: `text + font size -> BezPath` via an [`OutlineSource`] (usually [`GlyphOutliner`])
//! 2. **Sample**: `PathSource -> N points` evenly spaced along the arc length ([`sample_path`])
//! 3. **Normalize**: center on the centroid and scale into `[-1, 1]` ([`normalize`])
//! 4. **Analyze**: naive `O(N²)` DFT, terms ranked by amplitude ([`analyze`])
//! 5. **Compose**: chain the first `M` terms at time `t` ([`compose`])
//! 6. **Drive**: advance `t` by `1/N` per frame and keep the trail ([`AnimationDriver`])
//!
//! [`EpicycleSession`] wires all of the above behind explicit [`Command`]s and a per-frame
//! [`EpicycleSession::tick`], producing [`FrameScene`]s for any [`FrameSink`] such as [`CpuSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod analysis;
mod foundation;
mod outline;
mod render;
mod session;
mod synth;

pub use analysis::curve::{CurveAnalysis, PARALLEL_THRESHOLD};
pub use analysis::fingerprint::{TermsFingerprint, fingerprint_terms};
pub use analysis::normalize::{normalize, to_complex};
pub use analysis::sampler::{MIN_ARC_LENGTH, check_sample_count, sample_path};
pub use analysis::spectrum::{
    FourierTerm, analyze, analyze_parallel, dft, rank_terms, signed_frequency,
};
pub use foundation::core::{BezPath, Canvas, Complex, Point, Vec2};
pub use foundation::error::{GlyphcycleError, GlyphcycleResult};
pub use outline::glyph::{
    FixedOutline, GlyphOutliner, OutlineSource, parse_svg_path, svg_outline,
};
pub use outline::source::{ARCLEN_ACCURACY, ArclenPath, PathSource};
pub use render::cpu::{CpuSink, FrameRGBA};
pub use render::scene::{Circle, FrameScene, FrameSink, SceneStyle, Segment};
pub use session::config::{DEFAULT_FIT_RATIO, EpicycleConfig};
pub use session::context::{Command, EpicycleSession, Status};
pub use synth::compose::{DrawFrame, Epicycles, compose};
pub use synth::driver::{AnimationDriver, DriverState};
