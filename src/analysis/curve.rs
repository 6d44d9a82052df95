use crate::{
    analysis::{
        fingerprint::{TermsFingerprint, fingerprint_terms},
        normalize::{normalize, to_complex},
        sampler::sample_path,
        spectrum::{FourierTerm, analyze, analyze_parallel},
    },
    foundation::core::Complex,
    foundation::error::GlyphcycleResult,
    outline::source::PathSource,
};

/// Sample count from which the transform is spread over the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 2048;

/// Immutable result of running one curve through sampling, normalization, and the DFT.
///
/// Sessions hold this behind an `Arc` and replace it wholesale, so a frame never sees a mix of old
/// and new terms.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CurveAnalysis {
    arc_length: f64,
    samples: Vec<Complex>,
    terms: Vec<FourierTerm>,
    fingerprint: TermsFingerprint,
}

impl CurveAnalysis {
    /// Sample `path` at `n` points, normalize, and rank its Fourier terms.
    ///
    /// Fails with [`DegenerateCurve`](crate::GlyphcycleError::DegenerateCurve) before any
    /// normalization happens when the path has nothing to draw.
    #[tracing::instrument(skip(path))]
    pub fn from_path<P: PathSource + ?Sized>(path: &P, n: usize) -> GlyphcycleResult<Self> {
        let arc_length = path.total_length();
        let points = normalize(sample_path(path, n)?);
        let samples = to_complex(&points);
        Self::from_normalized(arc_length, samples)
    }

    /// Build from samples that are already centered and scaled.
    pub fn from_normalized(arc_length: f64, samples: Vec<Complex>) -> GlyphcycleResult<Self> {
        let terms = if samples.len() >= PARALLEL_THRESHOLD {
            analyze_parallel(&samples)?
        } else {
            analyze(&samples)?
        };
        let fingerprint = fingerprint_terms(&terms);
        tracing::debug!(
            arc_length,
            n = samples.len(),
            hash = fingerprint.hash,
            "curve analyzed"
        );
        Ok(Self {
            arc_length,
            samples,
            terms,
            fingerprint,
        })
    }

    /// Arc length of the source path, in source units.
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// Number of samples `N`; also the number of frames in one animation cycle.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Normalized samples in arc-length order.
    pub fn samples(&self) -> &[Complex] {
        &self.samples
    }

    /// Terms ranked by amplitude, largest first.
    pub fn terms(&self) -> &[FourierTerm] {
        &self.terms
    }

    /// Digest of [`Self::terms`].
    pub fn fingerprint(&self) -> TermsFingerprint {
        self.fingerprint
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/curve.rs"]
mod tests;
