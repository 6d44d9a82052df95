use rayon::prelude::*;

use crate::{
    analysis::sampler::check_sample_count,
    foundation::core::Complex,
    foundation::error::GlyphcycleResult,
    foundation::math::dft_angle,
};

/// One DFT coefficient annotated for epicycle drawing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FourierTerm {
    /// Raw DFT bin `k` in `[0, N)`.
    pub bin: usize,
    /// Signed frequency: `k` when `k <= N/2`, else `k - N`.
    pub freq: i64,
    /// Real part of the coefficient (already divided by `N`).
    pub re: f64,
    /// Imaginary part of the coefficient (already divided by `N`).
    pub im: f64,
    /// `hypot(re, im)`.
    pub amp: f64,
    /// `atan2(im, re)`.
    pub phase: f64,
}

impl FourierTerm {
    /// Coefficient as a complex number.
    pub fn coefficient(&self) -> Complex {
        Complex::new(self.re, self.im)
    }
}

/// Fold bin `k` of an `n`-point transform into `(-n/2, n/2]`.
pub fn signed_frequency(k: usize, n: usize) -> i64 {
    if 2 * k <= n {
        k as i64
    } else {
        k as i64 - n as i64
    }
}

/// Direct-summation DFT in bin order, without ranking.
///
/// `C_k = (1/N) Σ z_n e^{-i2πkn/N}`. The inner loop runs over `n` for a fixed `k` and accumulates
/// left to right; results are reproducible bit for bit.
pub fn dft(samples: &[Complex]) -> GlyphcycleResult<Vec<FourierTerm>> {
    check_sample_count(samples.len())?;
    Ok((0..samples.len()).map(|k| dft_bin(samples, k)).collect())
}

/// Full transform ranked by amplitude, largest first; equal amplitudes keep bin order.
#[tracing::instrument(skip(samples), fields(n = samples.len()))]
pub fn analyze(samples: &[Complex]) -> GlyphcycleResult<Vec<FourierTerm>> {
    let mut terms = dft(samples)?;
    rank_terms(&mut terms);
    log_summary(&terms);
    Ok(terms)
}

/// Same result as [`analyze`], with bins spread over the rayon pool.
///
/// Each bin is still summed sequentially, so the output is bit-identical to [`analyze`].
#[tracing::instrument(skip(samples), fields(n = samples.len()))]
pub fn analyze_parallel(samples: &[Complex]) -> GlyphcycleResult<Vec<FourierTerm>> {
    check_sample_count(samples.len())?;
    let mut terms: Vec<FourierTerm> = (0..samples.len())
        .into_par_iter()
        .map(|k| dft_bin(samples, k))
        .collect();
    rank_terms(&mut terms);
    log_summary(&terms);
    Ok(terms)
}

/// Stable sort by amplitude, descending. NaN amplitudes sort ahead of every finite value.
pub fn rank_terms(terms: &mut [FourierTerm]) {
    terms.sort_by(|a, b| b.amp.total_cmp(&a.amp));
}

fn dft_bin(samples: &[Complex], k: usize) -> FourierTerm {
    let len = samples.len();
    let mut sum = Complex::ZERO;
    for (n, z) in samples.iter().enumerate() {
        sum += *z * Complex::expi(dft_angle(k, n, len));
    }
    let c = Complex::new(sum.re / len as f64, sum.im / len as f64);

    FourierTerm {
        bin: k,
        freq: signed_frequency(k, len),
        re: c.re,
        im: c.im,
        amp: c.abs(),
        phase: c.arg(),
    }
}

fn log_summary(terms: &[FourierTerm]) {
    if let Some(top) = terms.first() {
        tracing::debug!(
            terms = terms.len(),
            top_freq = top.freq,
            top_amp = top.amp,
            "spectrum ranked"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/spectrum.rs"]
mod tests;
