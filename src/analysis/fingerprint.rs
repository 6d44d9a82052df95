use crate::{analysis::spectrum::FourierTerm, foundation::math::Fnv1a64};

/// Bit-exact digest of a ranked term list.
///
/// Two term lists share a fingerprint only when they hold the same bins in the same order with
/// identical coefficient bits, which makes it a cheap reproducibility check across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TermsFingerprint {
    /// FNV-1a digest.
    pub hash: u64,
    /// Number of hashed terms.
    pub len: usize,
}

/// Fingerprint `terms` in their current order.
pub fn fingerprint_terms(terms: &[FourierTerm]) -> TermsFingerprint {
    let mut h = Fnv1a64::new_default();
    h.write_u64(terms.len() as u64);
    for t in terms {
        h.write_u64(t.bin as u64);
        h.write_u8(0xfe);
        h.write_f64(t.re);
        h.write_f64(t.im);
    }
    TermsFingerprint {
        hash: h.finish(),
        len: terms.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/fingerprint.rs"]
mod tests;
