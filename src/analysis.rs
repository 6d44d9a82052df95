pub(crate) mod curve;
pub(crate) mod fingerprint;
pub(crate) mod normalize;
pub(crate) mod sampler;
pub(crate) mod spectrum;
