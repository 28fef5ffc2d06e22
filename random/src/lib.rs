pub mod config;
pub mod entropy;
pub mod error;
pub mod sampler;
pub mod sequence;

pub use config::SamplerConfig;
pub use entropy::{CryptoRngSource, EntropySource, OsEntropy};
pub use error::{RandomError, RandomResult};
pub use sampler::Sampler;
pub use sequence::Samples;

pub use num_bigint::BigUint;
pub use safe_random_types::{ErrorCode, MaskParameters, SampleCount};

/// Mask and byte count used to sample `[0, limit]`.
pub fn derive_mask_parameters(limit: &BigUint) -> MaskParameters {
    MaskParameters::for_limit(limit)
}

/// Integer assembled from `byte_count` OS-random bytes, least significant first.
pub fn sample_raw(byte_count: usize) -> RandomResult<BigUint> {
    Sampler::os().sample_raw(byte_count)
}

/// Uniform sample from `[0, limit]` using the OS CSPRNG.
pub fn sample_bounded(limit: &BigUint) -> RandomResult<BigUint> {
    Sampler::os().sample_bounded(limit)
}

/// Lazy sequence of `count` OS-backed samples from `[0, limit]`.
pub fn produce(limit: impl Into<BigUint>, count: impl Into<SampleCount>) -> Samples<OsEntropy> {
    Sampler::os().produce(limit, count)
}
