use crate::config::SamplerConfig;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::{RandomError, RandomResult};
use crate::sequence::Samples;
use num_bigint::BigUint;
use num_traits::Zero;
use safe_random_types::{MaskParameters, SampleCount};
use zeroize::Zeroizing;

/// Unbiased sampler over an injected entropy source.
///
/// Holds no state between calls apart from the source itself; every
/// sample is drawn from fresh entropy. Cloning is only available for
/// sources that are `Clone`; a cloned seeded source repeats its stream.
#[derive(Debug, Clone)]
pub struct Sampler<E> {
    source: E,
    config: SamplerConfig,
}

impl Sampler<OsEntropy> {
    /// Sampler backed by the OS CSPRNG with the default config.
    pub fn os() -> Self {
        Self::new(OsEntropy)
    }
}

impl<E: EntropySource> Sampler<E> {
    pub fn new(source: E) -> Self {
        Self {
            source,
            config: SamplerConfig::default(),
        }
    }

    /// Create a sampler after validating `config`.
    pub fn with_config(source: E, config: SamplerConfig) -> RandomResult<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Borrow this sampler's source for a shorter-lived sampler or sequence.
    pub fn by_ref(&mut self) -> Sampler<&mut E> {
        Sampler {
            source: &mut self.source,
            config: self.config,
        }
    }

    pub fn into_source(self) -> E {
        self.source
    }

    /// Draw `byte_count` bytes and assemble them least-significant first.
    ///
    /// The result lies in `[0, 2^(8 * byte_count) - 1]`. Zero bytes yields
    /// zero without touching the source.
    pub fn sample_raw(&mut self, byte_count: usize) -> RandomResult<BigUint> {
        if byte_count == 0 {
            return Ok(BigUint::zero());
        }

        let mut buf = Zeroizing::new(vec![0u8; byte_count]);
        self.source.fill(&mut buf)?;
        Ok(BigUint::from_bytes_le(&buf))
    }

    /// Uniformly sample from `[0, limit]` by masking and rejection.
    ///
    /// Fails with [`RandomError::ExhaustedRetries`] only when the config
    /// caps the number of attempts.
    pub fn sample_bounded(&mut self, limit: &BigUint) -> RandomResult<BigUint> {
        let params = MaskParameters::for_limit(limit);
        let mut attempts: u64 = 0;

        loop {
            attempts += 1;
            let candidate = self.sample_raw(params.byte_count)? & &params.mask;
            if &candidate <= limit {
                return Ok(candidate);
            }

            tracing::trace!(
                attempt = attempts,
                bytes = params.byte_count,
                "rejected candidate above limit"
            );

            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    tracing::warn!(
                        attempts,
                        limit_bits = limit.bits(),
                        "bounded sampling gave up"
                    );
                    return Err(RandomError::ExhaustedRetries { attempts });
                }
            }
        }
    }

    /// [`Self::sample_bounded`] for machine-word limits.
    pub fn sample_bounded_u64(&mut self, limit: u64) -> RandomResult<u64> {
        let value = self.sample_bounded(&BigUint::from(limit))?;
        // value <= limit, so it has at most one 64-bit digit
        Ok(value.iter_u64_digits().next().unwrap_or(0))
    }

    /// Lazily yield `count` samples from `[0, limit]`.
    pub fn produce(self, limit: impl Into<BigUint>, count: impl Into<SampleCount>) -> Samples<E> {
        Samples::new(self, limit.into(), count.into())
    }
}
