use crate::entropy::EntropySource;
use crate::error::RandomResult;
use crate::sampler::Sampler;
use num_bigint::BigUint;
use safe_random_types::SampleCount;
use std::iter::FusedIterator;

/// Lazy sequence of unbiased samples from `[0, limit]`.
///
/// Each `next()` performs one bounded sample; nothing is drawn ahead of
/// time, so dropping the sequence early wastes no entropy. A failed draw is
/// yielded once as `Err` and ends the sequence.
#[derive(Debug)]
pub struct Samples<E> {
    sampler: Sampler<E>,
    limit: BigUint,
    remaining: SampleCount,
}

impl<E: EntropySource> Samples<E> {
    pub(crate) fn new(sampler: Sampler<E>, limit: BigUint, count: SampleCount) -> Self {
        tracing::debug!(limit_bits = limit.bits(), count = %count, "starting sample sequence");
        Self {
            sampler,
            limit,
            remaining: count,
        }
    }

    pub fn limit(&self) -> &BigUint {
        &self.limit
    }

    pub fn remaining(&self) -> SampleCount {
        self.remaining
    }

    /// Stop the sequence and hand back the sampler.
    pub fn into_sampler(self) -> Sampler<E> {
        self.sampler
    }
}

impl<E: EntropySource> Iterator for Samples<E> {
    type Item = RandomResult<BigUint>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.remaining.take_one() {
            return None;
        }

        let sample = self.sampler.sample_bounded(&self.limit);
        if sample.is_err() {
            self.remaining = SampleCount::Finite(0);
        }
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            // an error can end the sequence after a single item
            SampleCount::Finite(0) => (0, Some(0)),
            SampleCount::Finite(n) => (1, usize::try_from(n).ok()),
            SampleCount::Unbounded => (1, None),
        }
    }
}

impl<E: EntropySource> FusedIterator for Samples<E> {}
