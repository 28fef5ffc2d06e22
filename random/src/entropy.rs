//! Entropy sources feeding the byte sampler.
//!
//! Sampling never reaches for a hidden global generator. Every sampler is
//! handed an [`EntropySource`]: the OS CSPRNG in production, or any
//! `rand_core` generator that is marked `CryptoRng` (seeded ones included,
//! which keeps tests deterministic).

use crate::error::{RandomError, RandomResult};
use rand_core::{CryptoRng, RngCore};

/// A supplier of unpredictable bytes suitable for security-sensitive use.
pub trait EntropySource {
    /// Fill `dest` entirely or fail. Partial fills are never reported as success.
    fn fill(&mut self, dest: &mut [u8]) -> RandomResult<()>;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill(&mut self, dest: &mut [u8]) -> RandomResult<()> {
        (**self).fill(dest)
    }
}

/// OS-backed cryptographically secure entropy.
///
/// Uses `getrandom::fill()`, which is safe to call from many threads at once.
/// A failing OS source is returned as [`RandomError::Entropy`] rather than
/// papered over; callers get no bytes in that case.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> RandomResult<()> {
        getrandom::fill(dest).map_err(|e| {
            tracing::debug!(bytes = dest.len(), error = %e, "OS entropy source failed");
            RandomError::Entropy(e.to_string())
        })
    }
}

/// Adapter for `rand_core` generators that are cryptographically secure.
///
/// The `CryptoRng` bound keeps statistical-only generators out. Not `Clone`:
/// two copies of one generator would replay the same bytes.
///
/// ```compile_fail
/// use rand::{rngs::StdRng, SeedableRng};
/// use safe_random::CryptoRngSource;
///
/// let source = CryptoRngSource::new(StdRng::seed_from_u64(1));
/// let _twin = source.clone();
/// ```
#[derive(Debug)]
pub struct CryptoRngSource<R>(pub R);

impl<R: RngCore + CryptoRng> CryptoRngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore + CryptoRng> EntropySource for CryptoRngSource<R> {
    fn fill(&mut self, dest: &mut [u8]) -> RandomResult<()> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| RandomError::Entropy(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedEntropy;


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn os_entropy_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn os_entropy_empty_buffer() {
        OsEntropy.fill(&mut []).unwrap();
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = CryptoRngSource::new(StdRng::seed_from_u64(7));
        let mut b = CryptoRngSource::new(StdRng::seed_from_u64(7));
        let mut x = [0u8; 16];
        let mut y = [0u8; 16];
        a.fill(&mut x).unwrap();
        b.fill(&mut y).unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn borrowed_source_advances_owner() {
        fn fill_two<E: EntropySource>(mut source: E) -> [u8; 2] {
            let mut buf = [0u8; 2];
            source.fill(&mut buf).unwrap();
            buf
        }

        let mut script = ScriptedEntropy::new([1, 2, 3]);
        assert_eq!(fill_two(&mut script), [1, 2]);
        assert_eq!(script.remaining(), 1);
    }

    #[test]
    fn drained_script_fails() {
        let mut script = ScriptedEntropy::new([9]);
        let err = script.fill(&mut [0u8; 2]).unwrap_err();
        assert!(matches!(err, RandomError::Entropy(_)));
        assert_eq!(script.remaining(), 1);
    }
}
