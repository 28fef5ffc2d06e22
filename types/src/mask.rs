use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Bit mask and byte count covering a sampling limit.
///
/// `mask` is the smallest `2^k - 1` that is `>= limit`, and `byte_count`
/// is the number of whole bytes needed to hold `k` bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskParameters {
    pub mask: BigUint,
    pub byte_count: usize,
}

impl MaskParameters {
    /// Derive the parameters for sampling in `[0, limit]`.
    ///
    /// A zero limit needs no bits at all, giving a zero mask and zero bytes.
    pub fn for_limit(limit: &BigUint) -> Self {
        let bits = limit.bits();
        if bits == 0 {
            return Self {
                mask: BigUint::zero(),
                byte_count: 0,
            };
        }

        let mask = (BigUint::one() << bits) - 1u32;
        Self {
            mask,
            byte_count: bits.div_ceil(8) as usize,
        }
    }

    /// Number of significant bits in the mask.
    pub fn bits(&self) -> u64 {
        self.mask.bits()
    }

    /// Whether every masked candidate is accepted for this limit.
    pub fn is_exact(&self, limit: &BigUint) -> bool {
        &self.mask == limit
    }
}
