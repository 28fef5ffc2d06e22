use serde::{Deserialize, Serialize};
use std::fmt;

/// How many values a sample sequence yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SampleCount {
    Finite(u64),
    /// Never completes; the consumer decides when to stop pulling.
    #[default]
    Unbounded,
}

impl SampleCount {
    /// Remaining values, or `None` for an unbounded count.
    pub fn remaining(&self) -> Option<u64> {
        match self {
            SampleCount::Finite(n) => Some(*n),
            SampleCount::Unbounded => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, SampleCount::Finite(0))
    }

    /// Count down by one. Returns `false` if nothing was left to take.
    pub fn take_one(&mut self) -> bool {
        match self {
            SampleCount::Finite(0) => false,
            SampleCount::Finite(n) => {
                *n -= 1;
                true
            }
            SampleCount::Unbounded => true,
        }
    }
}

impl From<u64> for SampleCount {
    fn from(n: u64) -> Self {
        SampleCount::Finite(n)
    }
}

impl From<Option<u64>> for SampleCount {
    fn from(n: Option<u64>) -> Self {
        n.map_or(SampleCount::Unbounded, SampleCount::Finite)
    }
}

impl fmt::Display for SampleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleCount::Finite(n) => write!(f, "{n}"),
            SampleCount::Unbounded => write!(f, "unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(SampleCount::default(), SampleCount::Unbounded);
        assert_eq!(SampleCount::from(None), SampleCount::Unbounded);
        assert_eq!(SampleCount::from(Some(3)), SampleCount::Finite(3));
    }

    #[test]
    fn finite_counts_down_to_zero() {
        let mut count = SampleCount::from(2);
        assert!(count.take_one());
        assert!(count.take_one());
        assert!(count.is_exhausted());
        assert!(!count.take_one());
        assert_eq!(count.remaining(), Some(0));
    }

    #[test]
    fn unbounded_never_exhausts() {
        let mut count = SampleCount::Unbounded;
        for _ in 0..1000 {
            assert!(count.take_one());
        }
        assert!(!count.is_exhausted());
        assert_eq!(count.remaining(), None);
    }

    #[test]
    fn display() {
        assert_eq!(SampleCount::Finite(10).to_string(), "10");
        assert_eq!(SampleCount::Unbounded.to_string(), "unbounded");
    }
}
