use crate::error::{RandomError, RandomResult};
use serde::{Deserialize, Serialize};

/// Retry cap used by [`SamplerConfig::hardened`].
pub const HARDENED_MAX_ATTEMPTS: u64 = 1024;

/// Sampler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Upper bound on draws per bounded sample. `None` retries until a
    /// candidate is accepted.
    #[serde(default)]
    pub max_attempts: Option<u64>,
}

impl SamplerConfig {
    /// Config for environments that must not loop without bound.
    ///
    /// Each draw is accepted with probability above one half, so exhausting
    /// the cap is less likely than `2^-1024`.
    pub fn hardened() -> Self {
        Self {
            max_attempts: Some(HARDENED_MAX_ATTEMPTS),
        }
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> RandomResult<()> {
        if self.max_attempts == Some(0) {
            return Err(RandomError::InvalidArgument(
                "max_attempts must allow at least one draw".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unbounded() {
        let cfg = SamplerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_attempts, None);
    }

    #[test]
    fn hardened_config_is_valid() {
        let cfg = SamplerConfig::hardened();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_attempts, Some(HARDENED_MAX_ATTEMPTS));
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let cfg = SamplerConfig {
            max_attempts: Some(0),
        };
        assert!(matches!(
            cfg.validate(),
            Err(RandomError::InvalidArgument(_))
        ));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let cfg: SamplerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SamplerConfig::default());

        let cfg: SamplerConfig = serde_json::from_str(r#"{"max_attempts": 16}"#).unwrap();
        assert_eq!(cfg.max_attempts, Some(16));
    }
}
