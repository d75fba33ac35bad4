use serde::{Deserialize, Serialize};

use crate::FingerprintError;

/// Configuration for the fingerprint engine.
///
/// All parameters participate in the hash definition, so two corpora are only
/// comparable when built with identical configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintConfig {
    /// Semantic version of the fingerprint configuration.
    #[serde(default = "FingerprintConfig::default_version")]
    pub version: u32,
    /// Window width `k` in symbols (default 5).
    #[serde(default = "FingerprintConfig::default_gram_size")]
    pub gram_size: usize,
    /// Polynomial base (default 256). Symbol digits are raw code points, so
    /// the base does not bound digit magnitude; this is not a bounded-radix
    /// positional system.
    #[serde(default = "FingerprintConfig::default_base")]
    pub base: u64,
    /// Hash modulus (default 5807, the reference value). Small moduli keep
    /// hashes compact but make distinct windows collide; a larger prime
    /// (e.g. 2^61 - 1) reduces false-positive overlap at the cost of wider
    /// arithmetic.
    #[serde(default = "FingerprintConfig::default_modulus")]
    pub modulus: u64,
}

impl FingerprintConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_gram_size() -> usize {
        5
    }

    pub(crate) fn default_base() -> u64 {
        256
    }

    pub(crate) fn default_modulus() -> u64 {
        5807
    }

    /// Validate the configuration. Rejection happens here, eagerly, before
    /// any hashing.
    pub fn validate(&self) -> Result<(), FingerprintError> {
        if self.version == 0 {
            return Err(FingerprintError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.gram_size == 0 {
            return Err(FingerprintError::InvalidConfig(
                "gram_size must be >= 1".into(),
            ));
        }
        if self.base < 2 {
            return Err(FingerprintError::InvalidConfig("base must be >= 2".into()));
        }
        if self.modulus < 2 {
            return Err(FingerprintError::InvalidConfig(
                "modulus must be >= 2".into(),
            ));
        }
        Ok(())
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gram_size: Self::default_gram_size(),
            base: Self::default_base(),
            modulus: Self::default_modulus(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = FingerprintConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.gram_size, 5);
        assert_eq!(cfg.base, 256);
        assert_eq!(cfg.modulus, 5807);
    }

    #[test]
    fn zero_gram_size_rejected() {
        let cfg = FingerprintConfig {
            gram_size: 0,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            FingerprintError::InvalidConfig(msg) => assert!(msg.contains("gram_size")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn degenerate_base_and_modulus_rejected() {
        for (base, modulus) in [(1, 5807), (256, 1), (0, 0)] {
            let cfg = FingerprintConfig {
                base,
                modulus,
                ..Default::default()
            };
            assert!(cfg.validate().is_err(), "base={base} modulus={modulus}");
        }
    }
}
