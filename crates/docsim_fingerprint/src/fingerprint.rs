use serde::{Deserialize, Serialize};

use crate::rolling::RollingHash;
use crate::{FingerprintConfig, FingerprintError};

/// A document fingerprint: one window hash per position, in window order.
///
/// Immutable once computed and owned by the document that produced it. Length
/// is `symbol_len - gram_size + 1`, or zero for streams too short to carry a
/// single window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fingerprint {
    /// Window hashes, ordered by window start offset. Duplicates are kept;
    /// the scorer decides how to weigh them.
    pub hashes: Vec<u64>,
    pub meta: FingerprintMeta,
}

/// Parameters a fingerprint was computed with, for traceability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintMeta {
    pub gram_size: usize,
    pub base: u64,
    pub modulus: u64,
    /// Length of the symbol stream the fingerprint was taken over.
    pub symbol_len: usize,
}

impl Fingerprint {
    /// Total number of window hashes, duplicates included.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

/// Fingerprint a symbol stream.
///
/// Streams shorter than the gram size (including the empty stream) produce an
/// empty fingerprint — a valid "no usable content" value, never an error.
/// Configuration problems are rejected before any hashing.
pub fn fingerprint(symbols: &str, cfg: &FingerprintConfig) -> Result<Fingerprint, FingerprintError> {
    cfg.validate()?;

    let symbols: Vec<char> = symbols.chars().collect();
    let meta = FingerprintMeta {
        gram_size: cfg.gram_size,
        base: cfg.base,
        modulus: cfg.modulus,
        symbol_len: symbols.len(),
    };

    if symbols.len() < cfg.gram_size {
        return Ok(Fingerprint {
            hashes: Vec::new(),
            meta,
        });
    }

    let mut rolling = RollingHash::new(&symbols, cfg)?;
    let mut hashes = Vec::with_capacity(symbols.len() - cfg.gram_size + 1);
    loop {
        hashes.push(rolling.current());
        if !rolling.slide() {
            break;
        }
    }

    Ok(Fingerprint { hashes, meta })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_symbols_minus_gram_plus_one() {
        let cfg = FingerprintConfig::default();
        let cases = [
            ("приветмирдокумент", 17 - 5 + 1),
            ("пятка", 1),
            ("пять", 0),
            ("", 0),
        ];
        for (text, expected) in cases {
            let fp = fingerprint(text, &cfg).unwrap();
            assert_eq!(fp.len(), expected, "text: {text:?}");
            assert_eq!(fp.meta.symbol_len, text.chars().count());
        }
    }

    #[test]
    fn short_stream_yields_empty_fingerprint_not_error() {
        let cfg = FingerprintConfig::default();
        let fp = fingerprint("миг", &cfg).unwrap();
        assert!(fp.is_empty());
        assert_eq!(fp.meta.gram_size, 5);
    }

    #[test]
    fn identical_streams_fingerprint_identically() {
        let cfg = FingerprintConfig::default();
        let a = fingerprint("тестовыйпотоксимволов", &cfg).unwrap();
        let b = fingerprint("тестовыйпотоксимволов", &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_windows_repeat_hashes() {
        let cfg = FingerprintConfig {
            gram_size: 2,
            ..Default::default()
        };
        // Windows: "ab" "bc" "ca" "ab" — first and last coincide.
        let fp = fingerprint("abcab", &cfg).unwrap();
        assert_eq!(fp.len(), 4);
        assert_eq!(fp.hashes[0], fp.hashes[3]);
        assert_ne!(fp.hashes[0], fp.hashes[1]);
    }

    #[test]
    fn small_modulus_collides_distinct_grams() {
        // Code points 5807 apart hash equally under the reference modulus:
        // a false-positive overlap, present in the design on purpose.
        let cfg = FingerprintConfig {
            gram_size: 1,
            ..Default::default()
        };
        let a = fingerprint("a", &cfg).unwrap();
        let colliding = char::from_u32('a' as u32 + 5807).unwrap();
        let b = fingerprint(&colliding.to_string(), &cfg).unwrap();
        assert_eq!(a.hashes, b.hashes);

        // A larger modulus separates the same pair.
        let wide = FingerprintConfig {
            gram_size: 1,
            modulus: (1 << 61) - 1,
            ..Default::default()
        };
        let a = fingerprint("a", &wide).unwrap();
        let b = fingerprint(&colliding.to_string(), &wide).unwrap();
        assert_ne!(a.hashes, b.hashes);
    }

    #[test]
    fn invalid_config_rejected_before_hashing() {
        let cfg = FingerprintConfig {
            gram_size: 0,
            ..Default::default()
        };
        let res = fingerprint("что угодно", &cfg);
        assert!(matches!(res, Err(FingerprintError::InvalidConfig(_))));
    }
}
