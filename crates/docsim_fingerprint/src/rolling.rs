use crate::{FingerprintConfig, FingerprintError};

/// Incremental polynomial hash of a fixed-width window sliding over a symbol
/// sequence.
///
/// The maintained invariant, with `k` the gram size and `value(s)` a symbol's
/// raw code point:
///
/// ```text
/// hash == ( sum of value(symbols[window_start + j]) * base^(k-1-j) for j in 0..k ) mod modulus
/// ```
///
/// `hash` is always the canonical non-negative residue in `[0, modulus)`.
/// Multiplications go through `u128`, so moduli up to 61-bit primes are safe
/// even with supplementary-plane code points as digits.
///
/// One instance is built per document and discarded once its fingerprint has
/// been extracted.
#[derive(Debug)]
pub struct RollingHash<'a> {
    symbols: &'a [char],
    gram_size: usize,
    base: u64,
    modulus: u64,
    /// base^(gram_size - 1) mod modulus, for removing the outgoing symbol.
    base_pow: u64,
    window_start: usize,
    window_end: usize,
    hash: u64,
}

impl<'a> RollingHash<'a> {
    /// Position the window over `symbols[0..gram_size]` and compute its hash
    /// via Horner's method.
    ///
    /// Fails with [`FingerprintError::InvalidWindow`] when the stream is
    /// shorter than the gram size; callers that want an empty-fingerprint
    /// result instead must check the length first (as [`crate::fingerprint`]
    /// does).
    pub fn new(symbols: &'a [char], cfg: &FingerprintConfig) -> Result<Self, FingerprintError> {
        cfg.validate()?;
        if symbols.len() < cfg.gram_size {
            return Err(FingerprintError::InvalidWindow {
                gram_size: cfg.gram_size,
                len: symbols.len(),
            });
        }

        let modulus = cfg.modulus;
        let mut hash = 0u64;
        for &ch in &symbols[..cfg.gram_size] {
            hash = mul_add_mod(hash, cfg.base, symbol_value(ch), modulus);
        }

        Ok(Self {
            symbols,
            gram_size: cfg.gram_size,
            base: cfg.base,
            modulus,
            base_pow: pow_mod(cfg.base, cfg.gram_size as u32 - 1, modulus),
            window_start: 0,
            window_end: cfg.gram_size,
            hash,
        })
    }

    /// The hash of the current window, in `[0, modulus)`.
    pub fn current(&self) -> u64 {
        self.hash
    }

    /// The symbols under the window, for diagnostics.
    pub fn current_window(&self) -> &'a [char] {
        &self.symbols[self.window_start..self.window_end]
    }

    /// Offset of the current window's first symbol.
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Advance the window one position; returns whether it advanced.
    ///
    /// The update removes the outgoing symbol's `value * base^(k-1)` term,
    /// shifts by `base`, and appends the incoming symbol. Intermediate
    /// subtraction is corrected by adding `modulus`, keeping every stored
    /// value a canonical residue.
    pub fn slide(&mut self) -> bool {
        if self.window_end >= self.symbols.len() {
            return false;
        }

        let outgoing = symbol_value(self.symbols[self.window_start]) % self.modulus;
        let removed = mul_mod(outgoing, self.base_pow, self.modulus);
        let shifted = (self.hash + self.modulus - removed) % self.modulus;
        self.hash = mul_add_mod(
            shifted,
            self.base,
            symbol_value(self.symbols[self.window_end]),
            self.modulus,
        );

        self.window_start += 1;
        self.window_end += 1;
        true
    }
}

/// A symbol's polynomial digit: its raw code point. The alphabet is
/// effectively unbounded and digits routinely exceed the base.
#[inline]
pub(crate) fn symbol_value(ch: char) -> u64 {
    u64::from(u32::from(ch))
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

#[inline]
fn mul_add_mod(h: u64, base: u64, v: u64, m: u64) -> u64 {
    ((u128::from(h) * u128::from(base) + u128::from(v)) % u128::from(m)) as u64
}

fn pow_mod(base: u64, mut exp: u32, m: u64) -> u64 {
    let mut acc = 1 % m;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}
