//! ChaCha20-based CSPRNG
//!
//! A deterministic random bit generator expanded with the ChaCha20 block
//! function:
//! - seeded once from the operating system through `getrandom`
//! - output produced in 64-byte keystream blocks
//! - rekeyed after every request, so a leaked state does not reveal
//!   earlier output
//! - key wiped on drop

use zeroize::Zeroize;

use super::chacha20::block;
use crate::error::{Error, Result};

/// Cryptographically secure pseudorandom number generator.
///
/// Internally it keeps a ChaCha20 key, a fixed all-zero nonce and a block
/// counter.
pub struct Csprng {
    key: [u8; 32],

    /// 96-bit nonce, fixed to zero for DRBG usage
    nonce: [u8; 12],

    counter: u32,
}

impl Csprng {
    /// Creates a generator seeded from operating system entropy.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if the OS entropy source fails.
    pub fn from_os() -> Result<Self> {
        let mut seed = [0u8; 32];
        getrandom::fill(&mut seed).map_err(|_| Error::Entropy)?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable; the same seed
    /// always yields the same stream. The local copy is wiped once absorbed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.zeroize();

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with random bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let mut keystream = block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&keystream[..chunk.len()]);
            keystream.zeroize();
        }

        self.rekey();
    }

    /// Returns a uniformly distributed `u32`.
    pub fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    /// Returns a uniformly distributed integer in `0..bound`.
    ///
    /// Draws falling in the incomplete top range are rejected, so the
    /// result carries no modulo bias.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be positive");

        // 2^32 mod bound
        let threshold = bound.wrapping_neg() % bound;

        loop {
            let x = self.next_u32();
            if x >= threshold {
                return x % bound;
            }
        }
    }

    /// Replaces the key with the first half of a fresh keystream block.
    fn rekey(&mut self) {
        let mut keystream = block(&self.key, self.counter, &self.nonce);
        self.counter = self.counter.wrapping_add(1);

        self.key.copy_from_slice(&keystream[..32]);
        keystream.zeroize();
    }
}

impl Drop for Csprng {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}
