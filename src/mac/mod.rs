//! Message authentication codes.
//!
//! [`Mac`] is the keyed counterpart of [`Digest`](crate::hash::Digest):
//! same accumulate / finalize / reset lifecycle, but the output depends on a
//! secret key fixed at construction time.
//!
//! [`Hmac`] is the only construction provided. It is generic over any
//! [`Digest`](crate::hash::Digest) and only relies on its block length and
//! output length.

mod hmac;

use crate::algorithm::MacAlgorithm;

pub use hmac::Hmac;

/// A keyed, mutable MAC engine.
///
/// Producing a MAC resets the engine, ready for the next message under the
/// same key.
pub trait Mac {
    /// Algorithm implemented by this engine.
    fn algorithm(&self) -> MacAlgorithm;

    /// MAC length in bytes.
    fn output_len(&self) -> usize;

    /// Discards any accumulated input. The key is kept.
    fn reset(&mut self);

    /// Absorbs `data`.
    fn update(&mut self, data: &[u8]);

    /// Absorbs a single byte.
    fn update_byte(&mut self, byte: u8) {
        self.update(&[byte]);
    }

    /// Finalizes into `out`, then resets.
    ///
    /// # Panics
    /// Panics if `out.len() != self.output_len()`.
    fn digest_into(&mut self, out: &mut [u8]);

    /// Finalizes and returns the MAC, then resets.
    fn digest(&mut self) -> Vec<u8> {
        let mut out = vec![0u8; self.output_len()];
        self.digest_into(&mut out);
        out
    }

    /// Absorbs `data`, then finalizes and resets.
    fn digest_with(&mut self, data: &[u8]) -> Vec<u8> {
        self.update(data);
        self.digest()
    }
}
