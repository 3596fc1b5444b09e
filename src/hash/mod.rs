//! Hash algorithms exposed by the crate.
//!
//! Every digest implements the [`Digest`] trait: a mutable engine that
//! absorbs input through [`Digest::update`] and produces a fixed-length
//! output through [`Digest::digest`].
//!
//! MD4, SHA-256 and SHA-512 are implemented in this crate on top of a shared
//! Merkle–Damgård block engine. MD2, MD5, SHA-1 and Keccak are wrapped
//! RustCrypto implementations.
//!
//! Engines are not meant to be shared between threads; give every logical
//! computation its own instance.

pub(crate) mod engine;
mod external;
pub mod md4;
pub mod sha256;
pub mod sha512;

use crate::algorithm::Algorithm;

pub use engine::Phase;
pub use external::{Keccak224, Keccak256, Keccak384, Keccak512, Md2, Md5, Sha1};
pub use md4::{Md4, md4};
pub use sha256::{Sha256, sha256};
pub use sha512::{Sha512, sha512};

/// A mutable hash engine.
///
/// # Lifecycle
///
/// A freshly constructed engine is in its canonical initial state. Calls to
/// [`update`](Digest::update) accumulate input. Any of the `digest*` methods
/// pads and finalizes the accumulated input, writes the output, and then
/// **resets the engine** to its initial state, so the same instance can be
/// used for the next message straight away.
pub trait Digest {
    /// Algorithm implemented by this engine.
    fn algorithm(&self) -> Algorithm;

    /// Digest length in bytes.
    fn output_len(&self) -> usize {
        self.algorithm().output_len()
    }

    /// Internal block length in bytes (HMAC pads keys to this size).
    fn block_len(&self) -> usize {
        self.algorithm().block_len()
    }

    /// Discards any accumulated input.
    fn reset(&mut self);

    /// Absorbs `data`. An empty slice is a no-op.
    ///
    /// A window `(bytes, offset, length)` is passed as
    /// `&bytes[offset..offset + length]`.
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

    /// Finalizes and returns the digest, then resets.
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

impl<D: Digest + ?Sized> Digest for Box<D> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn output_len(&self) -> usize {
        (**self).output_len()
    }

    fn block_len(&self) -> usize {
        (**self).block_len()
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn update_byte(&mut self, byte: u8) {
        (**self).update_byte(byte);
    }

    fn digest_into(&mut self, out: &mut [u8]) {
        (**self).digest_into(out);
    }
}
