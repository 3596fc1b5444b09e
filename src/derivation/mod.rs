//! Key derivation functions.
//!
//! Every KDF is an immutable value holding only its parameters. Parameters
//! are validated when the value is built, so [`Kdf::derive_key`] cannot
//! fail: it is a pure function of `(secret, salt)`.
//!
//! Each call allocates its own buffers and builds fresh digest/MAC engines,
//! which makes a single KDF value safe to share between threads.
//!
//! | Function      | Construction                                    |
//! |---------------|-------------------------------------------------|
//! | [`pbkdf1`]    | iterated digest (RFC 8018 §5.1)                 |
//! | [`pbkdf2`]    | iterated, XOR-folded HMAC (RFC 8018 §5.2)       |
//! | [`hkdf`]      | HMAC extract-then-expand (RFC 5869)             |
//! | [`scrypt()`]  | memory-hard ROMix over PBKDF2-HMAC-SHA-256      |

pub mod hkdf;
pub mod pbkdf1;
pub mod pbkdf2;
pub mod scrypt;

use tracing::debug;

use crate::algorithm::{Algorithm, MacAlgorithm};
use crate::error::Result;

pub use hkdf::Hkdf;
pub use pbkdf1::Pbkdf1;
pub use pbkdf2::Pbkdf2;
pub use scrypt::{Scrypt, ScryptParams};

/// A configured key derivation function.
pub trait Kdf: Send + Sync {
    /// Derives `output_len()` bytes from `secret` and `salt`.
    fn derive_key(&self, secret: &[u8], salt: &[u8]) -> Vec<u8>;

    /// Length of the derived key in bytes.
    fn output_len(&self) -> usize;
}

/// PBKDF1 over `algorithm`, producing `dk_len` bytes.
///
/// # Errors
/// Fails if `iterations` or `dk_len` is zero, or if `dk_len` exceeds the
/// digest length.
pub fn pbkdf1(algorithm: Algorithm, iterations: u32, dk_len: usize) -> Result<Pbkdf1> {
    Pbkdf1::new(algorithm, iterations, dk_len)
        .inspect_err(|e| debug!(%e, %algorithm, "rejected pbkdf1 parameters"))
}

/// PBKDF2 with `mac` as pseudo-random function, producing `dk_len` bytes.
///
/// # Errors
/// Fails if `iterations` or `dk_len` is zero, or if `dk_len` exceeds
/// `(2^32 - 1) * mac.output_len()`.
pub fn pbkdf2(mac: MacAlgorithm, iterations: u32, dk_len: usize) -> Result<Pbkdf2> {
    Pbkdf2::new(mac, iterations, dk_len)
        .inspect_err(|e| debug!(%e, %mac, "rejected pbkdf2 parameters"))
}

/// HKDF with `mac`, optional context `info` and `dk_len` output bytes.
///
/// `None` for `info` is the same as an empty context.
///
/// # Errors
/// Fails unless `0 < dk_len <= 255 * mac.output_len()`.
pub fn hkdf(mac: MacAlgorithm, info: Option<&[u8]>, dk_len: usize) -> Result<Hkdf> {
    Hkdf::new(mac, info, dk_len).inspect_err(|e| debug!(%e, %mac, "rejected hkdf parameters"))
}

/// SCrypt with block size `r`, cost `n`, parallelization `p` and `dk_len`
/// output bytes.
///
/// # Errors
/// Fails if any of the cost parameters is out of range; see
/// [`ScryptParams::from_cost`].
pub fn scrypt(r: u32, n: u64, p: u32, dk_len: usize) -> Result<Scrypt> {
    ScryptParams::from_cost(r, n, p, dk_len)
        .map(Scrypt::new)
        .inspect_err(|e| debug!(%e, r, n, p, "rejected scrypt parameters"))
}
