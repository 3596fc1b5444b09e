//! SCrypt memory-hard key derivation (RFC 7914).
//!
//! SCrypt makes brute-force attacks expensive by forcing every evaluation to
//! fill and then randomly revisit a large working set, so that cheap
//! parallel hardware is bottlenecked on memory rather than on arithmetic.
//!
//! # Algorithm Overview
//!
//! 1. **Stretch**: `B = PBKDF2-HMAC-SHA-256(secret, salt, 1, p * 128 * r)`.
//! 2. **Mix**: split `B` into `p` slices of `128 * r` bytes and run each
//!    through ROMix:
//!    - fill `V[0..n]` with `X, BlockMix(X), BlockMix²(X), ...`
//!    - `n` times: `j = Integerify(X) mod n`, `X = BlockMix(X ⊕ V[j])`
//! 3. **Compress**: `DK = PBKDF2-HMAC-SHA-256(secret, B, 1, dk_len)`.
//!
//! BlockMix applies Salsa20/8 to each 64-byte sub-block chained with the
//! previous result, then de-interleaves the outputs: even-indexed results go
//! to the first half, odd-indexed ones to the second half.
//!
//! # Memory
//!
//! `V` takes `128 * r * n` bytes. It is allocated once per derivation,
//! reused for each of the `p` slices and wiped afterwards.

pub(crate) mod block;
pub mod core;
pub(crate) mod memory;
pub mod params;

pub use self::core::Scrypt;
pub use self::params::ScryptParams;
