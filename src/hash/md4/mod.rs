//! MD4 message digest (RFC 1320).
//!
//! MD4 is cryptographically broken and must not be used for new designs.
//! It is kept as a bit-exact reference digest and for interoperability with
//! legacy formats that still rely on it.
//!
//! - [`core`] holds the compression function and the streaming [`Md4`]
//!   engine.

pub mod core;

/// Initial chaining value (RFC 1320 §3.3), as little-endian words.
pub(crate) const MD4_INIT: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// Additive constant of round 2 (√2 · 2³⁰).
pub(crate) const ROUND2_K: u32 = 0x5a82_7999;

/// Additive constant of round 3 (√3 · 2³⁰).
pub(crate) const ROUND3_K: u32 = 0x6ed9_eba1;

pub use self::core::{Md4, md4};
