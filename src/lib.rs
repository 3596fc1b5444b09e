//! Digests, MACs and key derivation
//!
//! This crate provides the hashing and key-stretching building blocks needed
//! to derive keys from secrets and to store passwords safely.
//!
//! The focus is on **bit-exact, auditable constructions** with explicit
//! parameters, rather than on a large or opinionated API.
//!
//! # Module overview
//!
//! - `hash`
//!   The [`Digest`] trait and its engines. MD4, SHA-256 and SHA-512 are
//!   implemented here on a shared block engine; MD2, MD5, SHA-1 and the
//!   Keccak family wrap RustCrypto implementations behind the same trait.
//!
//! - `mac`
//!   The [`Mac`] trait and [`Hmac`](mac::Hmac), generic over any digest.
//!
//! - `derivation`
//!   The [`Kdf`] trait and its four constructions:
//!   - PBKDF1 and PBKDF2 (RFC 8018)
//!   - HKDF (RFC 5869)
//!   - SCrypt (RFC 7914)
//!
//!   Parameters are validated when a KDF is built; deriving never fails.
//!
//! - `passwords`
//!   A password facade over SCrypt: random generation, salted hashing into a
//!   self-describing 51-byte blob, and constant-time verification.
//!
//! - `rng`
//!   A ChaCha20 CSPRNG seeded from the operating system, one per thread.
//!
//! - `ct`
//!   Constant-time equality.
//!
//! Algorithms are named by the [`Algorithm`] and [`MacAlgorithm`] tags, which
//! parse from and display as their canonical names (`SHA-256`,
//! `HMAC-SHA-256`, ...).
//!
//! # Example
//!
//! ```rust
//! use keyderive::{Kdf, MacAlgorithm, derivation};
//!
//! let kdf = derivation::pbkdf2(MacAlgorithm::HMAC_SHA256, 1000, 32).unwrap();
//! let key = kdf.derive_key(b"secret", b"salt");
//!
//! assert_eq!(key.len(), 32);
//! ```

mod algorithm;
mod error;

pub mod ct;
pub mod derivation;
pub mod hash;
pub mod mac;
pub mod passwords;
pub mod rng;

pub use algorithm::{Algorithm, DynDigest, MacAlgorithm};
pub use derivation::Kdf;
pub use error::{Error, Result};
pub use hash::Digest;
pub use mac::Mac;
