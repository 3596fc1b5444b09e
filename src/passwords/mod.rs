//! Password hashing facade over SCrypt.
//!
//! [`Passwords`] fixes the SCrypt cost parameters, draws a fresh salt for
//! every hash and frames everything needed for verification into one
//! 51-byte blob (see [`blob`]). Verification never fails loudly: wrong
//! lengths and unusable parameters simply make it return `false`.
//!
//! The free functions use [`Passwords::default`].

pub mod blob;
mod core;
mod policy;

use crate::error::Result;

pub use self::blob::PasswordHash;
pub use self::core::Passwords;
pub use self::policy::PasswordPolicy;

/// Generates a 10-character alphanumeric password.
///
/// # Errors
/// Fails only if the OS entropy source cannot seed the generator.
pub fn generate() -> Result<String> {
    Passwords::default().generate()
}

/// Hashes `password` with the default policy and a random salt.
///
/// # Errors
/// Fails only if the OS entropy source cannot seed the generator.
pub fn hash(password: &str) -> Result<Vec<u8>> {
    Passwords::default().hash(password)
}

/// Checks `password` against `hash` with the default policy.
pub fn verify(password: &str, hash: &[u8]) -> bool {
    Passwords::default().verify(password, hash)
}
