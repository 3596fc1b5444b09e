//! Persisted password hash layout.
//!
//! ```text
//! offset  0            32           48      49  50
//!         | key (32)   | salt (16)  | log_n | r | p |
//! ```
//!
//! 51 bytes in total. The layout is a storage format and never changes.

use crate::derivation::ScryptParams;
use crate::error::Result;

/// Derived key length.
pub const KEY_LEN: usize = 32;

/// Salt length.
pub const SALT_LEN: usize = 16;

/// Total blob length.
pub const HASH_LEN: usize = KEY_LEN + SALT_LEN + 3;

const LOG_N_AT: usize = KEY_LEN + SALT_LEN;

/// Parsed view of a password hash blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHash {
    key: [u8; KEY_LEN],
    salt: [u8; SALT_LEN],
    log_n: u8,
    r: u8,
    p: u8,
}

impl PasswordHash {
    /// Parses a blob of exactly [`HASH_LEN`] bytes.
    ///
    /// Only the length is checked; the embedded parameters may still be
    /// unusable for SCrypt (see [`PasswordHash::params`]).
    pub fn parse(blob: &[u8]) -> Option<Self> {
        <&[u8; HASH_LEN]>::try_from(blob).ok().map(Self::from_bytes)
    }

    pub(crate) fn from_bytes(blob: &[u8; HASH_LEN]) -> Self {
        let mut key = [0u8; KEY_LEN];
        let mut salt = [0u8; SALT_LEN];
        key.copy_from_slice(&blob[..KEY_LEN]);
        salt.copy_from_slice(&blob[KEY_LEN..LOG_N_AT]);

        Self {
            key,
            salt,
            log_n: blob[LOG_N_AT],
            r: blob[LOG_N_AT + 1],
            p: blob[LOG_N_AT + 2],
        }
    }

    pub(crate) fn new(key: [u8; KEY_LEN], salt: [u8; SALT_LEN], params: &ScryptParams) -> Self {
        // Parameters produced by the facade always fit one byte
        Self {
            key,
            salt,
            log_n: params.log_n(),
            r: params.r() as u8,
            p: params.p() as u8,
        }
    }

    /// Serializes back to the 51-byte layout.
    pub fn to_bytes(&self) -> [u8; HASH_LEN] {
        let mut out = [0u8; HASH_LEN];
        out[..KEY_LEN].copy_from_slice(&self.key);
        out[KEY_LEN..LOG_N_AT].copy_from_slice(&self.salt);
        out[LOG_N_AT] = self.log_n;
        out[LOG_N_AT + 1] = self.r;
        out[LOG_N_AT + 2] = self.p;
        out
    }

    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn log_n(&self) -> u8 {
        self.log_n
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn p(&self) -> u8 {
        self.p
    }

    /// Embedded parameters as SCrypt parameters with a [`KEY_LEN`] output.
    ///
    /// # Errors
    /// Fails if the embedded values are not valid SCrypt parameters.
    pub fn params(&self) -> Result<ScryptParams> {
        ScryptParams::new(self.log_n, self.r.into(), self.p.into(), KEY_LEN)
    }
}
