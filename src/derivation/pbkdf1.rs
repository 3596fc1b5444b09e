//! PBKDF1 per RFC 8018 §5.1
//!
//! `T_1 = H(secret || salt)`, `T_i = H(T_{i-1})`; the key is the first
//! `dk_len` bytes of `T_c`. The output can never be longer than the digest.

use zeroize::Zeroizing;

use super::Kdf;
use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::hash::Digest;

/// Configured PBKDF1 instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf1 {
    algorithm: Algorithm,
    iterations: u32,
    dk_len: usize,
}

impl Pbkdf1 {
    /// Validates and stores the parameters.
    pub fn new(algorithm: Algorithm, iterations: u32, dk_len: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(Error::InvalidIterations);
        }

        if dk_len == 0 {
            return Err(Error::EmptyOutput);
        }

        if dk_len > algorithm.output_len() {
            return Err(Error::OutputTooLong {
                requested: dk_len,
                max: algorithm.output_len(),
            });
        }

        Ok(Self {
            algorithm,
            iterations,
            dk_len,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Kdf for Pbkdf1 {
    fn derive_key(&self, secret: &[u8], salt: &[u8]) -> Vec<u8> {
        let mut digest = self.algorithm.new_digest();

        digest.update(secret);
        digest.update(salt);
        let mut t = Zeroizing::new(digest.digest());

        for _ in 1..self.iterations {
            digest.update(&t);
            digest.digest_into(&mut t);
        }

        t[..self.dk_len].to_vec()
    }

    fn output_len(&self) -> usize {
        self.dk_len
    }
}
