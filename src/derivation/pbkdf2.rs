//! PBKDF2 per RFC 8018 §5.2

use zeroize::Zeroizing;

use super::Kdf;
use crate::algorithm::MacAlgorithm;
use crate::error::{Error, Result};
use crate::mac::Mac;

/// Configured PBKDF2 instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2 {
    mac: MacAlgorithm,
    iterations: u32,
    dk_len: usize,
}

impl Pbkdf2 {
    /// Validates and stores the parameters.
    pub fn new(mac: MacAlgorithm, iterations: u32, dk_len: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(Error::InvalidIterations);
        }

        if dk_len == 0 {
            return Err(Error::EmptyOutput);
        }

        // RFC 8018: dkLen <= (2^32 - 1) * hLen
        let max = (u32::MAX as usize).saturating_mul(mac.output_len());
        if dk_len > max {
            return Err(Error::OutputTooLong {
                requested: dk_len,
                max,
            });
        }

        Ok(Self {
            mac,
            iterations,
            dk_len,
        })
    }

    pub fn mac(&self) -> MacAlgorithm {
        self.mac
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Kdf for Pbkdf2 {
    fn derive_key(&self, secret: &[u8], salt: &[u8]) -> Vec<u8> {
        let mut prf = self.mac.new_mac(secret);
        let mut out = vec![0u8; self.dk_len];

        pbkdf2_into(&mut prf, salt, self.iterations, &mut out);
        out
    }

    fn output_len(&self) -> usize {
        self.dk_len
    }
}

/// Fills `out` with PBKDF2 output using `prf`, already keyed with the secret.
///
/// `out` must hold fewer than `2^32 - 1` PRF blocks; callers validate this.
pub(crate) fn pbkdf2_into<M: Mac>(prf: &mut M, salt: &[u8], iterations: u32, out: &mut [u8]) {
    let h_len = prf.output_len();
    let mut u = Zeroizing::new(vec![0u8; h_len]);
    let mut t = Zeroizing::new(vec![0u8; h_len]);

    for (i, chunk) in out.chunks_mut(h_len).enumerate() {
        // Block indices are 1-based, big-endian
        let index = (i as u32).wrapping_add(1);

        // U_1 = PRF(secret, salt || INT(i))
        prf.update(salt);
        prf.update(&index.to_be_bytes());
        prf.digest_into(&mut u);
        t.copy_from_slice(&u);

        // U_j = PRF(secret, U_{j-1}), T_i = U_1 ^ ... ^ U_c
        for _ in 1..iterations {
            prf.update(&u);
            prf.digest_into(&mut u);
            t.iter_mut().zip(u.iter()).for_each(|(a, b)| *a ^= b);
        }

        chunk.copy_from_slice(&t[..chunk.len()]);
    }
}
