use tracing::trace;
use zeroize::Zeroizing;

use super::memory::RomixArena;
use super::params::ScryptParams;
use crate::derivation::Kdf;
use crate::derivation::pbkdf2::pbkdf2_into;
use crate::hash::Sha256;
use crate::mac::Hmac;

/// SCrypt key derivation with fixed cost parameters.
///
/// # Example
///
/// ```rust
/// use keyderive::derivation::{Kdf, Scrypt, ScryptParams};
///
/// let params = ScryptParams::from_cost(8, 1024, 1, 32).unwrap();
/// let key = Scrypt::new(params).derive_key(b"password", b"NaCl");
///
/// assert_eq!(key.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrypt {
    params: ScryptParams,
}

impl Scrypt {
    pub fn new(params: ScryptParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScryptParams {
        &self.params
    }
}

impl Default for Scrypt {
    fn default() -> Self {
        Self::new(ScryptParams::default())
    }
}

impl Kdf for Scrypt {
    fn derive_key(&self, secret: &[u8], salt: &[u8]) -> Vec<u8> {
        let params = &self.params;
        trace!(
            n = params.n(),
            r = params.r(),
            p = params.p(),
            dk_len = params.dk_len(),
            "deriving scrypt key"
        );

        let r = params.r() as usize;
        let block_len = 128 * r;

        // Both PBKDF2 passes use the same key, so one PRF serves both
        let mut prf = Hmac::new(Sha256::new(), secret);

        let mut b = Zeroizing::new(vec![0u8; block_len * params.p() as usize]);
        pbkdf2_into(&mut prf, salt, 1, &mut b);

        let mut arena = RomixArena::new(params.log_n(), r);
        for slice in b.chunks_exact_mut(block_len) {
            arena.romix(slice);
        }

        let mut out = vec![0u8; params.dk_len()];
        pbkdf2_into(&mut prf, &b, 1, &mut out);
        out
    }

    fn output_len(&self) -> usize {
        self.params.dk_len()
    }
}
