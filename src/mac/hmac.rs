//! HMAC per RFC 2104

use zeroize::{Zeroize, Zeroizing};

use super::Mac;
use crate::algorithm::MacAlgorithm;
use crate::hash::Digest;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC over an arbitrary digest engine.
///
/// The key is normalized once at construction: keys longer than the
/// digest's block length are replaced by their digest, shorter keys are
/// zero-padded to the block length. Both padded keys are kept (and wiped on
/// drop); the inner pass is primed with `K ⊕ ipad` on every reset.
#[derive(Clone)]
pub struct Hmac<D: Digest> {
    digest: D,
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: Zeroizing<Vec<u8>>,
    /// K ⊕ opad (0x5c repeated)
    k_opad: Zeroizing<Vec<u8>>,
}

impl<D: Digest> Hmac<D> {
    /// Keys `digest` with `key`.
    ///
    /// Any input already absorbed by `digest` is discarded.
    pub fn new(mut digest: D, key: &[u8]) -> Self {
        let block_len = digest.block_len();
        let mut key_block = Zeroizing::new(vec![0u8; block_len]);

        digest.reset();
        if key.len() > block_len {
            let mut hashed = digest.digest_with(key);
            key_block[..hashed.len()].copy_from_slice(&hashed);
            hashed.zeroize();
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let k_ipad: Zeroizing<Vec<u8>> =
            Zeroizing::new(key_block.iter().map(|b| b ^ IPAD).collect());
        let k_opad: Zeroizing<Vec<u8>> =
            Zeroizing::new(key_block.iter().map(|b| b ^ OPAD).collect());

        let mut mac = Self {
            digest,
            k_ipad,
            k_opad,
        };
        mac.reset();
        mac
    }

    /// Computes `HMAC(key, data)` in one call.
    pub fn mac(digest: D, key: &[u8], data: &[u8]) -> Vec<u8> {
        Self::new(digest, key).digest_with(data)
    }
}

impl<D: Digest> Mac for Hmac<D> {
    fn algorithm(&self) -> MacAlgorithm {
        MacAlgorithm::Hmac(self.digest.algorithm())
    }

    fn output_len(&self) -> usize {
        self.digest.output_len()
    }

    fn reset(&mut self) {
        self.digest.reset();
        self.digest.update(&self.k_ipad);
    }

    fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    fn digest_into(&mut self, out: &mut [u8]) {
        // Inner hash: H(K ⊕ ipad || message), resets the engine
        let mut inner = self.digest.digest();

        // Outer hash: H(K ⊕ opad || inner)
        self.digest.update(&self.k_opad);
        self.digest.update(&inner);
        self.digest.digest_into(out);

        inner.zeroize();
        self.reset();
    }
}
