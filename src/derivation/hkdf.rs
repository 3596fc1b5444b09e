//! HKDF per RFC 5869
//!
//! Two steps, both built on HMAC:
//!
//! - **extract**: `PRK = HMAC(salt, secret)`, where an empty salt stands for
//!   `hLen` zero bytes (HMAC zero-pads short keys, so both give the same PRK)
//! - **expand**: `T(i) = HMAC(PRK, T(i-1) || info || i)` with `T(0)` empty and
//!   a single-byte counter starting at 1; the output is the first `dk_len`
//!   bytes of `T(1) || T(2) || ...`
//!
//! The counter is one byte, so at most `255 * hLen` bytes can be produced.

use zeroize::Zeroizing;

use super::Kdf;
use crate::algorithm::MacAlgorithm;
use crate::error::{Error, Result};
use crate::mac::Mac;

/// Maximum number of expand blocks (the counter is a single byte).
const MAX_BLOCKS: usize = 255;

/// Configured HKDF instance.
///
/// The context `info` is fixed at construction, the salt and input keying
/// material are supplied on every [`derive_key`](Kdf::derive_key) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hkdf {
    mac: MacAlgorithm,
    info: Vec<u8>,
    dk_len: usize,
}

impl Hkdf {
    /// Validates and stores the parameters. `None` for `info` is the same as
    /// an empty context.
    pub fn new(mac: MacAlgorithm, info: Option<&[u8]>, dk_len: usize) -> Result<Self> {
        check_len(mac, dk_len)?;

        Ok(Self {
            mac,
            info: info.unwrap_or_default().to_vec(),
            dk_len,
        })
    }

    pub fn mac(&self) -> MacAlgorithm {
        self.mac
    }

    pub fn info(&self) -> &[u8] {
        &self.info
    }
}

impl Kdf for Hkdf {
    fn derive_key(&self, secret: &[u8], salt: &[u8]) -> Vec<u8> {
        let prk = Zeroizing::new(extract(self.mac, salt, secret));
        let mut out = vec![0u8; self.dk_len];

        expand_into(self.mac, &prk, &self.info, &mut out);
        out
    }

    fn output_len(&self) -> usize {
        self.dk_len
    }
}

fn check_len(mac: MacAlgorithm, dk_len: usize) -> Result<()> {
    if dk_len == 0 {
        return Err(Error::EmptyOutput);
    }

    let max = MAX_BLOCKS * mac.output_len();
    if dk_len > max {
        return Err(Error::OutputTooLong {
            requested: dk_len,
            max,
        });
    }

    Ok(())
}

/// HKDF-Extract: returns the pseudo-random key `HMAC(salt, secret)`.
pub fn extract(mac: MacAlgorithm, salt: &[u8], secret: &[u8]) -> Vec<u8> {
    mac.new_mac(salt).digest_with(secret)
}

/// HKDF-Expand: stretches `prk` into `dk_len` bytes bound to `info`.
///
/// # Errors
/// Fails unless `0 < dk_len <= 255 * mac.output_len()`.
pub fn expand(mac: MacAlgorithm, prk: &[u8], info: &[u8], dk_len: usize) -> Result<Vec<u8>> {
    check_len(mac, dk_len)?;

    let mut out = vec![0u8; dk_len];
    expand_into(mac, prk, info, &mut out);
    Ok(out)
}

fn expand_into(mac: MacAlgorithm, prk: &[u8], info: &[u8], out: &mut [u8]) {
    let mut prf = mac.new_mac(prk);
    let h_len = prf.output_len();

    // T(0) is empty; grows to hLen after the first block
    let mut t = Zeroizing::new(Vec::with_capacity(h_len));

    for (i, chunk) in out.chunks_mut(h_len).enumerate() {
        prf.update(&t);
        prf.update(info);
        prf.update_byte((i + 1) as u8);

        t.resize(h_len, 0);
        prf.digest_into(&mut t);

        chunk.copy_from_slice(&t[..chunk.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_salt_equals_zero_salt() {
        let zeros = [0u8; 32];

        assert_eq!(
            extract(MacAlgorithm::HMAC_SHA256, b"", b"ikm"),
            extract(MacAlgorithm::HMAC_SHA256, &zeros, b"ikm")
        );
    }

    #[test]
    fn none_info_is_empty_info() {
        let a = Hkdf::new(MacAlgorithm::HMAC_SHA1, None, 42).unwrap();
        let b = Hkdf::new(MacAlgorithm::HMAC_SHA1, Some(b"".as_slice()), 42).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.derive_key(b"ikm", b"salt"), b.derive_key(b"ikm", b"salt"));
    }

    #[test]
    fn derive_is_extract_then_expand() {
        let kdf = Hkdf::new(MacAlgorithm::HMAC_SHA256, Some(b"ctx".as_slice()), 70).unwrap();

        let prk = extract(MacAlgorithm::HMAC_SHA256, b"salt", b"ikm");
        let okm = expand(MacAlgorithm::HMAC_SHA256, &prk, b"ctx", 70).unwrap();

        assert_eq!(kdf.derive_key(b"ikm", b"salt"), okm);
    }

    #[test]
    fn length_bounds() {
        assert!(Hkdf::new(MacAlgorithm::HMAC_SHA1, None, 255 * 20).is_ok());
        assert_eq!(
            Hkdf::new(MacAlgorithm::HMAC_SHA1, None, 255 * 20 + 1),
            Err(Error::OutputTooLong {
                requested: 255 * 20 + 1,
                max: 255 * 20
            })
        );
        assert_eq!(
            expand(MacAlgorithm::HMAC_SHA1, b"prk", b"", 0),
            Err(Error::EmptyOutput)
        );
    }
}
