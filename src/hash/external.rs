//! Digests backed by the RustCrypto implementations.
//!
//! MD2, MD5, SHA-1 and the original (pre-SHA-3 padding) Keccak variants are
//! not implemented in this crate. They are wrapped behind [`Digest`] so that
//! HMAC and the KDFs can use them exactly like the in-crate engines.

use crate::algorithm::Algorithm;
use crate::hash::Digest;

macro_rules! wrapped_digest {
    ($(#[$doc:meta])* $name:ident, $inner:ty, $algorithm:expr) => {
        $(#[$doc])*
        #[derive(Clone, Default)]
        pub struct $name {
            inner: $inner,
        }

        impl $name {
            /// Creates an engine in the initial state.
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Digest for $name {
            fn algorithm(&self) -> Algorithm {
                $algorithm
            }

            fn reset(&mut self) {
                digest::Digest::reset(&mut self.inner);
            }

            fn update(&mut self, data: &[u8]) {
                digest::Digest::update(&mut self.inner, data);
            }

            fn digest_into(&mut self, out: &mut [u8]) {
                let output = digest::Digest::finalize_reset(&mut self.inner);
                out.copy_from_slice(&output);
            }
        }
    };
}

wrapped_digest!(
    /// MD2 (RFC 1319).
    Md2,
    md2::Md2,
    Algorithm::Md2
);

wrapped_digest!(
    /// MD5 (RFC 1321).
    Md5,
    md5::Md5,
    Algorithm::Md5
);

wrapped_digest!(
    /// SHA-1 (FIPS 180-4).
    Sha1,
    sha1::Sha1,
    Algorithm::Sha1
);

wrapped_digest!(
    /// Keccak with a 224-bit output and the original `0x01` padding.
    Keccak224,
    sha3::Keccak224,
    Algorithm::Keccak224
);

wrapped_digest!(
    /// Keccak with a 256-bit output and the original `0x01` padding.
    Keccak256,
    sha3::Keccak256,
    Algorithm::Keccak256
);

wrapped_digest!(
    /// Keccak with a 384-bit output and the original `0x01` padding.
    Keccak384,
    sha3::Keccak384,
    Algorithm::Keccak384
);

wrapped_digest!(
    /// Keccak with a 512-bit output and the original `0x01` padding.
    Keccak512,
    sha3::Keccak512,
    Algorithm::Keccak512
);
