//! Algorithm identifiers.
//!
//! [`Algorithm`] names a digest, [`MacAlgorithm`] names a keyed MAC built
//! over one. Both are plain tags: they carry no state and are only used to
//! look up a constructor, the fixed output length and the display name.
//!
//! All lookups go through a single table indexed by the digest tag, so each
//! identifier maps to exactly one implementation and one output length.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::hash::{
    Digest, Keccak224, Keccak256, Keccak384, Keccak512, Md2, Md4, Md5, Sha1, Sha256, Sha512,
};
use crate::mac::Hmac;

/// Boxed digest engine as produced by the lookup table.
pub type DynDigest = Box<dyn Digest + Send>;

/// Digest algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Md2,
    Md4,
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Keccak224,
    Keccak256,
    Keccak384,
    Keccak512,
}

struct Entry {
    algorithm: Algorithm,
    name: &'static str,
    output_len: usize,
    block_len: usize,
    new: fn() -> DynDigest,
}

fn boxed<D: Digest + Default + Send + 'static>() -> DynDigest {
    Box::new(D::default())
}

/// Indexed by `Algorithm as usize`.
#[rustfmt::skip]
static TABLE: [Entry; 10] = [
    Entry { algorithm: Algorithm::Md2, name: "MD2", output_len: 16, block_len: 16, new: boxed::<Md2> },
    Entry { algorithm: Algorithm::Md4, name: "MD4", output_len: 16, block_len: 64, new: boxed::<Md4> },
    Entry { algorithm: Algorithm::Md5, name: "MD5", output_len: 16, block_len: 64, new: boxed::<Md5> },
    Entry { algorithm: Algorithm::Sha1, name: "SHA1", output_len: 20, block_len: 64, new: boxed::<Sha1> },
    Entry { algorithm: Algorithm::Sha256, name: "SHA-256", output_len: 32, block_len: 64, new: boxed::<Sha256> },
    Entry { algorithm: Algorithm::Sha512, name: "SHA-512", output_len: 64, block_len: 128, new: boxed::<Sha512> },
    Entry { algorithm: Algorithm::Keccak224, name: "Keccak-224", output_len: 28, block_len: 144, new: boxed::<Keccak224> },
    Entry { algorithm: Algorithm::Keccak256, name: "Keccak-256", output_len: 32, block_len: 136, new: boxed::<Keccak256> },
    Entry { algorithm: Algorithm::Keccak384, name: "Keccak-384", output_len: 48, block_len: 104, new: boxed::<Keccak384> },
    Entry { algorithm: Algorithm::Keccak512, name: "Keccak-512", output_len: 64, block_len: 72, new: boxed::<Keccak512> },
];

impl Algorithm {
    /// Every supported digest, in table order.
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Md2,
        Algorithm::Md4,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
        Algorithm::Keccak224,
        Algorithm::Keccak256,
        Algorithm::Keccak384,
        Algorithm::Keccak512,
    ];

    fn entry(self) -> &'static Entry {
        &TABLE[self as usize]
    }

    /// Canonical display name, e.g. `SHA-256`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        self.entry().output_len
    }

    /// Internal block length in bytes.
    pub fn block_len(self) -> usize {
        self.entry().block_len
    }

    /// Constructs a fresh engine for this algorithm.
    pub fn new_digest(self) -> DynDigest {
        (self.entry().new)()
    }

    /// Hashes `data` in one call.
    pub fn hash(self, data: &[u8]) -> Vec<u8> {
        self.new_digest().digest_with(data)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TABLE
            .iter()
            .find(|entry| entry.name == s)
            .map(|entry| entry.algorithm)
            .ok_or(Error::UnknownAlgorithm)
    }
}

/// MAC algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
    /// HMAC (RFC 2104) over the given digest.
    Hmac(Algorithm),
}

impl MacAlgorithm {
    pub const HMAC_MD4: MacAlgorithm = MacAlgorithm::Hmac(Algorithm::Md4);
    pub const HMAC_SHA1: MacAlgorithm = MacAlgorithm::Hmac(Algorithm::Sha1);
    pub const HMAC_SHA256: MacAlgorithm = MacAlgorithm::Hmac(Algorithm::Sha256);
    pub const HMAC_SHA512: MacAlgorithm = MacAlgorithm::Hmac(Algorithm::Sha512);

    /// Underlying digest.
    pub fn digest(self) -> Algorithm {
        match self {
            MacAlgorithm::Hmac(algorithm) => algorithm,
        }
    }

    /// MAC length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            MacAlgorithm::Hmac(algorithm) => algorithm.output_len(),
        }
    }

    /// Constructs a MAC engine keyed with `key`.
    pub fn new_mac(self, key: &[u8]) -> Hmac<DynDigest> {
        match self {
            MacAlgorithm::Hmac(algorithm) => Hmac::new(algorithm.new_digest(), key),
        }
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacAlgorithm::Hmac(algorithm) => write!(f, "HMAC-{algorithm}"),
        }
    }
}

impl FromStr for MacAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digest = s.strip_prefix("HMAC-").ok_or(Error::UnknownAlgorithm)?;
        digest.parse().map(MacAlgorithm::Hmac)
    }
}
