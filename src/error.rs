//! Crate-wide error type.
//!
//! Every variant describes a parameter problem detected when a KDF or
//! algorithm handle is constructed. Once a value exists, the computations it
//! performs cannot fail.

use thiserror::Error;

/// Errors raised while constructing algorithms and key derivation functions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The name does not match any known digest or MAC algorithm.
    #[error("unknown algorithm name")]
    UnknownAlgorithm,

    /// Iteration counts must be at least 1.
    #[error("iteration count must be positive")]
    InvalidIterations,

    /// Requested output length is zero.
    #[error("output length must be positive")]
    EmptyOutput,

    /// Requested output length exceeds what the construction can produce.
    #[error("requested output length {requested} exceeds maximum {max}")]
    OutputTooLong {
        /// Length asked for, in bytes.
        requested: usize,
        /// Largest length the construction supports, in bytes.
        max: usize,
    },

    /// SCrypt block size `r` must be at least 1.
    #[error("scrypt r must be positive")]
    ScryptRTooSmall,

    /// SCrypt parallelization `p` must be at least 1.
    #[error("scrypt p must be positive")]
    ScryptPTooSmall,

    /// SCrypt cost `n` must be greater than 1.
    #[error("scrypt n must be greater than 1")]
    ScryptNTooSmall,

    /// SCrypt cost `n` must be a power of two.
    #[error("scrypt n must be a power of two")]
    ScryptNNotPowerOfTwo,

    /// SCrypt cost `n` must stay below `2^(16 * r)`, i.e. `2^16` when `r == 1`.
    #[error("scrypt n must be less than 2^(16 * r)")]
    ScryptNTooLarge,

    /// SCrypt requires `p * r < 2^30`.
    #[error("scrypt p * r must be less than 2^30")]
    ScryptParallelismTooLarge,

    /// The SCrypt working set (`128 * r * n` bytes) does not fit in memory.
    #[error("scrypt working set does not fit in the address space")]
    ScryptMemoryTooLarge,

    /// A password policy's own cost parameters fall outside its bounds.
    #[error("password policy parameters fall outside its own bounds")]
    PolicyOutOfBounds,

    /// The operating system failed to provide entropy.
    #[error("operating system entropy source failed")]
    Entropy,
}

/// Result alias defaulting to the crate error.
pub type Result<T, E = Error> = core::result::Result<T, E>;
