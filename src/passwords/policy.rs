//! Cost parameters and bounds applied by [`Passwords`](super::Passwords).

use core::ops::RangeInclusive;

/// Configuration of the password facade.
///
/// New hashes are produced with `log_n`, `r` and `p`. Hashes being verified
/// carry their own parameters; those are honoured only while they stay
/// inside the bounds below, otherwise the defaults are used instead.
///
/// The bounds also cap the work an untrusted blob can demand: with the
/// defaults, verification never needs more than `128 * 16 * 2^16` bytes
/// (128 MiB).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Base-2 logarithm of the SCrypt cost for new hashes.
    pub log_n: u8,
    /// SCrypt block size for new hashes.
    pub r: u8,
    /// SCrypt parallelization for new hashes.
    pub p: u8,
    /// Accepted `log_n` range for embedded parameters.
    pub log_n_bounds: RangeInclusive<u8>,
    /// Accepted `r` range for embedded parameters.
    pub r_bounds: RangeInclusive<u8>,
    /// Accepted `p` range for embedded parameters.
    pub p_bounds: RangeInclusive<u8>,
    /// Length of passwords produced by `generate`.
    pub generated_len: usize,
}

impl PasswordPolicy {
    /// Whether embedded parameters fall inside the configured bounds.
    pub fn accepts(&self, log_n: u8, r: u8, p: u8) -> bool {
        self.log_n_bounds.contains(&log_n) && self.r_bounds.contains(&r) && self.p_bounds.contains(&p)
    }
}

impl Default for PasswordPolicy {
    /// `n = 2^14`, `r = 8`, `p = 1`; bounds `log_n ∈ [10, 16]`,
    /// `r ∈ [1, 16]`, `p ∈ [1, 4]`; 10-character generated passwords.
    fn default() -> Self {
        Self {
            log_n: 14,
            r: 8,
            p: 1,
            log_n_bounds: 10..=16,
            r_bounds: 1..=16,
            p_bounds: 1..=4,
            generated_len: 10,
        }
    }
}
