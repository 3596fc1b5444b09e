//! Cost parameters for SCrypt and their validation.

use crate::error::{Error, Result};

/// Largest SCrypt output: `(2^32 - 1) * 32` bytes.
const MAX_DK_LEN: u64 = (u32::MAX as u64) * 32;

/// Validated SCrypt cost parameters.
///
/// The cost `n` is stored as its base-2 logarithm, the same form the
/// password blob persists it in.
///
/// # Recommended Values
///
/// The defaults (`n = 2^14`, `r = 8`, `p = 1`, 32-byte output) take a few
/// tens of milliseconds and 16 MiB on current hardware. Raise `n` first to
/// increase cost; `p` only helps when slices can run on separate cores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScryptParams {
    log_n: u8,
    r: u32,
    p: u32,
    dk_len: usize,
}

impl ScryptParams {
    /// Builds parameters with cost `n = 2^log_n`.
    ///
    /// # Errors
    /// - `r`, `p` or `dk_len` is zero
    /// - `log_n` is zero (`n <= 1`)
    /// - `n >= 2^(16 * r)`
    /// - `p * r >= 2^30`
    /// - `dk_len > (2^32 - 1) * 32`
    /// - the working set does not fit in memory
    pub fn new(log_n: u8, r: u32, p: u32, dk_len: usize) -> Result<Self> {
        if r == 0 {
            return Err(Error::ScryptRTooSmall);
        }

        if p == 0 {
            return Err(Error::ScryptPTooSmall);
        }

        if dk_len == 0 {
            return Err(Error::EmptyOutput);
        }

        if log_n == 0 {
            return Err(Error::ScryptNTooSmall);
        }

        if u32::from(log_n) >= r.saturating_mul(16) {
            return Err(Error::ScryptNTooLarge);
        }

        if u64::from(p) * u64::from(r) >= 1 << 30 {
            return Err(Error::ScryptParallelismTooLarge);
        }

        if dk_len as u64 > MAX_DK_LEN {
            return Err(Error::OutputTooLong {
                requested: dk_len,
                max: usize::try_from(MAX_DK_LEN).unwrap_or(usize::MAX),
            });
        }

        let params = Self {
            log_n,
            r,
            p,
            dk_len,
        };

        if params.rom_len().is_none() || params.stretch_len().is_none() {
            return Err(Error::ScryptMemoryTooLarge);
        }

        Ok(params)
    }

    /// Builds parameters from the cost `n` itself.
    ///
    /// # Errors
    /// Fails if `n <= 1` or `n` is not a power of two, then as
    /// [`ScryptParams::new`].
    pub fn from_cost(r: u32, n: u64, p: u32, dk_len: usize) -> Result<Self> {
        if n <= 1 {
            return Err(Error::ScryptNTooSmall);
        }

        if !n.is_power_of_two() {
            return Err(Error::ScryptNNotPowerOfTwo);
        }

        Self::new(n.trailing_zeros() as u8, r, p, dk_len)
    }

    /// Base-2 logarithm of the cost.
    pub fn log_n(&self) -> u8 {
        self.log_n
    }

    /// CPU/memory cost `n`.
    pub fn n(&self) -> u64 {
        1u64 << self.log_n
    }

    /// Block size factor.
    pub fn r(&self) -> u32 {
        self.r
    }

    /// Parallelization factor.
    pub fn p(&self) -> u32 {
        self.p
    }

    /// Derived key length in bytes.
    pub fn dk_len(&self) -> usize {
        self.dk_len
    }

    /// Bytes in one ROMix block, `128 * r`.
    pub(crate) fn block_len(&self) -> Option<usize> {
        (self.r as usize).checked_mul(128)
    }

    /// Bytes in `V`, `128 * r * n`, bounded by what a `Vec` can hold.
    pub(crate) fn rom_len(&self) -> Option<usize> {
        let n = 1usize.checked_shl(u32::from(self.log_n))?;

        self.block_len()?
            .checked_mul(n)
            .filter(|&len| len <= isize::MAX as usize)
    }

    /// Bytes produced by the initial PBKDF2 stretch, `128 * r * p`.
    pub(crate) fn stretch_len(&self) -> Option<usize> {
        self.block_len()?
            .checked_mul(self.p as usize)
            .filter(|&len| len <= isize::MAX as usize)
    }
}

impl Default for ScryptParams {
    /// `n = 2^14`, `r = 8`, `p = 1`, 32-byte output.
    fn default() -> Self {
        Self {
            log_n: 14,
            r: 8,
            p: 1,
            dk_len: 32,
        }
    }
}
