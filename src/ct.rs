//! Constant-time comparison.

/// Equality whose running time does not depend on where the operands
/// differ.
///
/// Implementations must not branch on, or exit early because of, the
/// contents being compared.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    /// Every byte pair is XORed and OR-accumulated before a single final
    /// test. Lengths are not secret: slices of different lengths compare
    /// unequal without looking at their contents.
    #[inline(never)]
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0u8, |acc, v| acc | v);

        core::hint::black_box(diff) == 0
    }
}

impl<const N: usize> ConstantTimeEq for [u8; N] {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self[..].ct_eq(&other[..])
    }
}
