//! Random number generation
//!
//! Cryptographically secure randomness for salts and generated passwords,
//! built on a ChaCha20 DRBG seeded from the operating system.
//!
//! Each thread owns its own generator, seeded lazily on first use, so no
//! locking is needed and generators are never shared across threads.

pub(crate) mod chacha20;
mod csprng;

use std::cell::RefCell;

use crate::error::Result;

pub use csprng::Csprng;

thread_local! {
    static THREAD_RNG: RefCell<Option<Csprng>> = const { RefCell::new(None) };
}

/// Runs `f` with this thread's generator, seeding it first if needed.
///
/// # Errors
/// Returns [`Error::Entropy`](crate::Error::Entropy) if the generator has
/// to be seeded and the OS entropy source fails.
pub fn with_thread_rng<R>(f: impl FnOnce(&mut Csprng) -> R) -> Result<R> {
    THREAD_RNG.with(|cell| {
        let mut slot = cell.borrow_mut();

        let rng = match slot.take() {
            Some(rng) => rng,
            None => Csprng::from_os()?,
        };

        Ok(f(slot.insert(rng)))
    })
}

/// Fills `out` from this thread's generator.
///
/// # Errors
/// See [`with_thread_rng`].
pub fn fill(out: &mut [u8]) -> Result<()> {
    with_thread_rng(|rng| rng.fill_bytes(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_is_reused() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];

        fill(&mut a).unwrap();
        fill(&mut b).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn threads_get_independent_generators() {
        let here = with_thread_rng(|rng| rng.next_u32()).unwrap();
        let there = std::thread::spawn(|| with_thread_rng(|rng| rng.next_u32()).unwrap())
            .join()
            .unwrap();

        // 1 in 2^32 chance of a false failure
        assert_ne!(here, there);
    }
}
