//! Working memory for ROMix.
//!
//! The arena owns `V` (`n` blocks of `32 * r` words) and two scratch blocks
//! that BlockMix ping-pongs between. It is sized once per derivation and
//! reused for every slice; all of it is wiped on drop.

use zeroize::Zeroizing;

use super::block::{SALSA_WORDS, block_mix};

pub(crate) struct RomixArena {
    /// `V[0..n]`, block `i` at `i * block_words..`
    v: Zeroizing<Vec<u32>>,
    x: Zeroizing<Vec<u32>>,
    scratch: Zeroizing<Vec<u32>>,
    n: usize,
}

impl RomixArena {
    /// Allocates an arena for `n = 2^log_n` blocks of `128 * r` bytes.
    ///
    /// The caller guarantees the sizes fit (see `ScryptParams::rom_len`).
    pub(crate) fn new(log_n: u8, r: usize) -> Self {
        let n = 1usize << log_n;
        let block_words = 2 * r * SALSA_WORDS;

        Self {
            v: Zeroizing::new(vec![0u32; n * block_words]),
            x: Zeroizing::new(vec![0u32; block_words]),
            scratch: Zeroizing::new(vec![0u32; block_words]),
            n,
        }
    }

    fn block_words(&self) -> usize {
        self.x.len()
    }

    /// First word pair of the last Salsa20 block, as a little-endian
    /// integer reduced modulo `n`.
    fn integerify(&self) -> usize {
        let at = self.block_words() - SALSA_WORDS;
        let j = u64::from(self.x[at]) | (u64::from(self.x[at + 1]) << 32);

        (j & (self.n as u64 - 1)) as usize
    }

    fn mix(&mut self) {
        block_mix(&self.x, &mut self.scratch);
        core::mem::swap(&mut self.x, &mut self.scratch);
    }

    /// Runs ROMix over `block` (`128 * r` bytes) in place.
    pub(crate) fn romix(&mut self, block: &mut [u8]) {
        let w = self.block_words();
        debug_assert_eq!(block.len(), 4 * w);

        self.x
            .iter_mut()
            .zip(block.chunks_exact(4))
            .for_each(|(word, bytes)| {
                *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            });

        // V[i] = X; X = BlockMix(X)
        for i in 0..self.n {
            self.v[i * w..(i + 1) * w].copy_from_slice(&self.x);
            self.mix();
        }

        // X = BlockMix(X ^ V[j])
        for _ in 0..self.n {
            let j = self.integerify();
            self.x
                .iter_mut()
                .zip(&self.v[j * w..(j + 1) * w])
                .for_each(|(a, b)| *a ^= b);
            self.mix();
        }

        block
            .chunks_exact_mut(4)
            .zip(self.x.iter())
            .for_each(|(bytes, word)| bytes.copy_from_slice(&word.to_le_bytes()));
    }
}
