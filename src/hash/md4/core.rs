//! MD4 compression function and streaming engine.

use super::{MD4_INIT, ROUND2_K, ROUND3_K};
use crate::algorithm::Algorithm;
use crate::hash::Digest;
use crate::hash::engine::{BlockCore, BlockEngine, LengthField, Phase};

/// Message word order of each round.
const ORDER: [[usize; 16]; 3] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15],
    [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15],
];

/// Left-rotation amounts of each round, cycled every four steps.
const SHIFTS: [[u32; 4]; 3] = [[3, 7, 11, 19], [3, 5, 9, 13], [3, 9, 11, 15]];

/// Selection: `x ? y : z`, bitwise.
#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Majority of the three inputs, bitwise.
#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Parity.
#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// MD4 chaining state: four 32-bit words.
#[derive(Clone)]
pub(crate) struct Md4State {
    words: [u32; 4],
}

impl Md4State {
    /// Runs one 16-step round.
    ///
    /// Each step updates the word currently in the `a` role, then the roles
    /// rotate `(a, b, c, d) -> (d, a, b, c)`. Sixteen steps bring the roles
    /// back to their original positions.
    #[inline(always)]
    fn round(
        s: &mut [u32; 4],
        x: &[u32; 16],
        func: fn(u32, u32, u32) -> u32,
        k: u32,
        pass: usize,
    ) {
        for (step, &idx) in ORDER[pass].iter().enumerate() {
            let [a, b, c, d] = *s;
            let t = a
                .wrapping_add(func(b, c, d))
                .wrapping_add(x[idx])
                .wrapping_add(k)
                .rotate_left(SHIFTS[pass][step % 4]);
            *s = [d, t, b, c];
        }
    }
}

impl BlockCore for Md4State {
    const BLOCK_LEN: usize = 64;
    const OUTPUT_LEN: usize = 16;
    const LENGTH_FIELD: LengthField = LengthField::Le64;

    fn initial() -> Self {
        Self { words: MD4_INIT }
    }

    fn compress(&mut self, block: &[u8]) {
        let mut x = [0u32; 16];
        for (word, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        let mut s = self.words;
        Self::round(&mut s, &x, f, 0, 0);
        Self::round(&mut s, &x, g, ROUND2_K, 1);
        Self::round(&mut s, &x, h, ROUND3_K, 2);

        self.words
            .iter_mut()
            .zip(s)
            .for_each(|(w, v)| *w = w.wrapping_add(v));
    }

    fn write_output(&self, out: &mut [u8]) {
        out.chunks_exact_mut(4)
            .zip(&self.words)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));
    }
}

/// Streaming MD4 engine.
///
/// Producing a digest resets the engine to its initial state.
#[derive(Clone)]
pub struct Md4 {
    engine: BlockEngine<Md4State>,
}

impl Md4 {
    /// Creates an engine in the initial state.
    pub fn new() -> Self {
        Self {
            engine: BlockEngine::new(),
        }
    }

    /// Current lifecycle phase of the engine.
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }
}

impl Default for Md4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Md4 {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Md4
    }

    fn reset(&mut self) {
        self.engine.reset();
    }

    fn update(&mut self, data: &[u8]) {
        self.engine.update(data);
    }

    fn digest_into(&mut self, out: &mut [u8]) {
        self.engine.digest_into(out);
    }
}

/// Computes the MD4 digest of `input` in one call.
pub fn md4(input: &[u8]) -> [u8; 16] {
    let mut engine = BlockEngine::<Md4State>::new();
    engine.update(input);

    let mut out = [0u8; 16];
    engine.digest_into(&mut out);
    out
}
