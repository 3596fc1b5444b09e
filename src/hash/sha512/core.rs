//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a streaming [`Sha512`] engine implementing [`Digest`]
//! - a one-shot [`sha512`] helper for arbitrary-length input

use crate::algorithm::Algorithm;
use crate::hash::Digest;
use crate::hash::engine::{BlockCore, BlockEngine, LengthField, Phase};
use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::computations::all_rounds;

/// Compresses a single 1024-bit message block.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &[u8], state: &mut [u64; 8]) {
    // Message schedule (first 16 words)
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(bytes);
    }

    all_rounds(state, w);
}

#[derive(Clone)]
pub(crate) struct Sha512State {
    words: [u64; 8],
}

impl BlockCore for Sha512State {
    const BLOCK_LEN: usize = 128;
    const OUTPUT_LEN: usize = 64;
    const LENGTH_FIELD: LengthField = LengthField::Be128;

    fn initial() -> Self {
        Self { words: H512_INIT }
    }

    fn compress(&mut self, block: &[u8]) {
        compress(block, &mut self.words);
    }

    fn write_output(&self, out: &mut [u8]) {
        // Serialize final state into big-endian bytes
        out.chunks_exact_mut(8)
            .zip(&self.words)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_be_bytes()));
    }
}

/// Streaming SHA-512 engine.
///
/// The implementation follows the standard Merkle–Damgård construction:
/// input is absorbed in 1024-bit blocks, and finalization appends `0x80`,
/// zero bytes and the message length in bits as a 128-bit big-endian
/// integer. Producing a digest resets the engine to its initial state.
#[derive(Clone)]
pub struct Sha512 {
    engine: BlockEngine<Sha512State>,
}

impl Sha512 {
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

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Sha512 {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sha512
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

/// Computes the SHA-512 hash of the given input.
///
/// # Returns
/// - The final SHA-512 hash as 64 bytes (`[u8; 64]`)
pub fn sha512(input: &[u8]) -> [u8; 64] {
    let mut engine = BlockEngine::<Sha512State>::new();
    engine.update(input);

    let mut out = [0u8; 64];
    engine.digest_into(&mut out);
    out
}
