use super::H256_INIT;
use super::computations::all_rounds;
use crate::algorithm::Algorithm;
use crate::hash::Digest;
use crate::hash::engine::{BlockCore, BlockEngine, LengthField, Phase};

#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, &mut w);
}

#[derive(Clone)]
pub(crate) struct Sha256State {
    words: [u32; 8],
}

impl BlockCore for Sha256State {
    const BLOCK_LEN: usize = 64;
    const OUTPUT_LEN: usize = 32;
    const LENGTH_FIELD: LengthField = LengthField::Be64;

    fn initial() -> Self {
        Self { words: H256_INIT }
    }

    fn compress(&mut self, block: &[u8]) {
        let mut buf = [0u8; 64];
        buf.copy_from_slice(block);
        compress(&buf, &mut self.words);
    }

    fn write_output(&self, out: &mut [u8]) {
        out.chunks_exact_mut(4)
            .zip(&self.words)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_be_bytes()));
    }
}

/// Streaming SHA-256 engine.
///
/// Producing a digest resets the engine to its initial state.
#[derive(Clone)]
pub struct Sha256 {
    engine: BlockEngine<Sha256State>,
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            engine: BlockEngine::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Sha256 {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sha256
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

pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut engine = BlockEngine::<Sha256State>::new();
    engine.update(input);

    let mut out = [0u8; 32];
    engine.digest_into(&mut out);
    out
}
