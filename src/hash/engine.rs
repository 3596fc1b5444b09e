//! Merkle–Damgård block engine shared by the in-crate digests.
//!
//! MD4, SHA-256 and SHA-512 only differ in their compression function, block
//! size, output size and the layout of the trailing length field. Everything
//! else (buffering partial blocks, counting bytes, padding, resetting) lives
//! here.
//!
//! The engine is an explicit two-state machine:
//!
//! ```text
//!            update()                 finalize_into()
//!   ┌──────────────────┐     Accumulating ──────────────► Finalized
//!   └─► Accumulating ◄─┘          ▲                           │
//!                                 └────────── reset() ────────┘
//! ```
//!
//! [`BlockEngine::digest_into`] performs both transitions in one call, which
//! is how the public `Digest` implementations use it: after producing output
//! the engine is back in its canonical initial state.

use zeroize::Zeroize;

/// Largest block size of any in-crate digest (SHA-512).
pub(crate) const MAX_BLOCK_LEN: usize = 128;

/// Width and byte order of the message length appended during padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthField {
    /// 64-bit little-endian bit count (MD4).
    Le64,
    /// 64-bit big-endian bit count (SHA-256).
    Be64,
    /// 128-bit big-endian bit count (SHA-512).
    Be128,
}

impl LengthField {
    fn width(self) -> usize {
        match self {
            LengthField::Le64 | LengthField::Be64 => 8,
            LengthField::Be128 => 16,
        }
    }

    fn write(self, bit_len: u128, out: &mut [u8]) {
        match self {
            LengthField::Le64 => out.copy_from_slice(&(bit_len as u64).to_le_bytes()),
            LengthField::Be64 => out.copy_from_slice(&(bit_len as u64).to_be_bytes()),
            LengthField::Be128 => out.copy_from_slice(&bit_len.to_be_bytes()),
        }
    }
}

/// Lifecycle state of a [`BlockEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input.
    Accumulating,
    /// Padding has been absorbed and the output extracted; only a reset is
    /// meaningful from here.
    Finalized,
}

/// Compression function and chaining state of a concrete digest.
pub(crate) trait BlockCore: Clone {
    /// Block size in bytes.
    const BLOCK_LEN: usize;
    /// Digest size in bytes.
    const OUTPUT_LEN: usize;
    /// Length field appended by the padding rule.
    const LENGTH_FIELD: LengthField;

    /// Canonical initial chaining state.
    fn initial() -> Self;

    /// Absorbs exactly one block of `BLOCK_LEN` bytes.
    fn compress(&mut self, block: &[u8]);

    /// Serializes the chaining state into `out` (`OUTPUT_LEN` bytes).
    fn write_output(&self, out: &mut [u8]);
}

#[derive(Clone)]
pub(crate) struct BlockEngine<C: BlockCore> {
    core: C,
    buffer: [u8; MAX_BLOCK_LEN],
    filled: usize,
    total: u64,
    phase: Phase,
}

impl<C: BlockCore> BlockEngine<C> {
    pub(crate) fn new() -> Self {
        Self {
            core: C::initial(),
            buffer: [0u8; MAX_BLOCK_LEN],
            filled: 0,
            total: 0,
            phase: Phase::Accumulating,
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn reset(&mut self) {
        self.core = C::initial();
        self.buffer.zeroize();
        self.filled = 0;
        self.total = 0;
        self.phase = Phase::Accumulating;
    }

    pub(crate) fn update(&mut self, mut data: &[u8]) {
        debug_assert_eq!(self.phase, Phase::Accumulating);

        if data.is_empty() {
            return;
        }

        self.total = self.total.wrapping_add(data.len() as u64);

        // Top up a partially filled block first
        if self.filled > 0 {
            let take = (C::BLOCK_LEN - self.filled).min(data.len());
            self.buffer[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled < C::BLOCK_LEN {
                return;
            }

            self.core.compress(&self.buffer[..C::BLOCK_LEN]);
            self.filled = 0;
        }

        let mut blocks = data.chunks_exact(C::BLOCK_LEN);
        for block in &mut blocks {
            self.core.compress(block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }

    /// Applies padding and writes the digest into `out`.
    ///
    /// Leaves the engine in [`Phase::Finalized`].
    pub(crate) fn finalize_into(&mut self, out: &mut [u8]) {
        debug_assert_eq!(self.phase, Phase::Accumulating);
        assert_eq!(out.len(), C::OUTPUT_LEN, "digest output buffer has wrong length");

        let block_len = C::BLOCK_LEN;
        let width = C::LENGTH_FIELD.width();
        let bit_len = (self.total as u128) << 3;

        let mut tail = [0u8; 2 * MAX_BLOCK_LEN];
        tail[..self.filled].copy_from_slice(&self.buffer[..self.filled]);
        tail[self.filled] = 0x80;

        // Not enough room for the length field: spill into a second block
        let end = if self.filled + 1 + width > block_len {
            2 * block_len
        } else {
            block_len
        };
        C::LENGTH_FIELD.write(bit_len, &mut tail[end - width..end]);

        for block in tail[..end].chunks_exact(block_len) {
            self.core.compress(block);
        }

        self.core.write_output(out);
        self.phase = Phase::Finalized;

        tail.zeroize();
    }

    /// Finalizes into `out`, then resets to the initial state.
    pub(crate) fn digest_into(&mut self, out: &mut [u8]) {
        self.finalize_into(out);
        self.reset();
    }
}
