//! Salsa20/8 core and the BlockMix construction.
//!
//! Both operate on little-endian 32-bit words: a Salsa20 block is 16 words
//! (64 bytes), a BlockMix block is `2 * r` Salsa20 blocks (`32 * r` words).

use zeroize::Zeroize;

/// Words in one Salsa20 block.
pub(crate) const SALSA_WORDS: usize = 16;

#[inline(always)]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

/// Salsa20/8 core: four double rounds, then the input is added back
/// word-wise.
pub(crate) fn salsa20_8(block: &mut [u32; 16]) {
    let mut x = *block;

    for _ in 0..4 {
        // Columns
        quarter_round(&mut x, 0, 4, 8, 12);
        quarter_round(&mut x, 5, 9, 13, 1);
        quarter_round(&mut x, 10, 14, 2, 6);
        quarter_round(&mut x, 15, 3, 7, 11);

        // Rows
        quarter_round(&mut x, 0, 1, 2, 3);
        quarter_round(&mut x, 5, 6, 7, 4);
        quarter_round(&mut x, 10, 11, 8, 9);
        quarter_round(&mut x, 15, 12, 13, 14);
    }

    block
        .iter_mut()
        .zip(x.iter())
        .for_each(|(b, x)| *b = b.wrapping_add(*x));

    x.zeroize();
}

/// BlockMix over `input`, written to `output`.
///
/// `X` starts as the last Salsa20 block of `input`; each block `B_i` then
/// yields `X = Salsa20/8(X ⊕ B_i)`, stored at position `i / 2` for even `i`
/// and `r + i / 2` for odd `i`.
///
/// Both slices hold `32 * r` words.
pub(crate) fn block_mix(input: &[u32], output: &mut [u32]) {
    debug_assert_eq!(input.len(), output.len());
    debug_assert_eq!(input.len() % (2 * SALSA_WORDS), 0);

    let r = input.len() / (2 * SALSA_WORDS);
    let mut x = [0u32; SALSA_WORDS];
    x.copy_from_slice(&input[(2 * r - 1) * SALSA_WORDS..]);

    for (i, chunk) in input.chunks_exact(SALSA_WORDS).enumerate() {
        x.iter_mut().zip(chunk).for_each(|(a, b)| *a ^= b);
        salsa20_8(&mut x);

        let dst = if i % 2 == 0 { i / 2 } else { r + i / 2 };
        output[dst * SALSA_WORDS..(dst + 1) * SALSA_WORDS].copy_from_slice(&x);
    }

    x.zeroize();
}
