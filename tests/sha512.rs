use keyderive::hash::{Sha512, sha512};
use keyderive::{Algorithm, Digest};
use sha2::Digest as _;

fn expect_sha512_eq(input: &[u8], expected: &str) {
    let got = sha512(input);

    assert_eq!(
        const_hex::encode(got),
        expected,
        "Digest mismatch for input of {} bytes",
        input.len(),
    );
}

fn reference(input: &[u8]) -> Vec<u8> {
    sha2::Sha512::digest(input).to_vec()
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha512_empty_vector() {
    expect_sha512_eq(
        b"",
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    );
}

#[test]
fn sha512_abc_vector() {
    expect_sha512_eq(
        b"abc",
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    );
}

#[test]
fn sha512_known_phrase() {
    expect_sha512_eq(
        b"The quick brown fox jumps over the lazy dog",
        "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64\
         2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
    );
}

// -------------------------------------------------------
// 2. LENGTHS FROM 0 TO 256
// -------------------------------------------------------

#[test]
fn sha512_incremental_lengths() {
    let mut buf = Vec::with_capacity(256);
    for i in 0..256 {
        buf.push(i as u8);
        assert_eq!(sha512(&buf).to_vec(), reference(&buf), "length {}", buf.len());
    }
}

// -------------------------------------------------------
// 3. 0x00, 0xFF, AND REPEATED PATTERNS
// -------------------------------------------------------

#[test]
fn sha512_patterns_various_lengths() {
    for byte in [0x00u8, 0xff] {
        for len in [1, 2, 4, 8, 16, 32, 64, 111, 112, 127, 128, 255, 256] {
            let buf = vec![byte; len];
            assert_eq!(sha512(&buf).to_vec(), reference(&buf), "{byte:#04x} x {len}");
        }
    }
}

// -------------------------------------------------------
// 4. MULTI-BLOCK AND STREAMING INPUTS
// -------------------------------------------------------

#[test]
fn sha512_1mb_data() {
    let buf = vec![0xAAu8; 1_000_000];
    assert_eq!(sha512(&buf).to_vec(), reference(&buf));
}

#[test]
fn sha512_streaming_matches_one_shot() {
    let buf: Vec<u8> = (0..5000u32).map(|i| (i % 256) as u8).collect();
    let mut engine = Sha512::new();

    for chunk in buf.chunks(97) {
        engine.update(chunk);
    }

    assert_eq!(engine.digest(), sha512(&buf).to_vec());
}

#[test]
fn sha512_through_algorithm_tag() {
    assert_eq!(Algorithm::Sha512.hash(b"abc"), reference(b"abc"));
    assert_eq!(Algorithm::Sha512.output_len(), 64);
    assert_eq!(Algorithm::Sha512.block_len(), 128);
}
