use keyderive::hash::{self, Md4, Phase, Sha256};
use keyderive::{Algorithm, Digest, Error, MacAlgorithm};
use proptest::prelude::*;

fn hex(bytes: impl AsRef<[u8]>) -> String {
    const_hex::encode(bytes)
}

// -------------------------------------------------------
// MD4 (RFC 1320 appendix A.5)
// -------------------------------------------------------

#[test]
fn md4_rfc1320_suite() {
    let cases: [(&[u8], &str); 7] = [
        (b"", "31d6cfe0d16ae931b73c59d7e0c089c0"),
        (b"a", "bde52cb31de33e46245e05fbdbd6fb24"),
        (b"abc", "a448017aaf21d8525fc10ae87aa6729d"),
        (b"message digest", "d9130a8164549fe818874806e1c7014b"),
        (b"abcdefghijklmnopqrstuvwxyz", "d79e1c308aa5bbcdeea8ed63df412da9"),
        (
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            "043f8582f241db351ce627e153e7f0e4",
        ),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            "e33b4ddc9c38f2199c3e7b164fcc0536",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(hex(hash::md4(input)), expected, "input {:?}", input);
    }
}

#[test]
fn md4_quick_brown_fox() {
    let mut engine = Md4::new();
    engine.update(b"The quick brown fox jumps over the lazy dog");

    assert_eq!(hex(engine.digest()), "1bee69a46ba811185c194762abaeae90");
}

#[test]
fn md4_matches_reference_crate() {
    use md4::Digest as _;

    for len in [0usize, 1, 55, 56, 63, 64, 65, 119, 120, 1000] {
        let data: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
        assert_eq!(
            hash::md4(&data).to_vec(),
            md4::Md4::digest(&data).to_vec(),
            "length {len}"
        );
    }
}

#[test]
fn md4_byte_at_a_time() {
    let data = b"message digest";
    let mut engine = Md4::new();

    for &b in data.iter() {
        engine.update_byte(b);
    }

    assert_eq!(engine.digest(), hash::md4(data).to_vec());
}

// -------------------------------------------------------
// SHA-256
// -------------------------------------------------------

#[test]
fn sha256_matches_reference_crate() {
    use sha2::Digest as _;

    for len in [0usize, 3, 55, 56, 64, 100, 1000, 10_000] {
        let data = vec![0x5au8; len];
        assert_eq!(
            hash::sha256(&data).to_vec(),
            sha2::Sha256::digest(&data).to_vec(),
            "length {len}"
        );
    }
}

#[test]
fn sha256_abc_vector() {
    assert_eq!(
        hex(hash::sha256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

// -------------------------------------------------------
// Wrapped digests
// -------------------------------------------------------

#[test]
fn wrapped_digest_known_answers() {
    let cases = [
        (Algorithm::Md2, &b""[..], "8350e5a3e24c153df2275c9f80692773"),
        (Algorithm::Md5, &b""[..], "d41d8cd98f00b204e9800998ecf8427e"),
        (Algorithm::Sha1, &b"abc"[..], "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            Algorithm::Keccak256,
            &b""[..],
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        ),
    ];

    for (algorithm, input, expected) in cases {
        assert_eq!(hex(algorithm.hash(input)), expected, "{algorithm}");
    }
}

// -------------------------------------------------------
// Engine lifecycle
// -------------------------------------------------------

#[test]
fn every_engine_resets_after_digest() {
    for algorithm in Algorithm::ALL {
        let mut engine = algorithm.new_digest();
        let empty = engine.digest();

        engine.update(b"some data that must not leak into the next digest");
        let _ = engine.digest();

        assert_eq!(engine.digest(), empty, "{algorithm}");
    }
}

#[test]
fn explicit_reset_discards_input() {
    let mut engine = Sha256::new();
    engine.update(b"discarded");
    engine.reset();

    assert_eq!(engine.phase(), Phase::Accumulating);
    assert_eq!(engine.digest(), hash::sha256(b"").to_vec());
}

#[test]
fn digest_lengths_are_fixed() {
    for algorithm in Algorithm::ALL {
        let mut engine = algorithm.new_digest();
        assert_eq!(engine.digest_with(b"x").len(), algorithm.output_len(), "{algorithm}");
    }
}

#[test]
#[should_panic]
fn wrong_output_buffer_panics() {
    let mut out = [0u8; 15];
    Md4::new().digest_into(&mut out);
}

// -------------------------------------------------------
// Names
// -------------------------------------------------------

#[test]
fn names_round_trip() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.to_string().parse(), Ok(algorithm));

        let mac = MacAlgorithm::Hmac(algorithm);
        assert_eq!(mac.to_string().parse(), Ok(mac));
    }

    assert_eq!(Algorithm::Sha256.to_string(), "SHA-256");
    assert_eq!(MacAlgorithm::HMAC_SHA1.to_string(), "HMAC-SHA1");
}

#[test]
fn unknown_names_are_rejected() {
    assert_eq!("SHA3-256".parse::<Algorithm>(), Err(Error::UnknownAlgorithm));
    assert_eq!("sha-256".parse::<Algorithm>(), Err(Error::UnknownAlgorithm));
    assert_eq!("SHA-256".parse::<MacAlgorithm>(), Err(Error::UnknownAlgorithm));
    assert_eq!("HMAC-".parse::<MacAlgorithm>(), Err(Error::UnknownAlgorithm));
}

// -------------------------------------------------------
// Streaming
// -------------------------------------------------------

proptest! {
    #[test]
    fn streaming_split_matches_one_shot(
        data in prop::collection::vec(any::<u8>(), 0..700),
        split in any::<prop::sample::Index>(),
    ) {
        let at = split.index(data.len() + 1);

        for algorithm in [Algorithm::Md4, Algorithm::Sha256, Algorithm::Sha512] {
            let mut engine = algorithm.new_digest();
            engine.update(&data[..at]);
            engine.update(&data[at..]);

            prop_assert_eq!(engine.digest(), algorithm.hash(&data));
        }
    }
}
