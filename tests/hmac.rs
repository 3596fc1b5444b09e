use hmac::Mac as _;
use keyderive::hash::{Md4, Sha256, Sha512};
use keyderive::mac::Hmac;
use keyderive::{Algorithm, Mac, MacAlgorithm};

fn reference_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = hmac::Hmac::<sha2::Sha256>::new_from_slice(key).unwrap();
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[test]
fn hmac_md4_empty() {
    let tag = MacAlgorithm::HMAC_MD4.new_mac(b"").digest();
    assert_eq!(const_hex::encode(tag), "c8d444e3153b538850e7850fa84bb247");
}

#[test]
fn rfc4231_case_1() {
    let tag = Hmac::mac(Sha256::new(), &[0x0b; 20], b"Hi There");

    assert_eq!(
        const_hex::encode(tag),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

#[test]
fn rfc4231_case_2() {
    let data = b"what do ya want for nothing?";

    assert_eq!(
        const_hex::encode(Hmac::mac(Sha256::new(), b"Jefe", data)),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
    assert_eq!(
        const_hex::encode(Hmac::mac(Sha512::new(), b"Jefe", data)),
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
         9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
    );
}

#[test]
fn matches_reference_crate_across_key_sizes() {
    let data = b"The quick brown fox jumps over the lazy dog";

    // Below, at and above the 64-byte block
    for key_len in [0usize, 1, 32, 63, 64, 65, 200] {
        let key: Vec<u8> = (0..key_len).map(|i| i as u8).collect();
        let mut mac = MacAlgorithm::HMAC_SHA256.new_mac(&key);

        assert_eq!(mac.digest_with(data), reference_sha256(&key, data), "key {key_len}");
    }
}

#[test]
fn incremental_updates_match_one_shot() {
    let mut mac = Hmac::new(Md4::new(), b"key");
    mac.update(b"The quick ");
    mac.update_byte(b'b');
    mac.update(b"rown fox");

    assert_eq!(mac.digest(), Hmac::mac(Md4::new(), b"key", b"The quick brown fox"));
}

#[test]
fn reset_keeps_key() {
    let mut mac = MacAlgorithm::HMAC_SHA1.new_mac(b"key");
    mac.update(b"garbage");
    mac.reset();

    assert_eq!(mac.digest_with(b"msg"), MacAlgorithm::HMAC_SHA1.new_mac(b"key").digest_with(b"msg"));
}

#[test]
fn output_lengths_follow_digest() {
    for algorithm in Algorithm::ALL {
        let mac = MacAlgorithm::Hmac(algorithm);
        let mut engine = mac.new_mac(b"k");

        assert_eq!(engine.algorithm(), mac);
        assert_eq!(engine.output_len(), algorithm.output_len());
        assert_eq!(engine.digest().len(), mac.output_len());
    }
}
