use keyderive::passwords::blob::HASH_LEN;
use keyderive::passwords::{self, PasswordHash, PasswordPolicy, Passwords};
use proptest::prelude::*;

/// Cheap policy so that the many hashes below stay fast.
fn fast() -> Passwords {
    Passwords::new(PasswordPolicy {
        log_n: 10,
        r: 1,
        p: 1,
        ..PasswordPolicy::default()
    })
    .unwrap()
}

// -------------------------------------------------------
// Default facade
// -------------------------------------------------------

#[test]
fn round_trip_with_defaults() {
    let password = passwords::generate().unwrap();
    let stored = passwords::hash(&password).unwrap();

    assert_eq!(stored.len(), HASH_LEN);
    assert_eq!(HASH_LEN, 51);
    assert_eq!(&stored[48..], &[14, 8, 1]);
    assert!(passwords::verify(&password, &stored));
}

#[test]
fn single_character_change_fails() {
    let stored = passwords::hash("hunter2").unwrap();

    assert!(!passwords::verify("hunter3", &stored));
    assert!(!passwords::verify("Hunter2", &stored));
    assert!(!passwords::verify("hunter", &stored));
}

#[test]
fn empty_blob_is_rejected() {
    assert!(!passwords::verify("anything", &[]));
    assert!(!passwords::verify("", &[]));
}

// -------------------------------------------------------
// Malformed blobs
// -------------------------------------------------------

#[test]
fn truncated_and_extended_blobs_are_rejected() {
    let passwords = fast();
    let stored = passwords.hash("secret").unwrap();

    for len in [1, 16, 32, 34, 48, 50] {
        assert!(!passwords.verify("secret", &stored[..len]), "length {len}");
    }

    let mut extended = stored.clone();
    extended.push(0);
    // Extra bytes are truncated away before comparing
    assert!(passwords.verify("secret", &extended));

    extended[HASH_LEN] = 0xff;
    assert!(passwords.verify("secret", &extended));
}

#[test]
fn tampered_bytes_are_rejected() {
    let passwords = fast();
    let stored = passwords.hash("secret").unwrap();

    for at in [0, 31, 32, 47, 48, 49, 50] {
        let mut tampered = stored.clone();
        tampered[at] ^= 0x01;
        assert!(!passwords.verify("secret", &tampered), "byte {at}");
    }
}

#[test]
fn absurd_parameters_never_panic() {
    let passwords = fast();
    let mut blob = passwords.hash("secret").unwrap();

    for (log_n, r, p) in [(0, 0, 0), (255, 255, 255), (63, 1, 1), (1, 0, 1), (20, 200, 200)] {
        blob[48] = log_n;
        blob[49] = r;
        blob[50] = p;
        assert!(!passwords.verify("secret", &blob));
    }
}

// -------------------------------------------------------
// Policy and blob layout
// -------------------------------------------------------

#[test]
fn same_salt_gives_same_blob() {
    let passwords = fast();
    let salt = [9u8; 16];

    assert_eq!(
        passwords.hash_with_salt("pw", &salt),
        passwords.hash_with_salt("pw", &salt)
    );
    assert_ne!(passwords.hash("pw").unwrap(), passwords.hash("pw").unwrap());
}

#[test]
fn blob_parses_into_fields() {
    let passwords = fast();
    let salt = [0x33u8; 16];
    let stored = passwords.hash_with_salt("pw", &salt);

    let parsed = PasswordHash::parse(&stored).unwrap();
    assert_eq!(parsed.salt(), &salt);
    assert_eq!((parsed.log_n(), parsed.r(), parsed.p()), (10, 1, 1));
    assert_eq!(parsed.to_bytes().to_vec(), stored);
}

#[test]
fn hashes_from_another_policy_still_verify() {
    let cheap = fast();
    let stored = cheap.hash("pw").unwrap();

    // Embedded (10, 1, 1) is inside the default bounds
    assert!(Passwords::default().verify("pw", &stored));
}

#[test]
fn generated_length_follows_policy() {
    let passwords = Passwords::new(PasswordPolicy {
        generated_len: 24,
        ..PasswordPolicy::default()
    })
    .unwrap();

    let generated = passwords.generate().unwrap();
    assert_eq!(generated.len(), 24);
    assert!(generated.chars().all(|c| c.is_ascii_alphanumeric()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn any_password_round_trips(password in "\\PC{0,40}") {
        let passwords = fast();
        let stored = passwords.hash(&password).unwrap();

        prop_assert!(passwords.verify(&password, &stored));
    }
}
