use keyderive::rng::{self, Csprng};

#[test]
fn test_csprng_deterministic_from_seed() {
    let mut rng1 = Csprng::from_seed([0x42u8; 32]);
    let mut rng2 = Csprng::from_seed([0x42u8; 32]);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_csprng_rekey_changes_output() {
    let mut rng = Csprng::from_seed([0xAAu8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_not_all_zero() {
    let mut rng = Csprng::from_seed([0u8; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_odd_lengths() {
    let mut rng = Csprng::from_seed([1u8; 32]);

    for len in [0usize, 1, 63, 64, 65, 200] {
        let mut out = vec![0u8; len];
        rng.fill_bytes(&mut out);

        if len >= 16 {
            assert!(out.iter().any(|&b| b != 0), "length {len}");
        }
    }
}

#[test]
fn test_csprng_below_is_roughly_uniform() {
    let mut rng = Csprng::from_seed([0x5Au8; 32]);
    let mut counts = [0u32; 62];

    for _ in 0..62_000 {
        counts[rng.below(62) as usize] += 1;
    }

    // Expected 1000 per bucket
    assert!(counts.iter().all(|&c| (800..1200).contains(&c)), "{counts:?}");
}

#[test]
fn test_thread_rng_fills() {
    let mut salt = [0u8; 16];
    rng::fill(&mut salt).unwrap();

    assert!(salt.iter().any(|&b| b != 0));
}
