//! Property tests over arbitrary seeds and keys.

use proptest::prelude::*;
use sfmt_rand::{Sfmt, SfmtError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_same_seed_same_sequence(seed in any::<u32>()) {
        let mut a = Sfmt::from_seed(seed);
        let mut b = Sfmt::from_seed(seed);

        for _ in 0..2_000 {
            prop_assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn prop_same_key_same_sequence(key in prop::collection::vec(any::<u32>(), 1..700)) {
        let mut a = Sfmt::from_key(&key).unwrap();
        let mut b = Sfmt::from_key(&key).unwrap();

        for _ in 0..1_000 {
            prop_assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn prop_floats_stay_in_their_intervals(seed in any::<u32>()) {
        let mut rng = Sfmt::from_seed(seed);

        for _ in 0..1_000 {
            let r1 = rng.real1();
            let r2 = rng.real2();
            let r3 = rng.real3();
            let r53 = rng.res53();
            let mix = rng.res53_mix();

            prop_assert!((0.0..=1.0).contains(&r1));
            prop_assert!((0.0..1.0).contains(&r2));
            prop_assert!(r3 > 0.0 && r3 < 1.0);
            prop_assert!((0.0..1.0).contains(&r53));
            prop_assert!((0.0..1.0).contains(&mix));
        }
    }

    #[test]
    fn prop_misaligned_fills_are_rejected(len in 0usize..4_000) {
        let mut rng = Sfmt::from_seed(1);
        let mut buf32 = vec![0u32; len];
        let mut buf64 = vec![0u64; len];

        let res32 = rng.fill_u32(&mut buf32);
        let res64 = rng.fill_u64(&mut buf64);

        if len % 4 != 0 {
            prop_assert_eq!(res32, Err(SfmtError::BufferSizeMisaligned { len, multiple: 4 }));
        } else if len < rng.min_array_size32() {
            prop_assert_eq!(res32, Err(SfmtError::BufferTooSmall { len, min: 624 }));
        } else {
            prop_assert!(res32.is_ok());
        }

        if len % 2 != 0 {
            prop_assert_eq!(res64, Err(SfmtError::BufferSizeMisaligned { len, multiple: 2 }));
        } else if len < rng.min_array_size64() {
            prop_assert_eq!(res64, Err(SfmtError::BufferTooSmall { len, min: 312 }));
        } else {
            prop_assert!(res64.is_ok());
        }
    }

    #[test]
    fn prop_dice_in_bounds(seed in any::<u32>()) {
        let mut rng = Sfmt::from_seed(seed);

        for _ in 0..500 {
            prop_assert!((1..=4).contains(&rng.d4()));
            prop_assert!((1..=6).contains(&rng.d6()));
            prop_assert!((1..=8).contains(&rng.d8()));
            prop_assert!((1..=10).contains(&rng.d10()));
            prop_assert!((1..=12).contains(&rng.d12()));
            prop_assert!((1..=20).contains(&rng.d20()));
            prop_assert!((1..=52).contains(&rng.card()));
        }
    }
}
