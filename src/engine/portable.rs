use super::{Engine, W128};
use crate::params::{MSK, SL1, SL2, SR1, SR2};

/// Scalar engine, works on any target and defines the reference output.
pub(crate) struct Portable;

impl Engine for Portable {
    type Lane = W128;

    #[inline(always)]
    fn load(w: &W128) -> W128 {
        *w
    }

    #[inline(always)]
    fn store(lane: W128) -> W128 {
        lane
    }

    #[inline(always)]
    fn recursion(a: W128, b: W128, c: W128, d: W128) -> W128 {
        let x = W128::from_u128(a.as_u128() << (SL2 * 8));
        let y = W128::from_u128(c.as_u128() >> (SR2 * 8));

        W128(core::array::from_fn(|i| {
            a.0[i] ^ x.0[i] ^ ((b.0[i] >> SR1) & MSK[i]) ^ y.0[i] ^ (d.0[i] << SL1)
        }))
    }
}
