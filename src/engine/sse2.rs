//! # SSE2 Engine
//!
//! **Only for x86_64 architectures!**
//!
//! SSE2 is part of the x86_64 baseline, so no runtime feature check is needed.
use super::{Engine, W128};
use crate::params::{MSK, SL1, SL2, SR1, SR2};

use core::arch::x86_64::*;

pub(crate) struct Sse2;

impl Engine for Sse2 {
    type Lane = __m128i;

    #[inline(always)]
    fn load(w: &W128) -> __m128i {
        // SAFETY: `W128` is 16 byte aligned
        unsafe { _mm_load_si128(w.0.as_ptr() as *const __m128i) }
    }

    #[inline(always)]
    fn store(lane: __m128i) -> W128 {
        let mut w = W128::default();

        // SAFETY: `W128` is 16 byte aligned
        unsafe { _mm_store_si128(w.0.as_mut_ptr() as *mut __m128i, lane) };

        w
    }

    #[inline(always)]
    fn recursion(a: __m128i, b: __m128i, c: __m128i, d: __m128i) -> __m128i {
        unsafe { recurrence_relation(a, b, c, d) }
    }
}

#[inline(always)]
#[allow(unsafe_op_in_unsafe_fn)]
/// Performs SFMT recurrence relation
///
/// ## Algo
///
/// ```md
/// x = a << (SL2 * 8) across the full 128 bits
/// y = (b >> SR1) & MSK per 32-bit lane
/// z = c >> (SR2 * 8) across the full 128 bits
/// v = d << SL1 per 32-bit lane
///
/// out = (a ^ x) ^ (y ^ (z ^ v))
/// ```
///
/// `_mm_slli_si128`/`_mm_srli_si128` shift by whole bytes, which is exactly what
/// `SL2`/`SR2` express.
unsafe fn recurrence_relation(a: __m128i, b: __m128i, c: __m128i, d: __m128i) -> __m128i {
    let mask = _mm_set_epi32(MSK[3] as i32, MSK[2] as i32, MSK[1] as i32, MSK[0] as i32);

    let x = _mm_slli_si128(a, SL2);
    let y = _mm_and_si128(_mm_srli_epi32(b, SR1), mask);
    let z = _mm_srli_si128(c, SR2);
    let v = _mm_slli_epi32(d, SL1);

    let t0 = _mm_xor_si128(a, x);
    let t1 = _mm_xor_si128(z, v);

    _mm_xor_si128(t0, _mm_xor_si128(y, t1))
}
