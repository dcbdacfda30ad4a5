//! # NEON Engine
//!
//! **Only for aarch64 architectures!**
//!
//! NEON is mandatory on aarch64, so no runtime feature check is needed.
use super::{Engine, W128};
use crate::params::{MSK, SL1, SL2, SR1, SR2};

use core::arch::aarch64::*;

// `vextq_u8(lo, hi, n)` yields bytes `lo[n..16] ++ hi[0..n]`, so a left shift by
// `SL2` bytes takes the window starting `16 - SL2` into a zero vector.
const SL2_EXT: i32 = 16 - SL2;

pub(crate) struct Neon;

impl Engine for Neon {
    type Lane = uint32x4_t;

    #[inline(always)]
    fn load(w: &W128) -> uint32x4_t {
        // SAFETY: `W128` holds exactly four `u32` lanes
        unsafe { vld1q_u32(w.0.as_ptr()) }
    }

    #[inline(always)]
    fn store(lane: uint32x4_t) -> W128 {
        let mut w = W128::default();

        // SAFETY: `W128` holds exactly four `u32` lanes
        unsafe { vst1q_u32(w.0.as_mut_ptr(), lane) };

        w
    }

    #[inline(always)]
    fn recursion(a: uint32x4_t, b: uint32x4_t, c: uint32x4_t, d: uint32x4_t) -> uint32x4_t {
        unsafe { recurrence_relation(a, b, c, d) }
    }
}

#[inline(always)]
#[allow(unsafe_op_in_unsafe_fn)]
/// Shift the entire 128-bit lane left by `SL2` bytes
///
/// ## Visualization (SL2 = 1)
///
/// ```md
/// inp => | B0 B1 B2 .. B14 B15 |
/// out => | 00 B0 B1 .. B13 B14 |
/// ```
unsafe fn sl_128_bytes(x: uint32x4_t) -> uint32x4_t {
    let zero = vdupq_n_u8(0);
    vreinterpretq_u32_u8(vextq_u8(zero, vreinterpretq_u8_u32(x), SL2_EXT))
}

#[inline(always)]
#[allow(unsafe_op_in_unsafe_fn)]
/// Shift the entire 128-bit lane right by `SR2` bytes
///
/// ## Visualization (SR2 = 1)
///
/// ```md
/// inp => | B0 B1 B2 .. B14 B15 |
/// out => | B1 B2 B3 .. B15 00  |
/// ```
unsafe fn sr_128_bytes(x: uint32x4_t) -> uint32x4_t {
    let zero = vdupq_n_u8(0);
    vreinterpretq_u32_u8(vextq_u8(vreinterpretq_u8_u32(x), zero, SR2))
}

#[inline(always)]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn recurrence_relation(a: uint32x4_t, b: uint32x4_t, c: uint32x4_t, d: uint32x4_t) -> uint32x4_t {
    let mask = vld1q_u32(MSK.as_ptr());

    // t0 = a ^ (a << SL2 bytes)
    let t0 = veorq_u32(a, sl_128_bytes(a));

    // y = (b >> SR1) & mask
    let y = vandq_u32(vshrq_n_u32(b, SR1), mask);

    // t1 = (c >> SR2 bytes) ^ (d << SL1)
    let t1 = veorq_u32(sr_128_bytes(c), vshlq_n_u32(d, SL1));

    veorq_u32(t0, veorq_u32(y, t1))
}
