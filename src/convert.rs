//! Raw output to floating point.
//!
//! The divisors are exact powers of two (or `2^32 - 1`) written out in full, so
//! results are bit-for-bit reproducible across platforms.

/// `[0, 1]`
#[inline(always)]
pub fn to_real1(v: u32) -> f64 {
    v as f64 * (1.0 / 4294967295.0)
}

/// `[0, 1)`
#[inline(always)]
pub fn to_real2(v: u32) -> f64 {
    v as f64 * (1.0 / 4294967296.0)
}

/// `(0, 1)`
#[inline(always)]
pub fn to_real3(v: u32) -> f64 {
    (v as f64 + 0.5) * (1.0 / 4294967296.0)
}

/// `[0, 1)` w/ 53-bit resolution, keeps the top 53 bits of `v`.
#[inline(always)]
pub fn to_res53(v: u64) -> f64 {
    (v >> 11) as f64 * (1.0 / 9007199254740992.0)
}

/// `[0, 1)` w/ 53-bit resolution from two 32-bit draws, `lo` drawn first.
#[inline(always)]
pub fn to_res53_mix(lo: u32, hi: u32) -> f64 {
    to_res53(lo as u64 | ((hi as u64) << 32))
}
