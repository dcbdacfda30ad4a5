#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;
#[cfg_attr(any(target_arch = "x86_64", target_arch = "aarch64"), allow(dead_code))]
pub(crate) mod portable;
#[cfg(target_arch = "x86_64")]
pub(crate) mod sse2;

use crate::params::{N, POS1};

// NOTE: SSE2 is baseline on every x86_64 CPU and NEON on every aarch64 one, so
// the engine is picked at compile time w/o runtime detection.
#[cfg(target_arch = "x86_64")]
pub(crate) type Native = sse2::Sse2;

#[cfg(target_arch = "aarch64")]
pub(crate) type Native = neon::Neon;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(crate) type Native = portable::Portable;

/// One 128-bit word of the state, as four 32-bit lanes (lane 0 is least significant).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(16))]
pub(crate) struct W128(pub(crate) [u32; 4]);

impl W128 {
    #[cfg_attr(any(target_arch = "x86_64", target_arch = "aarch64"), allow(dead_code))]
    #[inline(always)]
    pub(crate) fn as_u128(self) -> u128 {
        let [w0, w1, w2, w3] = self.0;

        (w0 as u128) | ((w1 as u128) << 32) | ((w2 as u128) << 64) | ((w3 as u128) << 96)
    }

    #[cfg_attr(any(target_arch = "x86_64", target_arch = "aarch64"), allow(dead_code))]
    #[inline(always)]
    pub(crate) fn from_u128(v: u128) -> Self {
        Self([v as u32, (v >> 32) as u32, (v >> 64) as u32, (v >> 96) as u32])
    }

    #[inline(always)]
    fn from_u64s(lo: u64, hi: u64) -> Self {
        Self([lo as u32, (lo >> 32) as u32, hi as u32, (hi >> 32) as u32])
    }

    #[inline(always)]
    fn u64s(self) -> [u64; 2] {
        let [w0, w1, w2, w3] = self.0;

        [(w0 as u64) | ((w1 as u64) << 32), (w2 as u64) | ((w3 as u64) << 32)]
    }
}

/// A SIMD (or scalar) backend for the SFMT recurrence.
///
/// Every engine must be bit-identical to [`portable::Portable`].
pub(crate) trait Engine {
    type Lane: Copy;

    fn load(w: &W128) -> Self::Lane;
    fn store(lane: Self::Lane) -> W128;

    /// `a ^ (a << SL2 bytes) ^ ((b >> SR1) & MSK) ^ (c >> SR2 bytes) ^ (d << SL1)`
    fn recursion(a: Self::Lane, b: Self::Lane, c: Self::Lane, d: Self::Lane) -> Self::Lane;
}

/// Caller-owned storage viewed as a run of 128-bit blocks.
pub(crate) trait Blocks {
    fn blocks(&self) -> usize;
    fn block(&self, i: usize) -> W128;
    fn set_block(&mut self, i: usize, w: W128);
}

impl Blocks for [u32] {
    #[inline(always)]
    fn blocks(&self) -> usize {
        self.len() / 4
    }

    #[inline(always)]
    fn block(&self, i: usize) -> W128 {
        let w = &self[i * 4..i * 4 + 4];
        W128([w[0], w[1], w[2], w[3]])
    }

    #[inline(always)]
    fn set_block(&mut self, i: usize, w: W128) {
        self[i * 4..i * 4 + 4].copy_from_slice(&w.0);
    }
}

impl Blocks for [u64] {
    #[inline(always)]
    fn blocks(&self) -> usize {
        self.len() / 2
    }

    #[inline(always)]
    fn block(&self, i: usize) -> W128 {
        W128::from_u64s(self[i * 2], self[i * 2 + 1])
    }

    #[inline(always)]
    fn set_block(&mut self, i: usize, w: W128) {
        let [lo, hi] = w.u64s();

        self[i * 2] = lo;
        self[i * 2 + 1] = hi;
    }
}

/// Replaces the whole state w/ the next `N` blocks of output.
pub(crate) fn regen_state<E: Engine>(state: &mut [W128; N]) {
    let mut r1 = E::load(&state[N - 2]);
    let mut r2 = E::load(&state[N - 1]);

    for i in 0..N {
        // past `N - POS1` the `b` operand is a block already rewritten in this pass
        let b_idx = if i + POS1 < N { i + POS1 } else { i + POS1 - N };

        let out = E::recursion(E::load(&state[i]), E::load(&state[b_idx]), r1, r2);
        state[i] = E::store(out);

        r1 = r2;
        r2 = out;
    }
}

/// Writes `out.blocks()` blocks of output straight into `out`, continuing from
/// `state`, then leaves the last `N` of them as the new state.
///
/// `out` must hold at least `N` blocks.
pub(crate) fn regen_into<E: Engine, B: Blocks + ?Sized>(state: &mut [W128; N], out: &mut B) {
    let size = out.blocks();

    // sanity check
    debug_assert!(size >= N, "bulk output must cover at least one full state");

    let mut r1 = E::load(&state[N - 2]);
    let mut r2 = E::load(&state[N - 1]);

    for i in 0..size {
        let a = if i < N {
            E::load(&state[i])
        } else {
            E::load(&out.block(i - N))
        };

        let b = if i + POS1 < N {
            E::load(&state[i + POS1])
        } else {
            E::load(&out.block(i + POS1 - N))
        };

        let r = E::recursion(a, b, r1, r2);
        out.set_block(i, E::store(r));

        r1 = r2;
        r2 = r;
    }

    for (j, w) in state.iter_mut().enumerate() {
        *w = out.block(size - N + j);
    }
}
