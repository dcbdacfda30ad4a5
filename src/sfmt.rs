use crate::engine::W128;
use crate::error::{Result, SfmtError};
use crate::params::{N, N32, PARITY};

const SEED_MULT: u32 = 1812433253;

const KEY_FILL: u32 = 0x8b8b_8b8b;
const KEY_MULT1: u32 = 1664525;
const KEY_MULT2: u32 = 1566083941;

/// Freshly initialized state, flat 32-bit view (word `4 * i + k` is lane `k` of block `i`).
#[repr(align(16))]
pub(crate) struct InnerState(pub(crate) [u32; N32]);

impl InnerState {
    pub(crate) fn from_seed(seed: u32) -> Self {
        let mut s = [0u32; N32];

        s[0] = seed;

        // mersenne twister style state expansion w/ `s[i] = f(s[i-1], i)`
        for i in 1..N32 {
            let prev = s[i - 1];

            s[i] = SEED_MULT
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        let flipped = Self::period_cert(&mut s);
        log::debug!("sfmt state initialized from seed {seed:#010x} (certification flip: {flipped})");

        Self(s)
    }

    /// Mixes an arbitrary length key into the state.
    ///
    /// Every key word influences every state word, and keys longer than the
    /// state are consumed in full.
    pub(crate) fn from_key(key: &[u32]) -> Result<Self> {
        if key.is_empty() {
            return Err(SfmtError::EmptyKeyArray);
        }

        const SIZE: usize = N32;
        const LAG: usize = key_lag(SIZE);
        const MID: usize = (SIZE - LAG) / 2;

        let at = |i: usize| i % SIZE;

        let mut s = [KEY_FILL; N32];
        let count = core::cmp::max(key.len() + 1, SIZE);

        let mut r = mix1(s[0] ^ s[MID] ^ s[SIZE - 1]);
        s[MID] = s[MID].wrapping_add(r);
        r = r.wrapping_add(key.len() as u32);
        s[MID + LAG] = s[MID + LAG].wrapping_add(r);
        s[0] = r;

        let mut i = 1usize;

        // inject the key, cycling positions once the key runs out
        for j in 0..count - 1 {
            r = mix1(s[i] ^ s[at(i + MID)] ^ s[at(i + SIZE - 1)]);
            s[at(i + MID)] = s[at(i + MID)].wrapping_add(r);

            let k = key.get(j).copied().unwrap_or(0);
            r = r.wrapping_add(k).wrapping_add(i as u32);

            s[at(i + MID + LAG)] = s[at(i + MID + LAG)].wrapping_add(r);
            s[i] = r;

            i = at(i + 1);
        }

        // key independent final mix
        for _ in 0..SIZE {
            r = mix2(s[i].wrapping_add(s[at(i + MID)]).wrapping_add(s[at(i + SIZE - 1)]));
            s[at(i + MID)] ^= r;

            r = r.wrapping_sub(i as u32);

            s[at(i + MID + LAG)] ^= r;
            s[i] = r;

            i = at(i + 1);
        }

        let flipped = Self::period_cert(&mut s);
        log::debug!(
            "sfmt state initialized from {} word key (certification flip: {flipped})",
            key.len()
        );

        Ok(Self(s))
    }

    /// Ensures that the initialized SFMT state satisfies the **period certification**
    /// condition required for maximal period (`2^19937 - 1`).
    ///
    /// Returns `true` when a bit had to be flipped.
    fn period_cert(state: &mut [u32; N32]) -> bool {
        let inner = (0..4).fold(0u32, |acc, i| acc ^ (state[i] & PARITY[i]));

        if inner.count_ones() & 1 == 1 {
            return false;
        }

        // NOTE: As bit parity is even, we flip the lowest order bit set in `PARITY`
        for i in 0..4 {
            if PARITY[i] != 0 {
                state[i] ^= 1u32 << PARITY[i].trailing_zeros();
                return true;
            }
        }

        false
    }

    pub(crate) fn into_blocks(self) -> [W128; N] {
        let s = self.0;

        core::array::from_fn(|i| W128([s[i * 4], s[i * 4 + 1], s[i * 4 + 2], s[i * 4 + 3]]))
    }
}

const fn key_lag(size: usize) -> usize {
    if size >= 623 {
        11
    } else if size >= 68 {
        7
    } else if size >= 39 {
        5
    } else {
        3
    }
}

#[inline(always)]
fn mix1(x: u32) -> u32 {
    (x ^ (x >> 27)).wrapping_mul(KEY_MULT1)
}

#[inline(always)]
fn mix2(x: u32) -> u32 {
    (x ^ (x >> 27)).wrapping_mul(KEY_MULT2)
}

/// Generate a custom seed w/ help of underlying hardware.
pub(crate) fn platform_seed() -> u32 {
    let cnt = cycle_counter();
    (cnt ^ (cnt >> 32)) as u32
}

// NOTE: On x86_64, the `rdtsc` is reliable and generally available in all three OS.
// It's fast as it avoids syscall overhead.
#[cfg(target_arch = "x86_64")]
fn cycle_counter() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

// NOTE: On aarch64, we read the virtual counter `cntvct`. It provides high-res
// monotonic value w/o syscall overhead.
#[cfg(all(target_arch = "aarch64", not(target_os = "windows")))]
fn cycle_counter() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {0}, cntvct_el0", out(reg) cnt) };

    cnt
}

// WARN: On Win-Aarch64 `cntvct` is deemed an illegal instruction, so the wall
// clock is the only viable option (same for every other target)
#[cfg(not(any(target_arch = "x86_64", all(target_arch = "aarch64", not(target_os = "windows")))))]
fn cycle_counter() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| (d.as_secs() << 32) ^ d.subsec_nanos() as u64)
        .unwrap_or(0)
}
