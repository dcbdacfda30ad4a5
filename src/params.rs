//! SFMT-19937 parameter set.
//!
//! Every constant here is fixed by the Mersenne exponent; nothing is tunable at
//! runtime.

/// Mersenne exponent, the period is a multiple of `2^MEXP - 1`.
pub const MEXP: usize = 19937;

/// State size in 128-bit words.
pub const N: usize = MEXP / 128 + 1;

/// State size in 32-bit words.
pub const N32: usize = N * 4;

/// State size in 64-bit words.
pub const N64: usize = N * 2;

pub(crate) const POS1: usize = 122;

// `SL1`/`SR1` shift each 32-bit lane, `SL2`/`SR2` shift the whole 128-bit word
// by a number of bytes.
pub(crate) const SL1: i32 = 18;
pub(crate) const SL2: i32 = 1;
pub(crate) const SR1: i32 = 11;
pub(crate) const SR2: i32 = 1;

pub(crate) const MSK: [u32; 4] = [0xdfffffef, 0xddfecb7f, 0xbffaffff, 0xbffffff6];
pub(crate) const PARITY: [u32; 4] = [0x00000001, 0x00000000, 0x00000000, 0x13c9e684];

/// Identifier of the parameter set, `SFMT-<MEXP>:<POS1>-<SL1>-<SL2>-<SR1>-<SR2>:<MSK>`.
pub const ID_STRING: &str = "SFMT-19937:122-18-1-11-1:dfffffef-ddfecb7f-bffaffff-bffffff6";

/// Smallest buffer accepted by [`crate::Sfmt::fill_u32`].
pub const MIN_ARRAY_SIZE32: usize = N32;

/// Smallest buffer accepted by [`crate::Sfmt::fill_u64`].
pub const MIN_ARRAY_SIZE64: usize = N64;

const _: () = assert!(POS1 < N);
const _: () = assert!(SL2 > 0 && SL2 < 16 && SR2 > 0 && SR2 < 16);
