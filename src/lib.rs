//! SIMD-oriented Fast Mersenne Twister (SFMT-19937).
//!
//! ```
//! use sfmt_rand::Sfmt;
//!
//! let mut rng = Sfmt::from_seed(1234);
//! assert_eq!(rng.next_u32(), 3440181298);
//!
//! let roll = rng.d20();
//! assert!((1..=20).contains(&roll));
//! ```
//!
//! SFMT is **not** cryptographically secure.

mod config;
pub mod convert;
mod dice;
mod engine;
mod error;
pub mod params;
mod registry;
mod sfmt;
mod state;

pub use config::SeedSource;
pub use error::{Result, SfmtError};
pub use registry::{Handle, Registry};

/// One SFMT-19937 generator.
///
/// Every instance owns its state outright; instances never share anything, so
/// separate generators can live on separate threads freely. Draws take
/// `&mut self`, which keeps a single instance from being advanced concurrently.
pub struct Sfmt {
    state: state::State,
}

impl Sfmt {
    /// Seeds from the platform cycle counter.
    #[inline(always)]
    pub fn new() -> Self {
        Self::from_seed(crate::sfmt::platform_seed())
    }

    #[inline(always)]
    pub fn from_seed(seed: u32) -> Self {
        Self {
            state: state::State::new(crate::sfmt::InnerState::from_seed(seed)),
        }
    }

    /// Seeds from a key of any non-empty length.
    pub fn from_key(key: &[u32]) -> Result<Self> {
        let inner = crate::sfmt::InnerState::from_key(key)?;

        Ok(Self {
            state: state::State::new(inner),
        })
    }

    /// Name of the parameter set, see [`params::ID_STRING`].
    #[inline(always)]
    pub fn id_string(&self) -> &'static str {
        params::ID_STRING
    }

    /// Smallest buffer [`Sfmt::fill_u32`] accepts.
    #[inline(always)]
    pub fn min_array_size32(&self) -> usize {
        params::MIN_ARRAY_SIZE32
    }

    /// Smallest buffer [`Sfmt::fill_u64`] accepts.
    #[inline(always)]
    pub fn min_array_size64(&self) -> usize {
        params::MIN_ARRAY_SIZE64
    }

    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        self.state.gen_32()
    }

    /// Next aligned 64-bit word (two 32-bit words, low first).
    ///
    /// After an odd number of 32-bit draws one word is skipped.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state.gen_64()
    }

    /// Generates straight into `buf`, bypassing the internal buffer.
    ///
    /// `buf.len()` must be a multiple of 4 and at least [`Sfmt::min_array_size32`].
    /// Values still buffered from earlier draws are dropped; the next single draw
    /// continues after the last value written to `buf`.
    #[inline(always)]
    pub fn fill_u32(&mut self, buf: &mut [u32]) -> Result<()> {
        self.state.fill_32(buf)
    }

    /// Same as [`Sfmt::fill_u32`] for 64-bit words: a multiple of 2 and at least
    /// [`Sfmt::min_array_size64`].
    #[inline(always)]
    pub fn fill_u64(&mut self, buf: &mut [u64]) -> Result<()> {
        self.state.fill_64(buf)
    }

    /// `[0, 1]`
    #[inline(always)]
    pub fn real1(&mut self) -> f64 {
        convert::to_real1(self.next_u32())
    }

    /// `[0, 1)`
    #[inline(always)]
    pub fn real2(&mut self) -> f64 {
        convert::to_real2(self.next_u32())
    }

    /// `(0, 1)`
    #[inline(always)]
    pub fn real3(&mut self) -> f64 {
        convert::to_real3(self.next_u32())
    }

    /// `[0, 1)` w/ 53-bit resolution from one 64-bit draw.
    #[inline(always)]
    pub fn res53(&mut self) -> f64 {
        convert::to_res53(self.next_u64())
    }

    /// `[0, 1)` w/ 53-bit resolution from two separate 32-bit draws.
    #[inline(always)]
    pub fn res53_mix(&mut self) -> f64 {
        let lo = self.next_u32();
        let hi = self.next_u32();

        convert::to_res53_mix(lo, hi)
    }
}

impl Default for Sfmt {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Sfmt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sfmt").field("id", &params::ID_STRING).finish_non_exhaustive()
    }
}
