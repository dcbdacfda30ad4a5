use core::marker::PhantomData;

use crate::engine::{self, Blocks, Engine, Native, W128};
use crate::error::{Result, SfmtError};
use crate::params::{MIN_ARRAY_SIZE32, MIN_ARRAY_SIZE64, N, N32};
use crate::sfmt::InnerState;

/// State buffer plus the read cursor, measured in 32-bit words.
///
/// `idx == N32` means every buffered word has been handed out and the next read
/// must regenerate first.
pub(crate) struct State<E: Engine = Native> {
    state: [W128; N],
    idx: usize,
    _engine: PhantomData<fn() -> E>,
}

impl<E: Engine> State<E> {
    #[inline(always)]
    pub(crate) fn new(inner: InnerState) -> Self {
        Self {
            state: inner.into_blocks(),
            idx: N32,
            _engine: PhantomData,
        }
    }

    #[inline(always)]
    fn regen(&mut self) {
        engine::regen_state::<E>(&mut self.state);
        self.idx = 0;

        log::trace!("sfmt state regenerated");
    }

    #[inline(always)]
    pub(crate) fn gen_32(&mut self) -> u32 {
        // sanity check
        debug_assert!(self.idx <= N32);

        if self.idx == N32 {
            self.regen();
        }

        let val = self.state[self.idx / 4].0[self.idx % 4];
        self.idx += 1;

        val
    }

    /// Reads the buffer's 64-bit view, low word first.
    ///
    /// 64-bit reads always start at an even word, an odd cursor skips one word,
    /// so a value never spans two generations.
    #[inline(always)]
    pub(crate) fn gen_64(&mut self) -> u64 {
        self.idx += self.idx & 1;

        // sanity check
        debug_assert!(self.idx <= N32);

        if self.idx == N32 {
            self.regen();
        }

        let w = self.state[self.idx / 4].0;
        let k = self.idx % 4;
        self.idx += 2;

        (w[k] as u64) | ((w[k + 1] as u64) << 32)
    }

    pub(crate) fn fill_32(&mut self, buf: &mut [u32]) -> Result<()> {
        check_len(buf.len(), 4, MIN_ARRAY_SIZE32)?;
        self.fill(buf);

        Ok(())
    }

    pub(crate) fn fill_64(&mut self, buf: &mut [u64]) -> Result<()> {
        check_len(buf.len(), 2, MIN_ARRAY_SIZE64)?;
        self.fill(buf);

        Ok(())
    }

    // NOTE: words still buffered from the current block are skipped, the bulk
    // output continues right after the block held in `state`
    fn fill<B: Blocks + ?Sized>(&mut self, buf: &mut B) {
        let skipped = N32 - self.idx;

        engine::regen_into::<E, B>(&mut self.state, buf);
        self.idx = N32;

        log::trace!("sfmt filled {} blocks ({skipped} buffered words skipped)", buf.blocks());
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> usize {
        self.idx
    }
}

fn check_len(len: usize, multiple: usize, min: usize) -> Result<()> {
    if len % multiple != 0 {
        return Err(SfmtError::BufferSizeMisaligned { len, multiple });
    }

    if len < min {
        return Err(SfmtError::BufferTooSmall { len, min });
    }

    Ok(())
}

#[cfg(test)]
mod state_tests {
    use super::*;
    use crate::engine::portable::Portable;
    use crate::params::N64;

    fn seeded(seed: u32) -> State {
        State::new(InnerState::from_seed(seed))
    }

    mod draws {
        use super::*;

        #[test]
        fn test_seed_1234_matches_reference_output() {
            let mut st = seeded(1234);
            let got: Vec<u32> = (0..5).map(|_| st.gen_32()).collect();

            assert_eq!(got, [3440181298, 1564997079, 1510669302, 2930277156, 1452439940]);
        }

        #[test]
        fn test_seed_4321_matches_reference_u64_output() {
            let mut st = seeded(4321);
            let got: Vec<u64> = (0..3).map(|_| st.gen_64()).collect();

            assert_eq!(got, [16924766246869039260, 8201438687333352714, 2265290287015001750]);
        }

        #[test]
        fn test_u64_is_low_word_first() {
            let mut a = seeded(1234);
            let mut b = seeded(1234);

            let lo = b.gen_32() as u64;
            let hi = b.gen_32() as u64;

            assert_eq!(a.gen_64(), lo | (hi << 32));
            assert_eq!(a.gen_64(), 12585444554746559478);
        }

        #[test]
        fn test_u64_after_odd_u32_read_skips_to_even_word() {
            let mut a = seeded(1234);
            let mut b = seeded(1234);

            a.gen_32();
            let words: Vec<u64> = (0..4).map(|_| b.gen_32() as u64).collect();

            assert_eq!(a.gen_64(), words[2] | (words[3] << 32));
            assert_eq!(a.index(), 4);
        }

        #[test]
        fn test_u64_on_last_word_takes_first_word_of_next_block() {
            let mut a = seeded(77);
            let mut b = seeded(77);

            for _ in 0..N32 - 1 {
                a.gen_32();
            }
            assert_eq!(a.index(), N32 - 1);

            for _ in 0..N32 {
                b.gen_32();
            }
            let lo = b.gen_32() as u64;
            let hi = b.gen_32() as u64;

            assert_eq!(a.gen_64(), lo | (hi << 32));
            assert_eq!(a.index(), 2);
        }

        #[test]
        fn test_u64_cursor_stays_even_across_blocks() {
            let mut st = seeded(3);

            st.gen_32();
            for _ in 0..N64 * 2 {
                st.gen_64();
                assert_eq!(st.index() % 2, 0);
            }
        }

        #[test]
        fn test_portable_and_native_states_agree() {
            let mut native = seeded(2025);
            let mut portable = State::<Portable>::new(InnerState::from_seed(2025));

            for _ in 0..(N32 * 3 + 7) {
                assert_eq!(native.gen_32(), portable.gen_32());
            }
        }
    }

    mod cursor {
        use super::*;

        #[test]
        fn test_fresh_state_is_exhausted() {
            assert_eq!(seeded(1).index(), N32);
        }

        #[test]
        fn test_cursor_wraps_after_full_block() {
            let mut st = seeded(5);

            st.gen_32();
            assert_eq!(st.index(), 1);

            for _ in 1..N32 {
                st.gen_32();
            }
            assert_eq!(st.index(), N32);

            st.gen_32();
            assert_eq!(st.index(), 1);
        }
    }

    mod fill {
        use super::*;

        #[test]
        fn test_fill_32_rejects_misaligned_length() {
            let mut st = seeded(1);
            let mut buf = [0u32; 5];

            assert_eq!(
                st.fill_32(&mut buf),
                Err(SfmtError::BufferSizeMisaligned { len: 5, multiple: 4 })
            );
        }

        #[test]
        fn test_fill_64_rejects_misaligned_length() {
            let mut st = seeded(1);
            let mut buf = [0u64; 3];

            assert_eq!(
                st.fill_64(&mut buf),
                Err(SfmtError::BufferSizeMisaligned { len: 3, multiple: 2 })
            );
        }

        #[test]
        fn test_fill_rejects_short_buffers() {
            let mut st = seeded(1);

            let mut short32 = vec![0u32; MIN_ARRAY_SIZE32 - 4];
            let mut short64 = vec![0u64; MIN_ARRAY_SIZE64 - 2];

            assert_eq!(
                st.fill_32(&mut short32),
                Err(SfmtError::BufferTooSmall { len: MIN_ARRAY_SIZE32 - 4, min: MIN_ARRAY_SIZE32 })
            );
            assert_eq!(
                st.fill_64(&mut short64),
                Err(SfmtError::BufferTooSmall { len: MIN_ARRAY_SIZE64 - 2, min: MIN_ARRAY_SIZE64 })
            );
            assert!(st.fill_32(&mut []).is_err());
        }

        #[test]
        fn test_rejected_fill_leaves_state_untouched() {
            let mut st = seeded(1234);
            let mut buf = vec![0u32; N32 + 1];

            assert!(st.fill_32(&mut buf).is_err());
            assert!(buf.iter().all(|&w| w == 0));
            assert_eq!(st.index(), N32);
            assert_eq!(st.gen_32(), 3440181298);
        }

        #[test]
        fn test_fill_then_draw_continues_the_sequence() {
            let mut st = seeded(1234);
            let mut buf = vec![0u32; N32 * 2];

            st.fill_32(&mut buf).expect("aligned, large enough buffer");

            assert_eq!(buf[0], 3440181298);
            assert_eq!(buf[N32 * 2 - 1], 2107554388);
            assert_eq!(st.index(), N32);
            assert_eq!(st.gen_32(), 3886048969);
        }

        #[test]
        fn test_fill_is_repeatable_for_same_seed() {
            let mut a = seeded(8);
            let mut b = seeded(8);

            let mut buf_a = vec![0u64; N64 + 2];
            let mut buf_b = vec![0u64; N64 + 2];

            a.fill_64(&mut buf_a).expect("valid buffer");
            b.fill_64(&mut buf_b).expect("valid buffer");

            assert_eq!(buf_a, buf_b);
            assert_eq!(a.gen_64(), b.gen_64());
        }

        #[test]
        fn test_fill_mid_block_skips_buffered_words() {
            let mut st = seeded(1234);
            let mut buf = vec![0u32; N32];

            st.gen_32();
            st.fill_32(&mut buf).expect("valid buffer");

            // the fill starts at the block after the one being read
            let mut reference = seeded(1234);
            for _ in 0..N32 {
                reference.gen_32();
            }

            assert_eq!(buf[0], reference.gen_32());
            assert_eq!(st.index(), N32);
        }
    }
}
