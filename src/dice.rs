//! Dice, coin and card helpers.
//!
//! Each draw is `floor(faces * real2() + 1)`, one `real2` per value.

use crate::Sfmt;

impl Sfmt {
    #[inline(always)]
    fn roll(&mut self, faces: f64) -> u32 {
        (faces * self.real2() + 1.0).floor() as u32
    }

    /// `1..=4`
    pub fn d4(&mut self) -> u32 {
        self.roll(4.0)
    }

    /// `1..=6`
    pub fn d6(&mut self) -> u32 {
        self.roll(6.0)
    }

    /// `1..=8`
    pub fn d8(&mut self) -> u32 {
        self.roll(8.0)
    }

    /// `1..=10`
    pub fn d10(&mut self) -> u32 {
        self.roll(10.0)
    }

    /// `1..=12`
    pub fn d12(&mut self) -> u32 {
        self.roll(12.0)
    }

    /// `1..=20`
    pub fn d20(&mut self) -> u32 {
        self.roll(20.0)
    }

    /// `0` or `1`
    pub fn toss(&mut self) -> u32 {
        (2.0 * self.real2()).floor() as u32
    }

    /// One card of a 52 card deck, `1..=52`.
    pub fn card(&mut self) -> u32 {
        self.roll(52.0)
    }

    /// `(suit, rank)` as `(1..=4, 1..=13)`, suit drawn first.
    pub fn card2(&mut self) -> (u32, u32) {
        let suit = self.roll(4.0);
        let rank = self.roll(13.0);

        (suit, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAWS: usize = 100_000;

    fn histogram(faces: usize, mut draw: impl FnMut() -> u32) -> Vec<usize> {
        let mut hits = vec![0usize; faces + 1];

        for _ in 0..DRAWS {
            let v = draw() as usize;
            assert!((1..=faces).contains(&v), "value {v} outside 1..={faces}");

            hits[v] += 1;
        }

        hits
    }

    #[test]
    fn test_every_die_stays_in_bounds_and_hits_every_face() {
        let mut rng = Sfmt::from_seed(2024);

        let dice: [(usize, fn(&mut Sfmt) -> u32); 6] = [
            (4, Sfmt::d4),
            (6, Sfmt::d6),
            (8, Sfmt::d8),
            (10, Sfmt::d10),
            (12, Sfmt::d12),
            (20, Sfmt::d20),
        ];

        for (faces, die) in dice {
            let hits = histogram(faces, || die(&mut rng));
            assert!(hits[1..].iter().all(|&h| h > 0), "d{faces} missed a face: {hits:?}");
        }
    }

    #[test]
    fn test_d6_is_roughly_uniform() {
        let mut rng = Sfmt::from_seed(7777);
        let hits = histogram(6, || rng.d6());

        let avg = DRAWS as f64 / 6.0;
        let max_dev = hits[1..].iter().map(|&x| (x as f64 - avg).abs()).fold(0.0, f64::max);

        assert!(max_dev / avg < 0.05, "rough uniformity check failed: {hits:?}");
    }

    #[test]
    fn test_d6_reference_rolls() {
        let mut rng = Sfmt::from_seed(1234);
        let rolls: Vec<u32> = (0..10).map(|_| rng.d6()).collect();

        assert_eq!(rolls, [5, 3, 3, 5, 3, 6, 1, 3, 6, 5]);
    }

    #[test]
    fn test_toss_yields_both_sides() {
        let mut rng = Sfmt::from_seed(3);
        let mut sides = [0usize; 2];

        for _ in 0..DRAWS {
            let t = rng.toss();
            assert!(t <= 1);

            sides[t as usize] += 1;
        }

        assert!(sides.iter().all(|&s| s > 0));
    }

    #[test]
    fn test_card_covers_full_deck() {
        let mut rng = Sfmt::from_seed(52);
        let hits = histogram(52, || rng.card());

        assert!(hits[1..].iter().all(|&h| h > 0));
    }

    #[test]
    fn test_card_consumes_one_draw() {
        let mut a = Sfmt::from_seed(9);
        let mut b = Sfmt::from_seed(9);

        a.card();
        b.next_u32();

        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_card2_draws_suit_then_rank() {
        let mut a = Sfmt::from_seed(11);
        let mut b = Sfmt::from_seed(11);

        for _ in 0..10_000 {
            let (suit, rank) = a.card2();

            assert!((1..=4).contains(&suit));
            assert!((1..=13).contains(&rank));

            assert_eq!(suit, (4.0 * b.real2() + 1.0).floor() as u32);
            assert_eq!(rank, (13.0 * b.real2() + 1.0).floor() as u32);
        }
    }
}
