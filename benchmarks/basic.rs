use sfmt_rand::Sfmt;
use std::hint::black_box;
use std::time::Instant;

const ITERS: usize = 10_000_000;

fn main() {
    let mut rng = Sfmt::from_seed(0xDEADBEEF);

    // warmup
    for _ in 0..1_000 {
        black_box(rng.next_u64());
    }

    let mut _acc: u64 = 0;
    let start = Instant::now();

    for _ in 0..ITERS {
        // NOTE: We consume result to avoid optimizations
        _acc = _acc.wrapping_add(black_box(rng.next_u64()));
    }

    let elapsed = start.elapsed();
    let thpt = elapsed.as_nanos().wrapping_div(ITERS as u128);

    println!("iters={}, ns_per_u64={}, time_ns={}", ITERS, thpt, elapsed.as_nanos());
}
