use sfmt_rand::Sfmt;
use std::hint::black_box;
use std::time::Instant;

const NUM_RANDOM: usize = 10_000;
const NUM_ITER: usize = 1_000;
const SEED: u32 = 0x9e37_79b9;

fn median(mut results: Vec<f64>) -> f64 {
    results.sort_by(|a, b| a.total_cmp(b));
    results[results.len() / 2]
}

fn bench_bits<F>(mut rng_func: F, bits_per_call: usize) -> f64
where
    F: FnMut(),
{
    let mut results = Vec::with_capacity(NUM_ITER);

    // Warm-up
    for _ in 0..10_000 {
        rng_func();
    }

    for _ in 0..NUM_ITER {
        let start = Instant::now();

        for _ in 0..NUM_RANDOM {
            rng_func();
        }

        let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
        results.push((NUM_RANDOM * bits_per_call) as f64 / elapsed_us);
    }

    median(results)
}

fn bench_throughput() {
    let mut rng = Sfmt::from_seed(SEED);
    let bench_u32 = bench_bits(
        || {
            black_box(rng.next_u32());
        },
        32,
    );

    let mut rng = Sfmt::from_seed(SEED);
    let bench_u64 = bench_bits(
        || {
            black_box(rng.next_u64());
        },
        64,
    );

    let mut rng = Sfmt::from_seed(SEED);
    let bench_res53 = bench_bits(
        || {
            black_box(rng.res53());
        },
        53,
    );

    let mut rng = Sfmt::from_seed(SEED);
    let mut buf = vec![0u32; rng.min_array_size32() * 4];
    let fill_bits = buf.len() * 32;
    let bench_fill = bench_bits(
        || {
            rng.fill_u32(black_box(&mut buf)).expect("bench buffer must be a valid fill size");
        },
        fill_bits,
    );

    println!("\n");
    println!("| API              | Throughput (bits/µs) |");
    println!("|:----------------:|:--------------------:|");
    println!("| next_u32         | {:>20.2} |", bench_u32);
    println!("| next_u64         | {:>20.2} |", bench_u64);
    println!("| res53            | {:>20.2} |", bench_res53);
    println!("| fill_u32 (2496)  | {:>20.2} |", bench_fill);
}

fn bench_randomness() {
    const NUM_BINS: usize = 256;
    const NUM_ITER: usize = 10;

    let mut chi2_results = Vec::with_capacity(NUM_ITER);
    let mut autocorr_results = Vec::with_capacity(NUM_ITER);

    for iter in 0..NUM_ITER {
        let mut rng = Sfmt::from_seed(SEED.wrapping_add(iter as u32));
        let numbers: Vec<u64> = (0..NUM_RANDOM).map(|_| rng.next_u64()).collect();

        // ▶ Histogram / uniformity (Chi-squared)
        let mut bins = vec![0usize; NUM_BINS];

        for &num in &numbers {
            bins[(num % NUM_BINS as u64) as usize] += 1;
        }

        let expected = numbers.len() as f64 / NUM_BINS as f64;

        let chi2: f64 = bins
            .iter()
            .map(|&count| {
                let diff = count as f64 - expected;
                diff * diff / expected
            })
            .sum();

        chi2_results.push(chi2);

        // ▶ Autocorrelation (lag 1)
        let mean: f64 = numbers.iter().map(|&x| x as f64).sum::<f64>() / numbers.len() as f64;

        let mut num_acc = 0.0;
        let mut den_acc = 0.0;

        for pair in numbers.windows(2) {
            let x = pair[0] as f64 - mean;
            let y = pair[1] as f64 - mean;

            num_acc += x * y;
            den_acc += x * x;
        }

        autocorr_results.push(num_acc / den_acc);
    }

    println!("\n");
    println!("| Metric          | Value       |");
    println!("|:---------------:|:-----------:|");
    println!("| Chi-squared     | {:>10.2}  |", median(chi2_results));
    println!("| Autocorrelation | {:>10.5}  |", median(autocorr_results));
}

fn main() {
    println!("## Benchmarks ({})", sfmt_rand::params::ID_STRING);

    bench_throughput();
    bench_randomness();
}
