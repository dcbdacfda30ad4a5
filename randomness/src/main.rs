use sfmt_rand::{SeedSource, Sfmt};
use statrs::statistics::{Data, Distribution};

const N: usize = 1_000_000;
const DICE_ROLLS: usize = 600_000;

fn entropy(hist: &[usize], total: f64) -> f64 {
    hist.iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

fn report_uniform(name: &str, samples: Vec<f64>) {
    let total = samples.len() as f64;
    let mut hist = [0usize; 256];

    for &v in &samples {
        let idx = ((v * 256.0) as usize).min(255);
        hist[idx] += 1;
    }

    let data = Data::new(samples);
    let mean = data.mean().unwrap_or(f64::NAN);
    let var = data.variance().unwrap_or(f64::NAN);

    println!("{name}:");
    println!("  mean     : {:.6}", mean);
    println!("  variance : {:.6}", var);
    println!("  entropy  : {:.3} bits", entropy(&hist, total));
    println!();
}

fn report_d6(rng: &mut Sfmt) {
    let mut hits = [0usize; 7];

    for _ in 0..DICE_ROLLS {
        hits[rng.d6() as usize] += 1;
    }

    let expected = DICE_ROLLS as f64 / 6.0;
    let chi2: f64 = hits[1..]
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();

    println!("d6 ({DICE_ROLLS} rolls):");
    println!("  faces    : {:?}", &hits[1..]);
    println!("  chi2     : {:.3} (5 dof, 11.07 at p=0.05)", chi2);
    println!();
}

fn main() {
    env_logger::init();

    // NOTE: `RANDOMNESS_SEED` takes a `SeedSource` as json, e.g. `{"key":[1,2,3]}`
    let source = std::env::var("RANDOMNESS_SEED")
        .ok()
        .and_then(|raw| match serde_json::from_str::<SeedSource>(&raw) {
            Ok(src) => Some(src),
            Err(err) => {
                log::warn!("ignoring RANDOMNESS_SEED={raw:?}: {err}");
                None
            }
        })
        .unwrap_or(SeedSource::Seed(0x1234));

    let mut rng = match source.build() {
        Ok(rng) => rng,
        Err(err) => {
            eprintln!("cannot build generator from {source:?}: {err}");
            std::process::exit(1);
        }
    };

    println!("{} seeded from {:?}", rng.id_string(), source);
    println!();

    report_uniform("real2", (0..N).map(|_| rng.real2()).collect());
    report_uniform("res53", (0..N).map(|_| rng.res53()).collect());
    report_d6(&mut rng);

    println!("(expected ~mean=0.5, var=0.0833, entropy≈8 bits)");
}
