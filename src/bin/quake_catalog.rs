use std::collections::BTreeMap;
use std::env;
use std::io::Write;

use burncost::catalog;
use burncost::synthetic::{SyntheticConfig, generate_catalog};
use burncost::types::Year;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() {
    let config = SyntheticConfig::canonical();

    let n_years: u16 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(200);
    let seed: u64 = env::args().nth(2).and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let records = generate_catalog(&config, n_years, &mut rng);

    // Catalog CSV to stdout.
    let stdout = std::io::stdout();
    catalog::write_catalog(stdout.lock(), &records).expect("write catalog");

    // Per-year summary to stderr.
    let mut year_counts: BTreeMap<Year, usize> = BTreeMap::new();
    let mut year_max_mag: BTreeMap<Year, f64> = BTreeMap::new();
    for record in &records {
        let year = Year::from_timestamp(&record.time).expect("generated timestamp");
        *year_counts.entry(year).or_insert(0) += 1;
        let max = year_max_mag.entry(year).or_insert(record.magnitude);
        if record.magnitude > *max {
            *max = record.magnitude;
        }
    }

    let stderr = std::io::stderr();
    let mut err = stderr.lock();
    writeln!(
        err,
        "quake_catalog: {} years, {} events (expected ~{:.0}), seed {seed}",
        n_years,
        records.len(),
        config.annual_frequency * n_years as f64
    )
    .expect("stderr");
    for (year, count) in &year_counts {
        writeln!(
            err,
            "  year={year}  events={count:>3}  max_mag={:.2}",
            year_max_mag[year]
        )
        .expect("stderr");
    }
}
