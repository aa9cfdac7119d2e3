use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use burncost::burning;
use burncost::catalog::CatalogRecord;
use burncost::synthetic::{SyntheticConfig, generate_catalog};
use burncost::tiers::TierSchedule;
use burncost::types::{Site, Year};
use burncost::geo;

fn fixture_catalog(n_years: u16) -> Vec<CatalogRecord> {
    let config = SyntheticConfig::canonical();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    generate_catalog(&config, n_years, &mut rng)
}

fn site() -> Site {
    Site { latitude: 35.025, longitude: 25.763 }
}

// ── Group 1: haversine — coordinate count scaling ───────────────────────────

fn bench_haversine(c: &mut Criterion) {
    let mut group = c.benchmark_group("haversine");
    for &count in &[1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            let lats: Vec<f64> = (0..n).map(|i| 30.0 + (i % 1_000) as f64 * 0.01).collect();
            let lons: Vec<f64> = (0..n).map(|i| 20.0 + (i % 1_000) as f64 * 0.01).collect();
            b.iter(|| geo::haversine_distances(&lats, &lons, 35.025, 25.763))
        });
    }
    group.finish();
}

// ── Group 2: scoring — distance + tier assignment per event ─────────────────

fn bench_score_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_events");
    let schedule = TierSchedule::canonical();
    for &years in &[50u16, 200, 1_000] {
        let records = fixture_catalog(years);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &records, |b, records| {
            b.iter(|| burning::score_events(records, site(), &schedule))
        });
    }
    group.finish();
}

// ── Group 3: annual aggregation ─────────────────────────────────────────────

fn bench_aggregate_annual(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_annual");
    let schedule = TierSchedule::canonical();
    for &years in &[200u16, 1_000] {
        let records = fixture_catalog(years);
        let scored = burning::score_events(&records, site(), &schedule).expect("score");
        group.throughput(Throughput::Elements(scored.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &scored, |b, scored| {
            b.iter_batched(
                || scored.clone(),
                |scored| burning::aggregate_annual(&scored),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

// ── Group 4: full pipeline — end-to-end estimate ────────────────────────────

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    let schedule = TierSchedule::canonical();
    for &years in &[50u16, 200, 1_000] {
        let records = fixture_catalog(years);
        let start = Year(1825);
        let end = Year(1825 + years - 1);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(years), &records, |b, records| {
            b.iter(|| burning::estimate(records, site(), &schedule, start, end))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_haversine,
    bench_score_events,
    bench_aggregate_annual,
    bench_estimate,
);
criterion_main!(benches);
