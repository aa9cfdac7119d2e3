use std::fs::File;

use burncost::burning::{self, ScoredEvent};
use burncost::catalog;
use burncost::error::PricingError;
use burncost::tiers::TierSchedule;
use burncost::types::{Site, Year};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut catalog_path: Option<String> = None;
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;
    let mut sites_path: Option<String> = None;
    let mut schedule_path: Option<String> = None;
    let mut start_year: Option<u16> = None;
    let mut end_year: Option<u16> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                i += 1;
                catalog_path = Some(args[i].clone());
            }
            "--latitude" => {
                i += 1;
                latitude = Some(args[i].parse().expect("--latitude requires degrees"));
            }
            "--longitude" => {
                i += 1;
                longitude = Some(args[i].parse().expect("--longitude requires degrees"));
            }
            "--sites" => {
                i += 1;
                sites_path = Some(args[i].clone());
            }
            "--schedule" => {
                i += 1;
                schedule_path = Some(args[i].clone());
            }
            "--start" => {
                i += 1;
                start_year = Some(args[i].parse().expect("--start requires a 4-digit year"));
            }
            "--end" => {
                i += 1;
                end_year = Some(args[i].parse().expect("--end requires a 4-digit year"));
            }
            "--quiet" => quiet = true,
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!(
                    "usage: burncost --catalog events.csv --start 1925 --end 2024 \
                     (--latitude LAT --longitude LON | --sites sites.json) \
                     [--schedule tiers.json] [--quiet]"
                );
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let catalog_path = catalog_path.expect("--catalog is required");
    let start = Year(start_year.expect("--start is required"));
    let end = Year(end_year.expect("--end is required"));

    let file = File::open(&catalog_path)
        .unwrap_or_else(|e| panic!("failed to open {catalog_path}: {e}"));
    let records = catalog::read_catalog(file).unwrap_or_else(|e| fail(e));

    let schedule = match schedule_path {
        Some(path) => {
            let file =
                File::open(&path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));
            serde_json::from_reader(file)
                .unwrap_or_else(|e| panic!("invalid tier schedule in {path}: {e}"))
        }
        None => TierSchedule::canonical(),
    };

    if let Some(path) = sites_path {
        use rayon::prelude::*;

        let file =
            File::open(&path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));
        let sites: Vec<Site> = serde_json::from_reader(file)
            .unwrap_or_else(|e| panic!("invalid sites file {path}: {e}"));

        // Independent pure computations per site; fan out across the pool.
        let results: Vec<(Site, Result<f64, PricingError>)> = sites
            .par_iter()
            .map(|&site| (site, burning::estimate(&records, site, &schedule, start, end)))
            .collect();

        let mut failed = false;
        for (site, result) in results {
            match result {
                Ok(cost) => println!(
                    "({:>9.4}, {:>9.4})  burning cost {start}..{end}: {cost:.6}",
                    site.latitude, site.longitude
                ),
                Err(e) => {
                    failed = true;
                    eprintln!(
                        "({:>9.4}, {:>9.4})  error: {e}",
                        site.latitude, site.longitude
                    );
                }
            }
        }
        if failed {
            std::process::exit(1);
        }
    } else {
        let site = Site {
            latitude: latitude.expect("--latitude is required without --sites"),
            longitude: longitude.expect("--longitude is required without --sites"),
        };

        let scored =
            burning::score_events(&records, site, &schedule).unwrap_or_else(|e| fail(e));
        let annual = burning::aggregate_annual(&scored).unwrap_or_else(|e| fail(e));
        let cost = burning::burning_cost(&annual, start, end).unwrap_or_else(|e| fail(e));

        if !quiet {
            print_annual_table(&scored, &annual, start, end);
        }
        println!("burning cost {start}..{end}: {cost:.6}");
    }
}

fn fail(e: PricingError) -> ! {
    eprintln!("burncost: {e}");
    std::process::exit(1);
}

fn print_annual_table(
    scored: &[ScoredEvent],
    annual: &std::collections::BTreeMap<Year, f64>,
    start: Year,
    end: Year,
) {
    let triggered = scored.iter().filter(|e| e.payout > 0.0).count();
    println!("{} events scored, {triggered} triggered a tier", scored.len());

    println!("\n{:>4} | {:>10} | {}", "Year", "Max payout", "In window");
    println!("{}", "-".repeat(4 + 3 + 10 + 3 + 9));
    for (&year, &payout) in annual {
        let marker = if (start..=end).contains(&year) { "*" } else { "" };
        println!("{year:>4} | {payout:>10.4} | {marker:>9}");
    }
}
