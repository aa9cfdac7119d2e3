use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::error::PricingError;
use crate::geo;
use crate::tiers::TierSchedule;
use crate::types::{Site, Year};

/// A catalog event after the distance and payout passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEvent {
    pub time: String,
    pub magnitude: f64,
    pub distance_km: f64,
    pub payout: f64,
}

/// Run the distance engine over the catalog, then assign a payout to every
/// event. Distances are always computed first; the payout rule reads only
/// the derived distance and the magnitude.
pub fn score_events(
    records: &[CatalogRecord],
    site: Site,
    schedule: &TierSchedule,
) -> Result<Vec<ScoredEvent>, PricingError> {
    let latitudes: Vec<f64> = records.iter().map(|r| r.latitude).collect();
    let longitudes: Vec<f64> = records.iter().map(|r| r.longitude).collect();
    let distances =
        geo::haversine_distances(&latitudes, &longitudes, site.latitude, site.longitude)?;

    Ok(records
        .iter()
        .zip(distances)
        .map(|(record, distance_km)| ScoredEvent {
            time: record.time.clone(),
            magnitude: record.magnitude,
            distance_km,
            payout: schedule.payout_for(distance_km, record.magnitude),
        })
        .collect())
}

/// Worst-case payout per calendar year.
///
/// Every event contributes to its year's bucket, so a year whose events all
/// paid zero still appears with value 0. The map is keyed by `Year`, whose
/// ordering lets [`burning_cost`] slice an inclusive window directly.
pub fn aggregate_annual(
    events: &[ScoredEvent],
) -> Result<BTreeMap<Year, f64>, PricingError> {
    let mut annual: BTreeMap<Year, f64> = BTreeMap::new();
    for (index, event) in events.iter().enumerate() {
        let year = Year::from_timestamp(&event.time).ok_or_else(|| {
            PricingError::MalformedTimestamp { index, time: event.time.clone() }
        })?;
        let max = annual.entry(year).or_insert(event.payout);
        if event.payout > *max {
            *max = event.payout;
        }
    }
    Ok(annual)
}

/// Arithmetic mean of the annual maxima over `[start, end]` inclusive.
/// Selecting no years (window outside the catalog, or start > end) is an
/// error rather than a NaN.
pub fn burning_cost(
    annual: &BTreeMap<Year, f64>,
    start: Year,
    end: Year,
) -> Result<f64, PricingError> {
    if start > end {
        return Err(PricingError::EmptyRange { start, end });
    }

    let mut sum = 0.0;
    let mut count = 0usize;
    for (_, payout) in annual.range(start..=end) {
        sum += payout;
        count += 1;
    }

    if count == 0 {
        return Err(PricingError::EmptyRange { start, end });
    }
    Ok(sum / count as f64)
}

/// Full pipeline for one site: score, aggregate, average.
pub fn estimate(
    records: &[CatalogRecord],
    site: Site,
    schedule: &TierSchedule,
    start: Year,
    end: Year,
) -> Result<f64, PricingError> {
    let scored = score_events(records, site, schedule)?;
    let annual = aggregate_annual(&scored)?;
    burning_cost(&annual, start, end)
}
