use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// One rung of the payout ladder: events closer than `max_distance_km` and
/// stronger than `min_magnitude` (both strict) trigger `payout`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub max_distance_km: f64,
    pub min_magnitude: f64,
    pub payout: f64,
}

/// An ordered three-tier payout schedule.
///
/// Tiers are evaluated by list position exactly as supplied by the caller —
/// tier 0 first, tier 2 last — never re-sorted by distance or magnitude.
/// Position order is the tie-break when an event satisfies several tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierSchedule {
    tiers: [Tier; 3],
}

impl TierSchedule {
    pub const TIER_COUNT: usize = 3;

    pub fn new(tiers: Vec<Tier>) -> Result<Self, PricingError> {
        let count = tiers.len();
        let tiers: [Tier; 3] = tiers
            .try_into()
            .map_err(|_| PricingError::InvalidTierSchedule { count })?;
        Ok(TierSchedule { tiers })
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Default schedule for the CLI: full payout for a strong quake under the
    /// site, tapering with distance. Calibrated for a ~200 km search radius
    /// around a Mediterranean site.
    pub fn canonical() -> Self {
        TierSchedule {
            tiers: [
                Tier { max_distance_km: 10.0, min_magnitude: 4.5, payout: 1.00 },
                Tier { max_distance_km: 50.0, min_magnitude: 5.5, payout: 0.75 },
                Tier { max_distance_km: 200.0, min_magnitude: 6.5, payout: 0.50 },
            ],
        }
    }

    /// Payout for one event, first matching tier wins, no match pays 0.
    /// Both comparisons are strict, so an event exactly on a tier boundary
    /// falls through to the next tier.
    pub fn payout_for(&self, distance_km: f64, magnitude: f64) -> f64 {
        for tier in &self.tiers {
            if distance_km < tier.max_distance_km && magnitude > tier.min_magnitude {
                return tier.payout;
            }
        }
        0.0
    }
}

impl TryFrom<Vec<Tier>> for TierSchedule {
    type Error = PricingError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self, Self::Error> {
        TierSchedule::new(tiers)
    }
}

impl From<TierSchedule> for Vec<Tier> {
    fn from(schedule: TierSchedule) -> Self {
        schedule.tiers.to_vec()
    }
}
