//! Burning-cost estimation for parametric earthquake covers.
//!
//! The pipeline is linear: score a historical catalog against a reference
//! site (haversine distance, then a three-tier payout schedule), reduce to
//! the worst payout per calendar year, and average over a requested window.

pub mod burning;
pub mod catalog;
pub mod error;
pub mod geo;
pub mod synthetic;
pub mod tiers;
pub mod types;
