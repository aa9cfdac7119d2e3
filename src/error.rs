use thiserror::Error;

use crate::types::Year;

#[derive(Error, Debug)]
pub enum PricingError {
    /// The latitude and longitude sequences fed to the distance engine must
    /// pair up one-to-one; truncating to the shorter one would silently drop
    /// events, so this is fatal.
    #[error("coordinate length mismatch: {latitudes} latitudes vs {longitudes} longitudes")]
    LengthMismatch { latitudes: usize, longitudes: usize },

    /// A catalog timestamp did not start with a 4-digit year.
    #[error("malformed timestamp {time:?} at row {index}: expected a 4-digit year prefix")]
    MalformedTimestamp { index: usize, time: String },

    /// The payout model is defined over exactly three ordered tiers.
    #[error("invalid tier schedule: expected exactly 3 tiers, got {count}")]
    InvalidTierSchedule { count: usize },

    /// The requested averaging window selected no years from the annual
    /// aggregate; the mean would be a division by zero.
    #[error("no annual payouts in requested range {start}..={end}")]
    EmptyRange { start: Year, end: Year },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
