use serde::{Deserialize, Serialize};

/// Calendar year, taken from the leading 4 digits of a catalog timestamp.
/// Numeric ordering coincides with lexicographic order of the 4-digit
/// prefix, so window slicing by `Year` matches string slicing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Year(pub u16);

impl Year {
    /// Parse the 4-digit year prefix of a timestamp such as
    /// `2021-10-21T06:30:15.120Z`. Returns `None` when the string is shorter
    /// than 4 bytes or the prefix is not all ASCII digits.
    pub fn from_timestamp(time: &str) -> Option<Self> {
        let prefix = time.get(..4)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        prefix.parse().ok().map(Year)
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A reference location the catalog is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub latitude: f64,
    pub longitude: f64,
}
