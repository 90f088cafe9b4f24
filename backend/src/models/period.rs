//! Reporting period labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time range a KPI record is reported for.
///
/// Periods carry no calendar semantics. They only contribute their label to
/// seed derivation, so `Period::LastMonth` and the string `"last_month"` are
/// interchangeable as far as the generator is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Current,
    Previous,
    LastMonth,
    LastQuarter,
}

impl Period {
    /// All recognized periods, in declaration order.
    pub const ALL: [Period; 4] = [
        Period::Current,
        Period::Previous,
        Period::LastMonth,
        Period::LastQuarter,
    ];

    /// Wire label used in requests, responses and seed derivation.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Current => "current",
            Period::Previous => "previous",
            Period::LastMonth => "last_month",
            Period::LastQuarter => "last_quarter",
        }
    }

    /// Default comparison baseline for `compare-kpis` requests.
    pub fn default_previous() -> Self {
        Period::Previous
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of the recognized periods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period '{0}', expected one of: current, previous, last_month, last_quarter")]
pub struct PeriodParseError(pub String);

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PeriodParseError(s.to_string()))
    }
}
