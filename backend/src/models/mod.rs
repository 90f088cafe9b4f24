//! Domain types: sites, periods and KPI records.

pub mod kpis;
pub mod period;
pub mod site;

pub use kpis::{DeltaKpis, SiteKpis, Trend};
pub use period::{Period, PeriodParseError};
pub use site::{find_site, Segment, SiteInfo, MOCK_SITES};
