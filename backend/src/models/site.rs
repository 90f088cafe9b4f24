//! Static catalogue of food-service sites.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Customer segment a site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Workplace,
    School,
    Healthcare,
    Senior,
    Logistics,
}

impl Segment {
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Workplace => "workplace",
            Segment::School => "school",
            Segment::Healthcare => "healthcare",
            Segment::Senior => "senior",
            Segment::Logistics => "logistics",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A site known to the API.
///
/// Fields borrow from `'static` data for the built-in table and own their
/// strings once deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub site_id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub region: Cow<'static, str>,
    pub segment: Segment,
}

impl SiteInfo {
    const fn fixed(
        site_id: &'static str,
        name: &'static str,
        region: &'static str,
        segment: Segment,
    ) -> Self {
        Self {
            site_id: Cow::Borrowed(site_id),
            name: Cow::Borrowed(name),
            region: Cow::Borrowed(region),
            segment,
        }
    }
}

/// Built-in mock sites.
pub static MOCK_SITES: [SiteInfo; 5] = [
    SiteInfo::fixed(
        "helsinki-hq",
        "Helsinki Headquarters",
        "Uusimaa",
        Segment::Workplace,
    ),
    SiteInfo::fixed(
        "espoo-campus",
        "Espoo Campus Restaurant",
        "Uusimaa",
        Segment::School,
    ),
    SiteInfo::fixed(
        "vantaa-logistics",
        "Vantaa Logistics Canteen",
        "Uusimaa",
        Segment::Workplace,
    ),
    SiteInfo::fixed(
        "tampere-tech",
        "Tampere Tech Park Kitchen",
        "Pirkanmaa",
        Segment::Workplace,
    ),
    SiteInfo::fixed(
        "turku-hospital",
        "Turku Hospital Cafeteria",
        "Varsinais-Suomi",
        Segment::Healthcare,
    ),
];

/// Look up a built-in site by identifier.
pub fn find_site(site_id: &str) -> Option<&'static SiteInfo> {
    MOCK_SITES.iter().find(|s| s.site_id == site_id)
}
