//! KPI routes and their canonical request bodies.

use crate::models::Period;
use serde::{Deserialize, Serialize};

pub const GET_SITE_KPIS: &str = "GetSiteKpis";
pub const GET_SITE_KPIS_PATH: &str = "/get-kpis";

pub const COMPARE_SITE_KPIS: &str = "CompareSiteKpis";
pub const COMPARE_SITE_KPIS_PATH: &str = "/compare-kpis";

/// Request for a single site's KPIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetKpisRequest {
    /// Identifier for the site/location
    pub site_id: String,
    /// Time range for KPIs
    #[serde(default)]
    pub period: Period,
}

/// Request comparing two periods of one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareKpisRequest {
    pub site_id: String,
    #[serde(default)]
    pub current_period: Period,
    #[serde(default = "Period::default_previous")]
    pub previous_period: Period,
}
