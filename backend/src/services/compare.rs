//! Period-over-period comparison of synthesized KPIs.

use crate::models::{DeltaKpis, Period, SiteKpis, Trend};

use super::generator::{round_to, synthesize_raw};

/// Change in grams of waste per meal below which the waste trend is flat.
pub const WASTE_TREND_THRESHOLD: f64 = 5.0;
/// Change in kg CO₂ per meal below which the CO₂ trend is flat.
pub const CO2_TREND_THRESHOLD: f64 = 0.05;
/// Change in vegetarian share (percentage points) below which the trend is flat.
pub const VEGETARIAN_TREND_THRESHOLD: f64 = 2.0;

/// Classify a delta against a symmetric noise threshold.
///
/// Deltas exactly at `±threshold` are flat.
pub fn trend(delta: f64, threshold: f64) -> Trend {
    if delta > threshold {
        Trend::Up
    } else if delta < -threshold {
        Trend::Down
    } else {
        Trend::Flat
    }
}

/// Combine two already synthesized records for the same site.
pub fn compute_delta(site_id: &str, current: SiteKpis, previous: SiteKpis) -> DeltaKpis {
    let delta_waste = round_to(
        current.food_waste_per_meal_g - previous.food_waste_per_meal_g,
        1,
    );
    let delta_co2 = round_to(current.co2_per_meal_kg - previous.co2_per_meal_kg, 2);
    let delta_veg = round_to(
        current.vegetarian_share_percent - previous.vegetarian_share_percent,
        1,
    );

    DeltaKpis {
        site_id: site_id.to_string(),
        current_period: current.period.clone(),
        previous_period: previous.period.clone(),
        current,
        previous,
        delta_food_waste_per_meal_g: delta_waste,
        delta_co2_per_meal_kg: delta_co2,
        delta_vegetarian_share_percent: delta_veg,
        waste_trend: trend(delta_waste, WASTE_TREND_THRESHOLD),
        co2_trend: trend(delta_co2, CO2_TREND_THRESHOLD),
        vegetarian_trend: trend(delta_veg, VEGETARIAN_TREND_THRESHOLD),
    }
}

/// Compare a site's KPIs between two periods.
pub fn compare(site_id: &str, current_period: Period, previous_period: Period) -> DeltaKpis {
    compare_raw(site_id, current_period.as_str(), previous_period.as_str())
}

/// Same as [`compare`] with the periods taken as opaque labels.
pub fn compare_raw(site_id: &str, current_period: &str, previous_period: &str) -> DeltaKpis {
    let current = synthesize_raw(site_id, current_period);
    let previous = synthesize_raw(site_id, previous_period);
    compute_delta(site_id, current, previous)
}
