//! Deterministic mock KPI generator.
//!
//! Every value is a pure function of the (site, period) seed: the same
//! inputs produce bit-identical records on every call and every process.

use crate::models::{Period, SiteKpis};

use super::seed::derive_seed;

/// Inclusive lower / exclusive upper bounds of the generated metrics.
pub mod bounds {
    pub const MEALS_SERVED: (f64, f64) = (500.0, 5000.0);
    pub const FOOD_WASTE_KG: (f64, f64) = (50.0, 600.0);
    pub const CO2_PER_MEAL_KG: (f64, f64) = (0.3, 2.5);
    pub const VEGETARIAN_SHARE_PERCENT: (f64, f64) = (10.0, 70.0);
}

/// Map a seed onto `[min, max)` using the fractional part of `sin(seed) * 10000`.
///
/// Not suitable for anything but demo data. When `min == max` the result is
/// always `min`.
pub fn pseudo_random(seed: u64, min: f64, max: f64) -> f64 {
    let x = (seed as f64).sin() * 10000.0;
    let frac = x - x.floor();
    min + (max - min) * frac
}

/// Round to `decimals` places, ties to even on the exact binary value.
///
/// Goes through exact decimal formatting so results match a
/// correctly rounded decimal `round` (e.g. `2.675` to 2 places is `2.67`).
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Synthesize KPIs for a site and a typed period.
pub fn synthesize(site_id: &str, period: Period) -> SiteKpis {
    synthesize_raw(site_id, period.as_str())
}

/// Synthesize KPIs treating both the site id and the period as opaque labels.
pub fn synthesize_raw(site_id: &str, period: &str) -> SiteKpis {
    let seed = u64::from(derive_seed(site_id, period));

    let (lo, hi) = bounds::MEALS_SERVED;
    // Truncation, not rounding
    let meals_served = pseudo_random(seed, lo, hi) as u32;

    let (lo, hi) = bounds::FOOD_WASTE_KG;
    let food_waste_kg = round_to(pseudo_random(seed + 1, lo, hi), 1);

    let food_waste_per_meal_g = if meals_served > 0 {
        round_to(food_waste_kg * 1000.0 / f64::from(meals_served), 1)
    } else {
        0.0
    };

    let (lo, hi) = bounds::CO2_PER_MEAL_KG;
    let co2_per_meal_kg = round_to(pseudo_random(seed + 2, lo, hi), 2);

    let (lo, hi) = bounds::VEGETARIAN_SHARE_PERCENT;
    let vegetarian_share_percent = round_to(pseudo_random(seed + 3, lo, hi), 1);

    let total_co2_kg = round_to(co2_per_meal_kg * f64::from(meals_served), 1);

    SiteKpis {
        site_id: site_id.to_string(),
        period: period.to_string(),
        meals_served,
        food_waste_kg,
        food_waste_per_meal_g,
        co2_per_meal_kg,
        vegetarian_share_percent,
        total_co2_kg,
    }
}
