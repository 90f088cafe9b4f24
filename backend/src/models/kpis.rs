//! KPI records produced by the generator.

use serde::{Deserialize, Serialize};

/// Sustainability KPIs for one site over one period.
///
/// `food_waste_per_meal_g` and `total_co2_kg` are derived from the other
/// fields of the same record and carry no independent noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteKpis {
    pub site_id: String,
    /// Period label the record was synthesized for.
    pub period: String,
    pub meals_served: u32,
    pub food_waste_kg: f64,
    pub food_waste_per_meal_g: f64,
    pub co2_per_meal_kg: f64,
    pub vegetarian_share_percent: f64,
    pub total_co2_kg: f64,
}

/// Direction of a KPI change relative to a noise threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

/// Comparison of one site's KPIs between two periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaKpis {
    pub site_id: String,
    pub current_period: String,
    pub previous_period: String,

    // absolute values
    pub current: SiteKpis,
    pub previous: SiteKpis,

    // current minus previous
    pub delta_food_waste_per_meal_g: f64,
    pub delta_co2_per_meal_kg: f64,
    pub delta_vegetarian_share_percent: f64,

    pub waste_trend: Trend,
    pub co2_trend: Trend,
    pub vegetarian_trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Trend::Down).unwrap(), "\"down\"");
        assert_eq!(serde_json::to_string(&Trend::Flat).unwrap(), "\"flat\"");
        assert_eq!(Trend::Flat.as_str(), "flat");
    }

    #[test]
    fn test_site_kpis_field_names() {
        let kpis = SiteKpis {
            site_id: "helsinki-hq".to_string(),
            period: "current".to_string(),
            meals_served: 975,
            food_waste_kg: 72.0,
            food_waste_per_meal_g: 73.8,
            co2_per_meal_kg: 1.1,
            vegetarian_share_percent: 35.3,
            total_co2_kg: 1072.5,
        };
        let value = serde_json::to_value(&kpis).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "co2_per_meal_kg",
                "food_waste_kg",
                "food_waste_per_meal_g",
                "meals_served",
                "period",
                "site_id",
                "total_co2_kg",
                "vegetarian_share_percent",
            ]
        );
        assert_eq!(obj["meals_served"], 975);
        assert_eq!(obj["total_co2_kg"], 1072.5);
    }
}
