//! Origin and destination profiles and their comparison.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherInfo {
    pub avg_temp_f: f64,
    pub sunny_days: u32,
    pub humidity: f64,
    pub climate: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationProfile {
    pub slug: &'static str,
    pub location_name: &'static str,
    pub cost_of_living_index: f64,
    pub housing_cost_index: f64,
    pub safety_index: f64,
    pub weather_info: WeatherInfo,
    pub job_market_score: f64,
    pub education_score: f64,
    pub healthcare_score: f64,
    pub population: u64,
    pub median_income: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingMarket {
    pub median_home_price: u64,
    pub median_rent: u64,
    pub price_per_sqft: u64,
    pub market_trend: &'static str,
    pub popular_areas: &'static [&'static str],
    /// Share of housing stock by type, in percent.
    #[serde(serialize_with = "shares_as_map")]
    pub housing_types: &'static [(&'static str, u8)],
}

fn shares_as_map<S: Serializer>(shares: &&'static [(&'static str, u8)], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(shares.iter().map(|(kind, pct)| (kind, pct)))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateChange {
    pub temperature_change: f64,
    pub humidity_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMetrics {
    pub cost_difference_percent: f64,
    pub housing_difference_percent: f64,
    pub safety_improvement: f64,
    pub climate_change: ClimateChange,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationComparison<'a> {
    pub from_location: &'a LocationProfile,
    pub to_location: &'a LocationProfile,
    pub comparison_metrics: ComparisonMetrics,
}

/// Relative change from `from` to `to`, in percent.
fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    (to - from) / from * 100.0
}

/// Metrics for moving from `from` to `to`.
pub fn compare(from: &LocationProfile, to: &LocationProfile) -> ComparisonMetrics {
    ComparisonMetrics {
        cost_difference_percent: percent_change(from.cost_of_living_index, to.cost_of_living_index),
        housing_difference_percent: percent_change(from.housing_cost_index, to.housing_cost_index),
        safety_improvement: to.safety_index - from.safety_index,
        climate_change: ClimateChange {
            temperature_change: to.weather_info.avg_temp_f - from.weather_info.avg_temp_f,
            humidity_change: to.weather_info.humidity - from.weather_info.humidity,
        },
    }
}

#[derive(Debug, Clone)]
pub struct LocationGuide {
    origin: LocationProfile,
    destination: LocationProfile,
    origin_housing: HousingMarket,
    destination_housing: HousingMarket,
}

impl LocationGuide {
    pub fn builtin() -> Self {
        Self {
            origin: LocationProfile {
                slug: "phoenix",
                location_name: "Phoenix, Arizona",
                cost_of_living_index: 98.2,
                housing_cost_index: 89.5,
                safety_index: 6.8,
                weather_info: WeatherInfo {
                    avg_temp_f: 75.0,
                    sunny_days: 299,
                    humidity: 38.0,
                    climate: "Desert",
                },
                job_market_score: 7.2,
                education_score: 6.5,
                healthcare_score: 7.1,
                population: 1_608_139,
                median_income: 62_055,
            },
            destination: LocationProfile {
                slug: "peak-district",
                location_name: "Peak District, UK",
                cost_of_living_index: 112.8,
                housing_cost_index: 125.3,
                safety_index: 8.9,
                weather_info: WeatherInfo {
                    avg_temp_f: 48.0,
                    sunny_days: 120,
                    humidity: 78.0,
                    climate: "Temperate Oceanic",
                },
                job_market_score: 6.8,
                education_score: 8.9,
                healthcare_score: 9.2,
                population: 38_000,
                median_income: 35_000,
            },
            origin_housing: HousingMarket {
                median_home_price: 450_000,
                median_rent: 1_650,
                price_per_sqft: 185,
                market_trend: "stable",
                popular_areas: &["Scottsdale", "Tempe", "Chandler", "Gilbert", "Glendale"],
                housing_types: &[("single_family", 65), ("condos", 20), ("apartments", 15)],
            },
            destination_housing: HousingMarket {
                median_home_price: 320_000,
                median_rent: 950,
                price_per_sqft: 240,
                market_trend: "rising",
                popular_areas: &["Buxton", "Bakewell", "Matlock", "Hathersage", "Castleton"],
                housing_types: &[("cottages", 45), ("terraced", 30), ("detached", 25)],
            },
        }
    }

    pub fn origin(&self) -> &LocationProfile {
        &self.origin
    }

    pub fn destination(&self) -> &LocationProfile {
        &self.destination
    }

    pub fn origin_housing(&self) -> &HousingMarket {
        &self.origin_housing
    }

    pub fn destination_housing(&self) -> &HousingMarket {
        &self.destination_housing
    }

    /// Origin to destination comparison.
    pub fn comparison(&self) -> LocationComparison<'_> {
        LocationComparison {
            from_location: &self.origin,
            to_location: &self.destination,
            comparison_metrics: compare(&self.origin, &self.destination),
        }
    }
}
