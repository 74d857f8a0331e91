//! International movers, shipping cost table and the week-by-week moving
//! checklist.

use indexmap::IndexMap;
use serde::Serialize;

use super::jobs::distinct_sorted;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticsProvider {
    pub id: u32,
    pub company_name: &'static str,
    /// One of `full_service`, `container`, `air_freight`, `storage`.
    pub service_type: &'static str,
    pub price_range: &'static str,
    pub transit_time: &'static str,
    pub coverage_area: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub contact_info: ContactInfo,
    pub rating: f32,
    pub reviews_count: u32,
}

/// Price band for one service type, in USD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBand {
    pub min: u32,
    pub max: u32,
    pub average: u32,
}

impl CostBand {
    fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            average: (min + max) / 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalCost {
    pub name: &'static str,
    pub description: &'static str,
    /// Flat cost in USD, when the extra is priced that way.
    pub cost: Option<u32>,
    /// Percentage of shipment value, when the extra is priced that way.
    pub percentage: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostCalculator {
    pub base_costs: IndexMap<&'static str, CostBand>,
    pub additional_costs: Vec<AdditionalCost>,
    pub cost_factors: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistStage {
    pub key: &'static str,
    pub label: &'static str,
    pub tasks: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct LogisticsGuide {
    providers: Vec<LogisticsProvider>,
    calculator: CostCalculator,
}

impl LogisticsGuide {
    pub fn builtin() -> Self {
        let base_costs = [
            ("full_service", CostBand::new(8_000, 15_000)),
            ("container", CostBand::new(2_800, 7_500)),
            ("air_freight", CostBand::new(2_000, 8_000)),
            ("storage", CostBand::new(150, 400)),
        ]
        .into_iter()
        .collect();

        Self {
            providers: providers(),
            calculator: CostCalculator {
                base_costs,
                additional_costs: additional_costs(),
                cost_factors: &[
                    "Volume of household goods",
                    "Distance and accessibility",
                    "Service level selected",
                    "Insurance coverage",
                    "Seasonal demand",
                    "Customs complexity",
                ],
            },
        }
    }

    /// Providers, optionally restricted to one service type.
    pub fn providers(&self, service_type: Option<&str>) -> Vec<&LogisticsProvider> {
        self.providers
            .iter()
            .filter(|p| service_type.map_or(true, |t| p.service_type == t))
            .collect()
    }

    /// Distinct service types, sorted.
    pub fn service_types(&self) -> Vec<&str> {
        distinct_sorted(self.providers.iter().map(|p| p.service_type))
    }

    pub fn cost_calculator(&self) -> &CostCalculator {
        &self.calculator
    }

    pub fn moving_checklist(&self) -> &'static [ChecklistStage] {
        &MOVING_CHECKLIST
    }
}

fn additional_costs() -> Vec<AdditionalCost> {
    vec![
        AdditionalCost {
            name: "insurance",
            description: "2.5% of shipment value",
            cost: None,
            percentage: Some(2.5),
        },
        AdditionalCost {
            name: "customs_duty",
            description: "0-25%, varies by item type",
            cost: None,
            percentage: None,
        },
        AdditionalCost {
            name: "temporary_storage",
            description: "Per cubic meter per week",
            cost: Some(50),
            percentage: None,
        },
        AdditionalCost {
            name: "express_customs",
            description: "Fast-track customs clearance",
            cost: Some(200),
            percentage: None,
        },
        AdditionalCost {
            name: "pet_shipping",
            description: "Per pet including quarantine",
            cost: Some(2_500),
            percentage: None,
        },
        AdditionalCost {
            name: "vehicle_shipping",
            description: "Car shipping via container",
            cost: Some(3_500),
            percentage: None,
        },
    ]
}

fn providers() -> Vec<LogisticsProvider> {
    vec![
        LogisticsProvider {
            id: 1,
            company_name: "Crown Relocations",
            service_type: "full_service",
            price_range: "$8,000 - $15,000",
            transit_time: "4-8 weeks",
            coverage_area: "Worldwide",
            description: "Premium international moving with door-to-door delivery, customs clearance, and storage options.",
            features: &[
                "Professional packing service",
                "Customs clearance included",
                "Storage facilities available",
                "Pet relocation services",
            ],
            contact_info: ContactInfo {
                phone: "+1-800-CROWN-US",
                email: "info@crownrelo.com",
                website: "https://www.crownrelo.com",
            },
            rating: 4.8,
            reviews_count: 2_847,
        },
        LogisticsProvider {
            id: 2,
            company_name: "Allied International",
            service_type: "full_service",
            price_range: "$6,500 - $12,000",
            transit_time: "3-6 weeks",
            coverage_area: "North America to Europe",
            description: "International moving with specialized UK services and local partnerships.",
            features: &[
                "UK customs expertise",
                "Local delivery partners",
                "Temporary storage",
                "Real-time tracking",
            ],
            contact_info: ContactInfo {
                phone: "+1-800-470-6683",
                email: "international@alliedvan.com",
                website: "https://www.allied.com",
            },
            rating: 4.6,
            reviews_count: 1_923,
        },
        LogisticsProvider {
            id: 3,
            company_name: "Ship Smart",
            service_type: "container",
            price_range: "$3,500 - $7,500",
            transit_time: "2-4 weeks",
            coverage_area: "US to UK",
            description: "Cost-effective container shipping with flexible pickup and delivery options.",
            features: &[
                "Shared container options",
                "Professional loading",
                "Basic insurance included",
                "Container tracking",
            ],
            contact_info: ContactInfo {
                phone: "+1-800-SHIP-SMART",
                email: "quotes@shipsmart.com",
                website: "https://www.shipsmart.com",
            },
            rating: 4.3,
            reviews_count: 1_156,
        },
        LogisticsProvider {
            id: 4,
            company_name: "Seven Seas Worldwide",
            service_type: "container",
            price_range: "$2,800 - $6,200",
            transit_time: "4-6 weeks",
            coverage_area: "Worldwide",
            description: "International shipping specialists with self-pack and full-service options.",
            features: &[
                "Self-pack containers",
                "Free storage period",
                "Multiple container sizes",
                "Customs documentation",
            ],
            contact_info: ContactInfo {
                phone: "+44-161-772-3434",
                email: "info@sevenseasworldwide.com",
                website: "https://www.sevenseasworldwide.com",
            },
            rating: 4.4,
            reviews_count: 3_214,
        },
        LogisticsProvider {
            id: 5,
            company_name: "FedEx International",
            service_type: "air_freight",
            price_range: "$2,000 - $8,000",
            transit_time: "5-10 days",
            coverage_area: "Worldwide",
            description: "Fast air freight for urgent or valuable items.",
            features: &[
                "Express delivery options",
                "High-value item specialist",
                "Customs clearance",
                "Door-to-door service",
            ],
            contact_info: ContactInfo {
                phone: "+1-800-GO-FEDEX",
                email: "international@fedex.com",
                website: "https://www.fedex.com",
            },
            rating: 4.7,
            reviews_count: 5_632,
        },
        LogisticsProvider {
            id: 6,
            company_name: "BigSteelBox",
            service_type: "storage",
            price_range: "$150 - $400/month",
            transit_time: "On-demand",
            coverage_area: "North America",
            description: "Portable storage containers for flexible moving and storage.",
            features: &[
                "Weather-resistant containers",
                "Ground-level loading",
                "Short and long-term storage",
                "Flexible scheduling",
            ],
            contact_info: ContactInfo {
                phone: "+1-855-594-4444",
                email: "info@bigsteelbox.com",
                website: "https://www.bigsteelbox.com",
            },
            rating: 4.5,
            reviews_count: 892,
        },
    ]
}

static MOVING_CHECKLIST: [ChecklistStage; 6] = [
    ChecklistStage {
        key: "8_weeks_before",
        label: "8 weeks before",
        tasks: &[
            "Research and get quotes from moving companies",
            "Start decluttering and deciding what to ship",
            "Research UK customs regulations",
            "Begin inventory of valuable items",
            "Research temporary accommodation in UK",
        ],
    },
    ChecklistStage {
        key: "6_weeks_before",
        label: "6 weeks before",
        tasks: &[
            "Book moving company and confirm dates",
            "Arrange temporary storage if needed",
            "Research UK utility providers",
            "Plan farewell events with friends/family",
        ],
    },
    ChecklistStage {
        key: "4_weeks_before",
        label: "4 weeks before",
        tasks: &[
            "Confirm shipping dates and logistics",
            "Start packing non-essentials",
            "Arrange mail forwarding",
            "Notify current utility companies of move",
        ],
    },
    ChecklistStage {
        key: "2_weeks_before",
        label: "2 weeks before",
        tasks: &[
            "Finish packing all non-essential items",
            "Confirm travel arrangements to UK",
            "Pack essential suitcase for first weeks",
            "Download offline maps and UK apps",
        ],
    },
    ChecklistStage {
        key: "1_week_before",
        label: "1 week before",
        tasks: &[
            "Pack survival kit for first days in UK",
            "Confirm pickup time with movers",
            "Pack important documents separately",
        ],
    },
    ChecklistStage {
        key: "moving_day",
        label: "Moving day",
        tasks: &[
            "Be present for pickup",
            "Take photos of valuable items",
            "Keep inventory list with you",
            "Get contact details for UK delivery",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_filter_by_service_type() {
        let guide = LogisticsGuide::builtin();
        assert_eq!(guide.providers(None).len(), 6);
        let containers = guide.providers(Some("container"));
        assert_eq!(containers.len(), 2);
        assert!(containers.iter().all(|p| p.service_type == "container"));
        assert!(guide.providers(Some("teleport")).is_empty());
    }

    #[test]
    fn service_types_are_distinct() {
        let guide = LogisticsGuide::builtin();
        assert_eq!(
            guide.service_types(),
            vec!["air_freight", "container", "full_service", "storage"]
        );
    }

    #[test]
    fn cost_band_average_is_midpoint() {
        let guide = LogisticsGuide::builtin();
        let bands = &guide.cost_calculator().base_costs;
        assert_eq!(bands["full_service"].average, 11_500);
        assert_eq!(bands["container"].average, 5_150);
        assert_eq!(bands["storage"].average, 275);
    }

    #[test]
    fn checklist_ends_on_moving_day() {
        let guide = LogisticsGuide::builtin();
        let stages = guide.moving_checklist();
        assert_eq!(stages.first().map(|s| s.key), Some("8_weeks_before"));
        assert_eq!(stages.last().map(|s| s.key), Some("moving_day"));
    }
}
