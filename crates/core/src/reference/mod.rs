//! Static reference data served by the public endpoints.
//!
//! Built once at startup and shared read-only.

pub mod jobs;
pub mod locations;
pub mod logistics;
pub mod resources;
pub mod visa;

use crate::budget::BudgetPlan;
use crate::types::Timestamp;

pub use jobs::{JobBoard, JobListing};
pub use locations::{HousingMarket, LocationComparison, LocationGuide, LocationProfile};
pub use logistics::{CostCalculator, LogisticsGuide, LogisticsProvider};
pub use resources::{ResourceDirectory, ResourceLink, ResourceMatch};
pub use visa::{VisaChecklist, VisaGuide, VisaRequirement};

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub jobs: JobBoard,
    pub visas: VisaGuide,
    pub logistics: LogisticsGuide,
    pub resources: ResourceDirectory,
    pub locations: LocationGuide,
    pub budget: BudgetPlan,
}

impl ReferenceData {
    /// Builtin tables. Job posting dates are relative to `now`.
    pub fn builtin(now: Timestamp) -> Self {
        Self {
            jobs: JobBoard::builtin(now),
            visas: VisaGuide::builtin(),
            logistics: LogisticsGuide::builtin(),
            resources: ResourceDirectory,
            locations: LocationGuide::builtin(),
            budget: BudgetPlan::builtin(),
        }
    }
}
