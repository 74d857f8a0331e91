//! Handlers for movers, shipping costs and the moving checklist.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use relocate_core::reference::logistics::ChecklistStage;
use relocate_core::reference::{CostCalculator, LogisticsProvider};
use serde::{Deserialize, Serialize};

use crate::query::non_empty;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProviderFilter {
    pub service_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProvidersResponse<'a> {
    pub providers: Vec<&'a LogisticsProvider>,
    pub total: usize,
    pub service_types: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub stages: &'static [ChecklistStage],
}

/// GET /api/v1/logistics/providers?service_type=
pub async fn list_providers(
    State(state): State<AppState>,
    Query(filter): Query<ProviderFilter>,
) -> Response {
    let guide = &state.reference.logistics;
    let providers = guide.providers(non_empty(filter.service_type.as_deref()));

    Json(DataResponse {
        data: ProvidersResponse {
            total: providers.len(),
            providers,
            service_types: guide.service_types(),
        },
    })
    .into_response()
}

/// GET /api/v1/logistics/cost-calculator
pub async fn cost_calculator(State(state): State<AppState>) -> Json<DataResponse<CostCalculator>> {
    Json(DataResponse {
        data: state.reference.logistics.cost_calculator().clone(),
    })
}

/// GET /api/v1/logistics/checklist
pub async fn moving_checklist(State(state): State<AppState>) -> Json<DataResponse<ChecklistResponse>> {
    Json(DataResponse {
        data: ChecklistResponse {
            stages: state.reference.logistics.moving_checklist(),
        },
    })
}
