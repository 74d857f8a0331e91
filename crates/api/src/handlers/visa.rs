//! Handlers for UK visa reference data.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use relocate_core::reference::{VisaChecklist, VisaRequirement};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VisaTypesResponse<'a> {
    pub visa_types: &'a [VisaRequirement],
}

/// GET /api/v1/visa/requirements
pub async fn list_requirements(State(state): State<AppState>) -> Response {
    Json(DataResponse {
        data: VisaTypesResponse {
            visa_types: state.reference.visas.requirements(),
        },
    })
    .into_response()
}

/// GET /api/v1/visa/requirements/{slug}
///
/// `slug` is the lowercased visa type with spaces as dashes, e.g.
/// `skilled-worker-visa`.
pub async fn get_requirement(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<VisaRequirement>>> {
    let requirement = state.reference.visas.find(&slug)?;
    Ok(Json(DataResponse {
        data: requirement.clone(),
    }))
}

/// GET /api/v1/visa/checklist
pub async fn checklist(State(state): State<AppState>) -> Json<DataResponse<VisaChecklist>> {
    Json(DataResponse {
        data: state.reference.visas.checklist().clone(),
    })
}
