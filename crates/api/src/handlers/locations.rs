//! Handlers for origin/destination profiles, housing markets and the
//! relocation comparison.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relocate_core::reference::{HousingMarket, LocationProfile};

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/locations/origin
pub async fn origin(State(state): State<AppState>) -> Json<DataResponse<LocationProfile>> {
    Json(DataResponse {
        data: state.reference.locations.origin().clone(),
    })
}

/// GET /api/v1/locations/destination
pub async fn destination(State(state): State<AppState>) -> Json<DataResponse<LocationProfile>> {
    Json(DataResponse {
        data: state.reference.locations.destination().clone(),
    })
}

/// GET /api/v1/housing/origin
pub async fn origin_housing(State(state): State<AppState>) -> Json<DataResponse<HousingMarket>> {
    Json(DataResponse {
        data: state.reference.locations.origin_housing().clone(),
    })
}

/// GET /api/v1/housing/destination
pub async fn destination_housing(
    State(state): State<AppState>,
) -> Json<DataResponse<HousingMarket>> {
    Json(DataResponse {
        data: state.reference.locations.destination_housing().clone(),
    })
}

/// GET /api/v1/comparison
///
/// Both profiles plus the derived origin -> destination metrics.
pub async fn comparison(State(state): State<AppState>, _auth: AuthUser) -> Response {
    Json(DataResponse {
        data: state.reference.locations.comparison(),
    })
    .into_response()
}
