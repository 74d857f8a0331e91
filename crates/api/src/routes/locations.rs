//! Route definitions for location profiles and housing markets.
//!
//! Two routers are provided:
//! - `router()` for city profiles mounted at `/locations`
//! - `housing_router()` for housing markets mounted at `/housing`

use axum::routing::get;
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

/// Routes mounted at `/locations`.
///
/// ```text
/// GET /origin       -> origin
/// GET /destination  -> destination
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/origin", get(locations::origin))
        .route("/destination", get(locations::destination))
}

/// Routes mounted at `/housing`.
///
/// ```text
/// GET /origin       -> origin_housing
/// GET /destination  -> destination_housing
/// ```
pub fn housing_router() -> Router<AppState> {
    Router::new()
        .route("/origin", get(locations::origin_housing))
        .route("/destination", get(locations::destination_housing))
}
