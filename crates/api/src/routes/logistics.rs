//! Route definitions for the `/logistics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::logistics;
use crate::state::AppState;

/// Routes mounted at `/logistics`.
///
/// ```text
/// GET /providers        -> list_providers
/// GET /cost-calculator  -> cost_calculator
/// GET /checklist        -> moving_checklist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/providers", get(logistics::list_providers))
        .route("/cost-calculator", get(logistics::cost_calculator))
        .route("/checklist", get(logistics::moving_checklist))
}
