pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod locations;
pub mod logistics;
pub mod progress;
pub mod resources;
pub mod timeline;
pub mod visa;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user (auth)
/// /auth/reset-password                             issue reset code (public)
/// /auth/complete-password-reset                    consume reset code (public)
///
/// /timeline/steps                                  catalog (public)
/// /timeline/full                                   annotated catalog (auth)
/// /timeline/by-category                            grouped catalog (auth)
/// /timeline/update-progress                        toggle a step (POST, auth)
///
/// /analytics/overview                              progress + pace (auth)
/// /analytics/cost-tracking                         budget (auth)
/// /analytics/reset                                 clear progress (POST, auth)
///
/// /dashboard/overview                              landing dashboard (auth)
///
/// /progress/items                                  list, create (auth)
/// /progress/items/{id}                             update, delete (auth)
/// /progress/items/{id}/subtasks/{index}/toggle     toggle subtask (POST, auth)
/// /progress/dashboard                              item dashboard (auth)
///
/// /jobs/listings                                   filtered listings
/// /jobs/featured                                   newest listings
/// /jobs/categories                                 listings by category
///
/// /visa/requirements                               visa routes
/// /visa/requirements/{slug}                        one visa route
/// /visa/checklist                                  document checklist
///
/// /logistics/providers                             movers
/// /logistics/cost-calculator                       shipping cost table
/// /logistics/checklist                             moving checklist
///
/// /resources/all                                   every section
/// /resources/search                                search links
///
/// /locations/origin, /locations/destination        city profiles
/// /housing/origin, /housing/destination            housing markets
/// /comparison                                      origin -> destination (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/timeline", timeline::router())
        .nest("/analytics", analytics::router())
        .nest("/dashboard", dashboard::router())
        .nest("/progress", progress::router())
        .nest("/jobs", jobs::router())
        .nest("/visa", visa::router())
        .nest("/logistics", logistics::router())
        .nest("/resources", resources::router())
        .nest("/locations", locations::router())
        .nest("/housing", locations::housing_router())
        .route("/comparison", get(handlers::locations::comparison))
}
