//! Handlers for the `/jobs` board.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use relocate_core::reference::JobListing;
use serde::{Deserialize, Serialize};

use crate::query::non_empty;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobFilter {
    pub category: Option<String>,
    pub job_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobListingsResponse<'a> {
    pub jobs: Vec<&'a JobListing>,
    pub total: usize,
    /// All categories on the board, not just those in `jobs`.
    pub categories: Vec<&'a str>,
    pub job_types: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct FeaturedJobsResponse<'a> {
    pub featured_jobs: Vec<&'a JobListing>,
}

/// GET /api/v1/jobs/listings?category=&job_type=
pub async fn list_listings(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Response {
    let board = &state.reference.jobs;
    let jobs = board.filter(
        non_empty(filter.category.as_deref()),
        non_empty(filter.job_type.as_deref()),
    );

    Json(DataResponse {
        data: JobListingsResponse {
            total: jobs.len(),
            jobs,
            categories: board.categories(),
            job_types: board.job_types(),
        },
    })
    .into_response()
}

/// GET /api/v1/jobs/featured
pub async fn featured(State(state): State<AppState>) -> Response {
    Json(DataResponse {
        data: FeaturedJobsResponse {
            featured_jobs: state.reference.jobs.featured(),
        },
    })
    .into_response()
}

/// GET /api/v1/jobs/categories
///
/// Category -> listings in that category.
pub async fn by_category(State(state): State<AppState>) -> Response {
    Json(DataResponse {
        data: state.reference.jobs.by_category(),
    })
    .into_response()
}
