//! Handlers for the curated resource directory.

use axum::extract::{Query, State};
use axum::Json;
use indexmap::IndexMap;
use relocate_core::reference::{ResourceLink, ResourceMatch};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::query::non_empty;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub section: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub results: Vec<ResourceMatch>,
}

/// GET /api/v1/resources/all
///
/// Section key -> links, in directory order.
pub async fn list_all(
    State(state): State<AppState>,
) -> Json<DataResponse<IndexMap<&'static str, &'static [ResourceLink]>>> {
    let sections = state
        .reference
        .resources
        .sections()
        .iter()
        .map(|s| (s.key, s.links))
        .collect();
    Json(DataResponse { data: sections })
}

/// GET /api/v1/resources/search?q=&section=
///
/// Case-insensitive match on name and description. An unknown section is
/// rejected.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<SearchResponse>>> {
    let results = state
        .reference
        .resources
        .search(&params.q, non_empty(params.section.as_deref()))?;

    Ok(Json(DataResponse {
        data: SearchResponse {
            query: params.q.trim().to_string(),
            total: results.len(),
            results,
        },
    }))
}
