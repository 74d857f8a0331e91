use std::sync::Arc;

use relocate_core::reference::ReferenceData;
use relocate_core::timeline::TimelineCatalog;
use relocate_db::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend (Postgres or in-memory).
    pub store: Arc<dyn Store>,
    pub config: Arc<ServerConfig>,
    /// The timeline catalog chosen at startup. Never mutated.
    pub catalog: Arc<TimelineCatalog>,
    /// Static reference datasets (jobs, visas, logistics, resources, locations, budget).
    pub reference: Arc<ReferenceData>,
}
