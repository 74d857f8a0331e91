//! Startup wiring: catalog loading, store construction and the default account.

use std::sync::Arc;

use anyhow::Context;
use relocate_core::progress_items::seed_items;
use relocate_core::timeline::TimelineCatalog;
use relocate_core::types::{StepId, Timestamp};
use relocate_db::models::user::CreateUser;
use relocate_db::store::{MemoryStore, PgStore, Store};

use crate::auth::password::hash_password;
use crate::config::{CatalogSource, ServerConfig, StoreBackend};

pub const DEFAULT_USERNAME: &str = "relocate_user";

/// Steps the default account starts with already completed.
pub const DEFAULT_COMPLETED_STEPS: [StepId; 5] = [1, 2, 3, 8, 12];

/// Build the timeline catalog selected by configuration.
pub fn load_catalog(source: &CatalogSource) -> anyhow::Result<TimelineCatalog> {
    match source {
        CatalogSource::Builtin(version) => Ok(TimelineCatalog::builtin(*version)),
        CatalogSource::File(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading timeline catalog {}", path.display()))?;
            let version = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("custom")
                .to_string();
            TimelineCatalog::from_json(version, &json)
                .with_context(|| format!("parsing timeline catalog {}", path.display()))
        }
    }
}

/// Connect the configured backend. Postgres is health-checked and migrated.
pub async fn build_store(backend: &StoreBackend) -> anyhow::Result<Arc<dyn Store>> {
    match backend {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres { database_url } => {
            let pool = relocate_db::create_pool(database_url)
                .await
                .context("connecting to the database")?;
            tracing::info!("Database connection pool created");

            relocate_db::health_check(&pool)
                .await
                .context("database health check")?;
            tracing::info!("Database health check passed");

            relocate_db::run_migrations(&pool)
                .await
                .context("running database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgStore::new(pool)))
        }
    }
}

/// Account creation input for a new user: empty progress plus the sample
/// progress items dated from `now`.
pub fn new_account(
    username: String,
    email: Option<String>,
    password_hash: String,
    completed_steps: Vec<StepId>,
    now: Timestamp,
) -> CreateUser {
    CreateUser {
        username,
        email,
        password_hash,
        initial_completed_steps: completed_steps,
        initial_items: seed_items(now),
    }
}

/// Create [`DEFAULT_USERNAME`] if it does not exist yet.
///
/// Returns whether an account was created.
pub async fn seed_default_user(
    store: &dyn Store,
    config: &ServerConfig,
    now: Timestamp,
) -> anyhow::Result<bool> {
    if store.find_user_by_username(DEFAULT_USERNAME).await?.is_some() {
        tracing::debug!(username = DEFAULT_USERNAME, "Default user already present");
        return Ok(false);
    }

    let password_hash = hash_password(&config.default_user_password)
        .map_err(|e| anyhow::anyhow!("hashing default user password: {e}"))?;

    let input = new_account(
        DEFAULT_USERNAME.to_string(),
        Some("user@relocate.com".to_string()),
        password_hash,
        DEFAULT_COMPLETED_STEPS.to_vec(),
        now,
    );
    let user = store.create_user(&input).await?;
    tracing::info!(user_id = user.id, username = %user.username, "Created default user");
    Ok(true)
}
