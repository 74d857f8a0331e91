use std::path::PathBuf;

use relocate_core::timeline::CatalogVersion;

use crate::auth::jwt::JwtConfig;

/// Which [`relocate_db::store::Store`] implementation backs the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Postgres at the given URL.
    Postgres { database_url: String },
    /// In-process state, lost on restart.
    Memory,
}

/// Where the timeline catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin(CatalogVersion),
    /// A JSON array of steps on disk.
    File(PathBuf),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    pub store: StoreBackend,
    pub catalog: CatalogSource,
    /// Minimum accepted password length (default: `8`).
    pub password_min_length: usize,
    /// Lifetime of a password reset code in minutes (default: `60`).
    pub reset_code_ttl_mins: i64,
    /// Create the default account at startup when it is missing.
    pub seed_default_user: bool,
    pub default_user_password: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `8001`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `STORE_BACKEND`         | `postgres`                 |
    /// | `DATABASE_URL`          | required for `postgres`    |
    /// | `TIMELINE_CATALOG`      | `v39`                      |
    /// | `TIMELINE_CATALOG_PATH` | unset (overrides the above)|
    /// | `PASSWORD_MIN_LENGTH`   | `8`                        |
    /// | `RESET_CODE_TTL_MINS`   | `60`                       |
    /// | `SEED_DEFAULT_USER`     | `true`                     |
    /// | `DEFAULT_USER_PASSWORD` | `SecurePass2025!`          |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values, an unknown backend or catalog name, or a
    /// missing `DATABASE_URL` for the Postgres backend.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let store = match std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".into())
            .to_ascii_lowercase()
            .as_str()
        {
            "postgres" => StoreBackend::Postgres {
                database_url: std::env::var("DATABASE_URL")
                    .expect("DATABASE_URL must be set when STORE_BACKEND=postgres"),
            },
            "memory" => StoreBackend::Memory,
            other => panic!("Unknown STORE_BACKEND '{other}' (expected postgres or memory)"),
        };

        let catalog = match std::env::var("TIMELINE_CATALOG_PATH") {
            Ok(path) if !path.trim().is_empty() => CatalogSource::File(PathBuf::from(path)),
            _ => {
                let name = std::env::var("TIMELINE_CATALOG").unwrap_or_else(|_| "v39".into());
                let version = CatalogVersion::from_str_value(&name)
                    .unwrap_or_else(|e| panic!("Invalid TIMELINE_CATALOG: {e}"));
                CatalogSource::Builtin(version)
            }
        };

        let password_min_length: usize = std::env::var("PASSWORD_MIN_LENGTH")
            .unwrap_or_else(|_| "8".into())
            .parse()
            .expect("PASSWORD_MIN_LENGTH must be a valid usize");

        let reset_code_ttl_mins: i64 = std::env::var("RESET_CODE_TTL_MINS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("RESET_CODE_TTL_MINS must be a valid i64");

        let seed_default_user: bool = std::env::var("SEED_DEFAULT_USER")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_DEFAULT_USER must be true or false");

        let default_user_password = std::env::var("DEFAULT_USER_PASSWORD")
            .unwrap_or_else(|_| "SecurePass2025!".into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            store,
            catalog,
            password_min_length,
            reset_code_ttl_mins,
            seed_default_user,
            default_user_password,
        }
    }
}
