#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use relocate_core::reference::ReferenceData;
use relocate_core::timeline::{CatalogVersion, TimelineCatalog};
use relocate_db::store::MemoryStore;
use tower::ServiceExt;

use relocate_api::auth::jwt::JwtConfig;
use relocate_api::bootstrap::{seed_default_user, DEFAULT_USERNAME};
use relocate_api::config::{CatalogSource, ServerConfig, StoreBackend};
use relocate_api::router::build_app_router;
use relocate_api::state::AppState;

pub const DEFAULT_PASSWORD: &str = "SecurePass2025!";

/// A test `ServerConfig` using the in-memory store and the 39-step catalog.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 30,
        },
        store: StoreBackend::Memory,
        catalog: CatalogSource::Builtin(CatalogVersion::V39),
        password_min_length: 8,
        reset_code_ttl_mins: 60,
        seed_default_user: true,
        default_user_password: DEFAULT_PASSWORD.to_string(),
    }
}

/// The full application plus a handle on its store for direct inspection.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// A fresh router sharing this app's state.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the app on the 39-step catalog with the default user seeded.
pub async fn build_test_app() -> TestApp {
    build_test_app_with_catalog(CatalogVersion::V39).await
}

pub async fn build_test_app_with_catalog(version: CatalogVersion) -> TestApp {
    let mut config = test_config();
    config.catalog = CatalogSource::Builtin(version);

    let store = Arc::new(MemoryStore::new());
    seed_default_user(store.as_ref(), &config, Utc::now())
        .await
        .expect("seeding the default user should succeed");

    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
        catalog: Arc::new(TimelineCatalog::builtin(version)),
        reference: Arc::new(ReferenceData::builtin(Utc::now())),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send raw bytes as a JSON body.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Log in and return the access token.
pub async fn login(app: Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Token for the seeded default user.
pub async fn default_token(app: Router) -> String {
    login(app, DEFAULT_USERNAME, DEFAULT_PASSWORD).await
}

/// Register a fresh account and return its access token.
pub async fn register(app: Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": "a-long-password" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}
