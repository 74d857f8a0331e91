//! HTTP-level tests for the `/progress` task list.

mod common;

use axum::http::StatusCode;
use common::{body_json, default_token, delete_auth, get_auth, post_auth, post_json_auth, put_json_auth, register};
use serde_json::json;

async fn create(app: axum::Router, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app, "/api/v1/progress/items", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[tokio::test]
async fn list_returns_seeded_items_with_statistics() {
    let app = common::build_test_app().await;
    let token = default_token(app.app()).await;

    let json = body_json(get_auth(app.app(), "/api/v1/progress/items", &token).await).await;
    let data = &json["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 12);
    assert_eq!(data["statistics"]["total"], 12);
    assert_eq!(data["statistics"]["completed"], 4);
    assert_eq!(data["statistics"]["in_progress"], 6);
    assert_eq!(data["categories"].as_array().unwrap().len(), 6);
    assert_eq!(
        data["statuses"],
        json!(["not_started", "in_progress", "completed", "blocked"])
    );
}

#[tokio::test]
async fn filters_narrow_items_but_not_statistics() {
    let app = common::build_test_app().await;
    let token = default_token(app.app()).await;

    let uri = "/api/v1/progress/items?category=Housing&status=completed";
    let json = body_json(get_auth(app.app(), uri, &token).await).await;
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Research Peak District Areas");
    assert_eq!(json["data"]["statistics"]["total"], 12);

    let response = get_auth(app.app(), "/api/v1/progress/items?status=finished", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_applies_defaults() {
    let app = common::build_test_app().await;
    let token = default_token(app.app()).await;

    let item = create(app.app(), &token, json!({ "title": "Book flights" })).await;
    assert_eq!(item["category"], "General");
    assert_eq!(item["status"], "not_started");
    assert_eq!(item["priority"], "medium");
    assert!(item["completed_date"].is_null());
    assert_eq!(item["subtasks"], json!([]));
}

#[tokio::test]
async fn create_rejects_invalid_input() {
    let app = common::build_test_app().await;
    let token = default_token(app.app()).await;

    let response = post_json_auth(
        app.app(),
        "/api/v1/progress/items",
        json!({ "title": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json_auth(
        app.app(),
        "/api/v1/progress/items",
        json!({ "title": "Ship car", "priority": "critical" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn status_changes_stamp_and_clear_completed_date() {
    let app = common::build_test_app().await;
    let token = default_token(app.app()).await;
    let item = create(app.app(), &token, json!({ "title": "Cancel utilities" })).await;
    let uri = format!("/api/v1/progress/items/{}", item["id"]);

    let response = put_json_auth(app.app(), &uri, json!({ "status": "completed" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let done = body_json(response).await;
    assert_eq!(done["data"]["status"], "completed");
    assert!(done["data"]["completed_date"].is_string());
    assert_eq!(done["data"]["title"], "Cancel utilities");

    let reopened = body_json(put_json_auth(app.app(), &uri, json!({ "status": "in_progress" }), &token).await).await;
    assert!(reopened["data"]["completed_date"].is_null());
}

#[tokio::test]
async fn toggle_subtask_flips_and_checks_bounds() {
    let app = common::build_test_app().await;
    let token = default_token(app.app()).await;
    let item = create(
        app.app(),
        &token,
        json!({
            "title": "Pack kitchen",
            "subtasks": [{ "task": "Buy boxes" }, { "task": "Wrap plates", "completed": true }],
        }),
    )
    .await;
    let id = &item["id"];

    let uri = format!("/api/v1/progress/items/{id}/subtasks/0/toggle");
    let json = body_json(post_auth(app.app(), &uri, &token).await).await;
    assert_eq!(json["data"]["subtasks"][0]["completed"], true);
    assert_eq!(json["data"]["subtasks"][1]["completed"], true);

    let uri = format!("/api/v1/progress/items/{id}/subtasks/2/toggle");
    let response = post_auth(app.app(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn delete_then_missing() {
    let app = common::build_test_app().await;
    let token = default_token(app.app()).await;
    let item = create(app.app(), &token, json!({ "title": "Temporary" })).await;
    let uri = format!("/api/v1/progress/items/{}", item["id"]);

    let response = delete_auth(app.app(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app.app(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn items_are_private_to_their_owner() {
    let app = common::build_test_app().await;
    let owner = default_token(app.app()).await;
    let item = create(app.app(), &owner, json!({ "title": "Mine" })).await;
    let uri = format!("/api/v1/progress/items/{}", item["id"]);

    let intruder = register(app.app(), "intruder").await;
    let response = put_json_auth(app.app(), &uri, json!({ "title": "Yours now" }), &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = delete_auth(app.app(), &uri, &intruder).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(get_auth(app.app(), "/api/v1/progress/items", &intruder).await).await;
    let titles: Vec<&str> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert!(!titles.contains(&"Mine"));
}

#[tokio::test]
async fn item_dashboard_summarises() {
    let app = common::build_test_app().await;
    let token = default_token(app.app()).await;

    let json = body_json(get_auth(app.app(), "/api/v1/progress/dashboard", &token).await).await;
    let data = &json["data"];
    assert_eq!(data["overview"]["total_items"], 12);
    assert_eq!(data["overview"]["completed_items"], 4);
    assert_eq!(data["overview"]["in_progress_items"], 6);
    assert_eq!(data["status_distribution"]["completed"], 4);
    assert_eq!(data["category_breakdown"]["Documentation"]["total"], 2);
}

#[tokio::test]
async fn progress_routes_require_auth() {
    let app = common::build_test_app().await;

    let response = common::get(app.app(), "/api/v1/progress/items").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let response = common::get(app.app(), "/api/v1/progress/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
