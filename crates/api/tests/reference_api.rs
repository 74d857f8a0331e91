//! HTTP-level tests for the read-only reference endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, default_token, get, get_auth};

#[tokio::test]
async fn job_listings_filter_by_type() {
    let app = common::build_test_app().await;

    let json = body_json(get(app.app(), "/api/v1/jobs/listings").await).await;
    let total = json["data"]["total"].as_u64().unwrap();
    assert_eq!(json["data"]["jobs"].as_array().unwrap().len() as u64, total);
    assert_eq!(
        json["data"]["job_types"],
        serde_json::json!(["freelance", "full-time", "remote"])
    );

    let json = body_json(get(app.app(), "/api/v1/jobs/listings?job_type=remote").await).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["jobs"][0]["title"], "Software Developer (Remote)");

    // Empty parameters are ignored.
    let json = body_json(get(app.app(), "/api/v1/jobs/listings?category=&job_type=").await).await;
    assert_eq!(json["data"]["total"].as_u64().unwrap(), total);
}

#[tokio::test]
async fn featured_jobs_and_categories() {
    let app = common::build_test_app().await;

    let json = body_json(get(app.app(), "/api/v1/jobs/featured").await).await;
    assert_eq!(json["data"]["featured_jobs"].as_array().unwrap().len(), 3);

    let json = body_json(get(app.app(), "/api/v1/jobs/categories").await).await;
    assert!(json["data"]["Technology"].is_array());
}

#[tokio::test]
async fn visa_requirements_and_lookup() {
    let app = common::build_test_app().await;

    let json = body_json(get(app.app(), "/api/v1/visa/requirements").await).await;
    assert_eq!(json["data"]["visa_types"].as_array().unwrap().len(), 4);

    let response = get(app.app(), "/api/v1/visa/requirements/skilled-worker-visa").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["visa_type"], "Skilled Worker Visa");

    let response = get(app.app(), "/api/v1/visa/requirements/golden-visa").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = get(app.app(), "/api/v1/visa/checklist").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn logistics_endpoints() {
    let app = common::build_test_app().await;

    let json = body_json(get(app.app(), "/api/v1/logistics/providers").await).await;
    assert_eq!(json["data"]["total"], 6);

    let json = body_json(get(app.app(), "/api/v1/logistics/providers?service_type=container").await).await;
    assert_eq!(json["data"]["total"], 2);

    let json = body_json(get(app.app(), "/api/v1/logistics/cost-calculator").await).await;
    assert_eq!(json["data"]["base_costs"]["full_service"]["average"], 11_500);

    let json = body_json(get(app.app(), "/api/v1/logistics/checklist").await).await;
    let stages = json["data"]["stages"].as_array().unwrap();
    assert_eq!(stages.first().unwrap()["key"], "8_weeks_before");
    assert_eq!(stages.last().unwrap()["key"], "moving_day");
}

#[tokio::test]
async fn resources_listing_and_search() {
    let app = common::build_test_app().await;

    let json = body_json(get(app.app(), "/api/v1/resources/all").await).await;
    let keys: Vec<&str> = json["data"].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["visa_legal", "housing", "employment", "financial", "local_services", "lifestyle"]
    );

    let json = body_json(get(app.app(), "/api/v1/resources/search?q=MONEY").await).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["results"][0]["section"], "financial");

    let response = get(app.app(), "/api/v1/resources/search?q=visa&section=nightlife").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn locations_and_housing() {
    let app = common::build_test_app().await;

    let json = body_json(get(app.app(), "/api/v1/locations/origin").await).await;
    assert_eq!(json["data"]["location_name"], "Phoenix, Arizona");

    let json = body_json(get(app.app(), "/api/v1/locations/destination").await).await;
    assert_eq!(json["data"]["location_name"], "Peak District, UK");

    let response = get(app.app(), "/api/v1/housing/origin").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(get(app.app(), "/api/v1/housing/destination").await).await;
    assert!(json["data"]["median_rent"].is_u64());
}

#[tokio::test]
async fn comparison_requires_auth() {
    let app = common::build_test_app().await;

    let response = get(app.app(), "/api/v1/comparison").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = default_token(app.app()).await;
    let json = body_json(get_auth(app.app(), "/api/v1/comparison", &token).await).await;
    let data = &json["data"];
    assert_eq!(data["from_location"]["slug"], "phoenix");
    assert_eq!(data["to_location"]["slug"], "peak-district");
    let drop = data["comparison_metrics"]["climate_change"]["temperature_change"]
        .as_f64()
        .unwrap();
    assert!((drop + 27.0).abs() < 1e-9);
}
