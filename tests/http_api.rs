use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::Utc;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use campusd::repo::{FacadeCatalog, FetchPolicies, FetchPolicy, InMemoryCatalog};
use campusd::server::{AppState, build_router};
use campusd::types;

fn app(catalog: Arc<InMemoryCatalog>) -> Router {
    app_with_policies(catalog, FetchPolicies::default())
}

fn app_with_policies(catalog: Arc<InMemoryCatalog>, policies: FetchPolicies) -> Router {
    let facade = FacadeCatalog::new(catalog, policies);
    build_router(AppState::new(facade))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    let response = app.clone().oneshot(request).await.expect("response expected");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    let json = serde_json::from_slice::<Value>(&body).expect("body should be valid JSON");
    (status, json)
}

fn field(id: i32, name: &str) -> types::Field {
    types::Field {
        id,
        name: name.to_owned(),
    }
}

fn semester(id: i32, number: i32, field_id: i32, field_name: &str) -> types::Semester {
    types::Semester {
        id,
        number,
        field_id,
        field_name: field_name.to_owned(),
    }
}

fn user(username: &str) -> types::User {
    types::User {
        id: Uuid::new_v4(),
        username: username.to_owned(),
        email: format!("{username}@example.edu"),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn users_endpoint_returns_empty_array_without_rows() {
    let app = app(Arc::new(InMemoryCatalog::new()));

    let (status, body) = get_json(&app, "/api/v1/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn fields_endpoint_serializes_all_rows_in_engine_order() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.push_field(field(1, "informatics")).await;
    catalog.push_field(field(2, "economics")).await;
    let app = app(catalog);

    let (status, body) = get_json(&app, "/api/v1/fields").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("body should be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "informatics");
    assert_eq!(items[1]["name"], "economics");
}

#[tokio::test]
async fn semesters_come_back_ordered_with_field_names() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.push_field(field(1, "informatics")).await;
    for (id, number) in [(10, 3), (11, 1), (12, 2)] {
        catalog
            .push_semester(semester(id, number, 1, "informatics"))
            .await;
    }
    let app = app(catalog);

    let (status, body) = get_json(&app, "/api/v1/semesters").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("body should be an array");
    let numbers: Vec<i64> = items
        .iter()
        .map(|item| item["number"].as_i64().expect("number should be an integer"))
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    for item in items {
        assert_eq!(item["field_name"], "informatics");
    }
}

#[tokio::test]
async fn fields_fault_surfaces_the_fixed_error_body() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.set_unavailable(true);
    let app = app(catalog);

    let (status, body) = get_json(&app, "/api/v1/fields").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to fetch fields" }));
}

#[tokio::test]
async fn users_fault_degrades_to_an_empty_array() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.push_user(user("ada")).await;
    catalog.set_unavailable(true);
    let app = app(catalog);

    let (status, body) = get_json(&app, "/api/v1/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn policies_are_configurable_per_accessor() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.set_unavailable(true);
    let policies = FetchPolicies {
        fields: FetchPolicy::DegradeToEmpty,
        semesters: FetchPolicy::SurfaceError,
        users: FetchPolicy::DegradeToEmpty,
    };
    let app = app_with_policies(catalog, policies);

    let (status, body) = get_json(&app, "/api/v1/fields").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(&app, "/api/v1/semesters").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch semesters");
}

#[tokio::test]
async fn reads_are_idempotent_without_writes() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.push_field(field(1, "law")).await;
    catalog.push_field(field(2, "medicine")).await;
    let app = app(catalog);

    let (_, first) = get_json(&app, "/api/v1/fields").await;
    let (_, second) = get_json(&app, "/api/v1/fields").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn health_is_available() {
    let app = app(Arc::new(InMemoryCatalog::new()));

    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
