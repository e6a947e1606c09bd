//! Server-driven grid tests driving the axum router

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use common::{new_department, new_developer, TestDb};
use developer_registry::config::Config;
use developer_registry::contract::Developer;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn call(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/grid/developers")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

/// Router plus one "Platform" department and the given developers
async fn seeded(db: &TestDb, names: &[&str]) -> (Router, i32, Vec<Developer>) {
    let service = db.service();
    let platform = service
        .create_department(new_department("Platform"))
        .await
        .unwrap();
    let mut developers = Vec::new();
    for name in names {
        developers.push(
            service
                .create_developer(new_developer(name, platform.id))
                .await
                .unwrap(),
        );
    }

    let router = db
        .router(Config {
            grid_page_size: 2,
            ..Config::default()
        })
        .await;
    (router, platform.id, developers)
}

#[tokio::test]
async fn test_data_source_pages_and_sorts() {
    let db = TestDb::new().await;
    let (router, _, _) = seeded(&db, &["Carl", "Ann", "Eve", "Bob", "Dan"]).await;

    let response = call(&router, get("/grid/developers?page=2&sort=name-desc")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 5);
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Carl", "Bob"]);
    assert_eq!(body["data"][0]["department"]["name"], "Platform");
}

#[tokio::test]
async fn test_unknown_sort_is_a_bad_request() {
    let db = TestDb::new().await;
    let (router, _, _) = seeded(&db, &["Ann"]).await;

    let response = call(&router, get("/grid/developers?sort=salary-asc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_departments_are_plain_json() {
    let db = TestDb::new().await;
    let (router, platform, _) = seeded(&db, &[]).await;

    let response = call(&router, get("/grid/departments")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{ "id": platform, "name": "Platform" }])
    );
}

#[tokio::test]
async fn test_form_post_redirects_with_status_message() {
    let db = TestDb::new().await;
    let (router, platform, _) = seeded(&db, &[]).await;

    let form = format!(
        "name=Ada+Lovelace&date_of_birth=1815-12-10&address=London&department_id={platform}"
    );
    let response = call(&router, post_form(&form)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with("/grid?status="));

    // Following the redirect shows the status message
    let page = body_json(call(&router, get(&location)).await).await;
    assert_eq!(
        page["status_message"],
        "Developer - Ada Lovelace was successfully created."
    );

    let names: Vec<_> = db
        .service()
        .list_developers()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Ada Lovelace"]);
}

#[tokio::test]
async fn test_invalid_form_rerenders_with_warning() {
    let db = TestDb::new().await;
    let (router, platform, _) = seeded(&db, &[]).await;

    for form in [
        format!("name=&date_of_birth=1990-01-01&address=x&department_id={platform}"),
        format!("name=Ada&date_of_birth=yesterday&address=x&department_id={platform}"),
        "name=Ada&date_of_birth=1990-01-01&address=x".to_string(),
    ] {
        let response = call(&router, post_form(&form)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_json(response).await;
        assert_eq!(
            page["status_message"],
            "Warning: Some required fields are not valid."
        );
        assert!(page["dev"].is_object());
    }

    assert!(db.service().list_developers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_store_failure_rerenders_with_error() {
    let db = TestDb::new().await;
    let (router, _, _) = seeded(&db, &[]).await;

    let response = call(
        &router,
        post_form("name=Ada&date_of_birth=1990-01-01&address=x&department_id=999"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["status_message"], "Error: Could not add developer Ada.");
    assert_eq!(page["dev"]["name"], "Ada");
}

#[tokio::test]
async fn test_put_echoes_request_and_updates_row() {
    let db = TestDb::new().await;
    let (router, platform, developers) = seeded(&db, &["Ann"]).await;
    let ann = &developers[0];

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/grid/developers?page=1&page_size=2&sort=name-asc")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "id": ann.id,
                "name": "Ann Smith",
                "date_of_birth": "1990-05-17",
                "address": "2 Side St",
                "department_id": platform,
            })
            .to_string(),
        ))
        .unwrap();
    let response = call(&router, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "page": 1, "page_size": 2, "sort": "name-asc" })
    );

    let loaded = db.service().get_developer(ann.id).await.unwrap();
    assert_eq!(loaded.name, "Ann Smith");
    assert_eq!(loaded.address, "2 Side St");
}

#[tokio::test]
async fn test_put_unknown_developer_is_null() {
    let db = TestDb::new().await;
    let (router, platform, _) = seeded(&db, &[]).await;

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/grid/developers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "id": uuid::Uuid::new_v4(),
                "name": "Ghost",
                "date_of_birth": "1990-05-17",
                "address": "Nowhere",
                "department_id": platform,
            })
            .to_string(),
        ))
        .unwrap();
    let response = call(&router, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Developer is null");
}

#[tokio::test]
async fn test_put_without_department_is_a_bad_request() {
    let db = TestDb::new().await;
    let (router, platform, developers) = seeded(&db, &["Ann"]).await;
    let ann = &developers[0];

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/grid/developers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "id": ann.id,
                "name": "Ann Smith",
                "date_of_birth": "1990-05-17",
                "address": "2 Side St",
            })
            .to_string(),
        ))
        .unwrap();
    let response = call(&router, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Department is required");

    let loaded = db.service().get_developer(ann.id).await.unwrap();
    assert_eq!(loaded.name, "Ann");
    assert_eq!(loaded.department_id, platform);
}

#[tokio::test]
async fn test_delete_row() {
    let db = TestDb::new().await;
    let (router, _, developers) = seeded(&db, &["Ann", "Bob"]).await;

    let delete = |id: uuid::Uuid| {
        Request::builder()
            .method(Method::DELETE)
            .uri(format!("/grid/developers/{id}"))
            .body(Body::empty())
            .unwrap()
    };

    let response = call(&router, delete(developers[0].id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.is_empty());

    let remaining = db.service().list_developers().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Bob");

    let response = call(&router, delete(developers[0].id)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Developer is null");
}
