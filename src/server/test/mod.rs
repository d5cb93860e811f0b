//! Request-level tests driving the full router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::{
    model::{api::ErrorDto, auth::AuthResponseDto},
    server::{router::router, service::auth::token::TokenService, state::AppState},
};

const SECRET: &str = "test-secret-key-for-testing-only-min-32-chars";

fn app(db: &sea_orm::DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone(), TokenService::new(SECRET, 1)))
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body.to_vec())
}

async fn register(app: &Router, email: &str) -> AuthResponseDto {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "email": email, "password": "secret1", "name": "Ada" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    serde_json::from_slice(&body).unwrap()
}

/// Tests the register then login flow over HTTP.
///
/// Expected: 201 on register, 200 with the right password, 401 with a wrong one
#[tokio::test]
async fn register_then_login() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let app = app(test.db.as_ref().unwrap());

    let registered = register(&app, "A@X.com").await;
    assert_eq!(registered.user.email, "a@x.com");

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "a@x.com", "password": "secret1" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let login: AuthResponseDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(login.user.id, registered.user.id);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "a@x.com", "password": "wrong-password" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "Invalid email or password");

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "email": "a@x.com", "password": "secret1", "name": "Again" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

/// Tests that guarded routes require a bearer token.
///
/// Expected: 401 without a token, 200 with one
#[tokio::test]
async fn guarded_route_requires_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, _) = send(&app, request(Method::GET, "/users/me", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let registered = register(&app, "me@x.com").await;
    let (status, body) = send(
        &app,
        request(Method::GET, "/users/me", Some(&registered.token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let me: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(me["email"], "me@x.com");
}

/// Tests the error body of an unknown course.
///
/// Expected: 404 with the course ID in the message
#[tokio::test]
async fn unknown_course_is_not_found() {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(&app, request(Method::GET, "/courses/12", None, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "Course with ID 12 not found");
}

/// Tests the group lifecycle over HTTP.
///
/// A group of two is created, one user joins, a third is turned away, then the member
/// leaves.
///
/// Expected: 201, 201, 403 "Group is full", 204, and a second leave answers 404
#[tokio::test]
async fn group_capacity_over_http() {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let app = app(test.db.as_ref().unwrap());

    let owner = register(&app, "owner@x.com").await;
    let member = register(&app, "member@x.com").await;
    let late = register(&app, "late@x.com").await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/groups",
            Some(&owner.token),
            Some(json!({ "name": "Pairs", "max_members": 2 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let group: Value = serde_json::from_slice(&body).unwrap();
    let group_id = group["id"].as_i64().unwrap();
    assert_eq!(group["members"].as_array().unwrap().len(), 1);

    let join_uri = format!("/groups/{}/join", group_id);
    let (status, _) = send(&app, request(Method::POST, &join_uri, Some(&member.token), None)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, request(Method::POST, &join_uri, Some(&late.token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "Group is full");

    let leave_uri = format!("/groups/{}/leave", group_id);
    let (status, _) = send(&app, request(Method::DELETE, &leave_uri, Some(&member.token), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, request(Method::DELETE, &leave_uri, Some(&member.token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        request(Method::GET, &format!("/groups/{}", group_id), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let group: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(group["member_count"], 1);
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with every documented path present
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(&app, request(Method::GET, "/api-docs/openapi.json", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&body).unwrap();
    for path in ["/auth/register", "/groups/{id}/join", "/progress/dashboard"] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }
}

/// Tests that malformed path parameters and bodies answer with the JSON error body.
///
/// Expected: 400 with a `message` for a non-numeric ID and for invalid JSON
#[tokio::test]
async fn malformed_requests_return_json_errors() {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(&app, request(Method::GET, "/courses/abc", None, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert!(!error.message.is_empty());

    let (status, body) = send(
        &app,
        Request::builder()
            .method(Method::POST)
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"email\": "))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert!(!error.message.is_empty());
}
