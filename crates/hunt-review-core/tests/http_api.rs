//! HttpReviewApi against a mock backend on an ephemeral port

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use hunt_review_core::assignment::{toggle_assignment, AssignmentOutcome};
use hunt_review_core::auth::login;
use hunt_review_core::dashboard::load_dashboard;
use hunt_review_core::hunt_detail::{load_hunt_detail, resolve_comment, submit_comment};
use hunt_review_core::models::Credentials;
use hunt_review_core::{
    ClientConfig, ClientError, HttpReviewApi, MemoryStorage, ReviewApi, SessionStore,
};
use serde_json::{json, Value};
use std::collections::HashMap;

const TOKEN: &str = "acc-token";
const BASE_PATH: &str = "/api/v1/treasure-hunt";

type Rejection = (StatusCode, Json<Value>);

fn authorize(headers: &HeaderMap) -> Result<(), Rejection> {
    let expected = format!("Bearer {}", TOKEN);
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Missing or invalid token" })),
        )),
    }
}

fn hunt_json(id: i64, reviewer_id: Option<i64>) -> Value {
    json!({
        "id": id,
        "title": format!("Hunt #{}", id),
        "description": "Follow the clues",
        "organizerId": 7,
        "reviewerId": reviewer_id,
        "startDate": null,
        "endDate": null,
        "huntStatus": "UNDER_REVIEW",
        "location": { "latitude": 48.8566, "longitude": 2.3522 }
    })
}

async fn sign_in(Json(body): Json<Value>) -> Result<Json<Value>, Rejection> {
    if body["password"] != "secret" {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Bad credentials" })),
        ));
    }
    Ok(Json(json!({
        "success": true,
        "message": "Signed in",
        "data": [{
            "id": 99,
            "username": "rev",
            "email": body["email"],
            "roles": ["REVIEWER"],
            "accessToken": TOKEN,
            "refreshToken": "ref-token"
        }],
        "errors": [],
        "errorCode": 0,
        "timestamp": 1700000000
    })))
}

async fn hunts(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, Rejection> {
    authorize(&headers)?;
    let content = if query.get("status").map(String::as_str) == Some("UNDER_REVIEW") {
        vec![hunt_json(5, None), hunt_json(6, Some(12))]
    } else {
        vec![]
    };
    Ok(Json(json!({
        "content": content,
        "pageable": { "pageNumber": 0, "pageSize": 20 },
        "totalElements": 2,
        "totalPages": 1,
        "number": 0,
        "size": 20,
        "first": true,
        "last": true,
        "empty": false
    })))
}

async fn assigned(headers: HeaderMap) -> Result<Json<Value>, Rejection> {
    authorize(&headers)?;
    Ok(Json(json!([hunt_json(8, Some(99))])))
}

async fn toggle(headers: HeaderMap, Path(hunt_id): Path<i64>) -> StatusCode {
    if authorize(&headers).is_err() {
        return StatusCode::UNAUTHORIZED;
    }
    if hunt_id == 5 {
        StatusCode::OK
    } else {
        StatusCode::CONFLICT
    }
}

async fn hunt(headers: HeaderMap, Path(hunt_id): Path<i64>) -> Result<Json<Value>, Rejection> {
    authorize(&headers)?;
    Ok(Json(hunt_json(hunt_id, Some(99))))
}

async fn challenges(headers: HeaderMap, Path(_hunt_id): Path<i64>) -> Result<Json<Value>, Rejection> {
    authorize(&headers)?;
    Ok(Json(json!([{
        "challengeId": 1,
        "title": "Reverse",
        "description": "Reverse a string",
        "points": 30,
        "challengeType": "CODE",
        "externalGameUri": null,
        "testCases": [{ "input": "ab", "expectedOutput": "ba", "order": 1 }],
        "optimalSolutions": [{ "id": 3, "code": "print(s[::-1])", "language": "Python" }],
        "challengeCodes": [{ "id": 4, "code": "class A {}", "language": "Java" }],
        "createdAt": "2025-01-01T10:00:00"
    }])))
}

async fn comments(headers: HeaderMap, Path(hunt_id): Path<i64>) -> Result<Json<Value>, Rejection> {
    authorize(&headers)?;
    Ok(Json(json!([
        { "id": 1, "huntId": hunt_id, "content": "Fix clue 2", "reviewerId": 99 }
    ])))
}

async fn add_comment(
    headers: HeaderMap,
    Path(hunt_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), Rejection> {
    authorize(&headers)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": 2,
            "huntId": hunt_id.to_string(),
            "content": body["content"],
            "reviewerId": 99
        })),
    ))
}

async fn remove_comment(headers: HeaderMap, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    authorize(&headers)?;
    if id == 1 {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Comment not found" })),
        ))
    }
}

async fn user(headers: HeaderMap, Path(id): Path<i64>) -> Result<Json<Value>, Rejection> {
    authorize(&headers)?;
    Ok(Json(json!({
        "id": id,
        "username": "organizer",
        "email": "organizer@example.com",
        "score": null
    })))
}

async fn spawn_backend() -> String {
    let api = Router::new()
        .route("/auth/signin", post(sign_in))
        .route("/hunts", get(hunts))
        .route("/hunts/reviewers/me", get(assigned))
        .route("/hunts/:hunt_id", get(hunt))
        .route("/hunts/:hunt_id/challenges", get(challenges))
        .route("/hunts/:hunt_id/comments", get(comments).post(add_comment))
        .route("/reviewers/hunts/:hunt_id", post(toggle))
        .route("/comments/:id", delete(remove_comment))
        .route("/users/:id", get(user));

    let app = Router::new().nest(BASE_PATH, api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend failed");
    });

    format!("http://{}{}/", addr, BASE_PATH)
}

fn credentials(password: &str) -> Credentials {
    Credentials {
        email: "rev@example.com".to_string(),
        password: password.to_string(),
    }
}

async fn client() -> HttpReviewApi<MemoryStorage> {
    let base_url = spawn_backend().await;
    HttpReviewApi::new(
        ClientConfig::new(base_url),
        SessionStore::new(MemoryStorage::new()),
    )
}

async fn signed_in_client() -> HttpReviewApi<MemoryStorage> {
    let api = client().await;
    login(&api, api.session(), &credentials("secret"))
        .await
        .expect("Login failed");
    api
}

#[tokio::test]
async fn test_login_stores_tokens() {
    let api = client().await;
    assert!(!api.session().is_authenticated());

    let response = login(&api, api.session(), &credentials("secret"))
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(api.session().access_token().as_deref(), Some(TOKEN));
    assert_eq!(api.session().refresh_token().as_deref(), Some("ref-token"));
}

#[tokio::test]
async fn test_bad_credentials_surface_server_message() {
    let api = client().await;

    let err = login(&api, api.session(), &credentials("wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 401, .. }));
    assert_eq!(err.user_message("fallback"), "Bad credentials");
    assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    let api = client().await;
    let err = api.assigned_hunts().await.unwrap_err();
    assert_eq!(err.user_message("fallback"), "Missing or invalid token");
}

#[tokio::test]
async fn test_dashboard_over_http() {
    let api = signed_in_client().await;
    let data = load_dashboard(&api).await.unwrap();

    let available: Vec<i64> = data.available.iter().map(|h| h.id).collect();
    assert_eq!(available, vec![5, 6]);
    assert_eq!(data.assigned.len(), 1);
    assert_eq!(data.assigned[0].reviewer_id, Some(99));
}

#[tokio::test]
async fn test_dashboard_fails_after_logout() {
    let api = signed_in_client().await;
    api.session().logout().unwrap();

    assert!(load_dashboard(&api).await.is_err());
}

#[tokio::test]
async fn test_toggle_status_codes() {
    let api = signed_in_client().await;

    assert_eq!(
        toggle_assignment(&api, 5).await.unwrap(),
        AssignmentOutcome::Toggled
    );
    assert_eq!(
        toggle_assignment(&api, 6).await.unwrap(),
        AssignmentOutcome::Rejected { status: 409 }
    );
}

#[tokio::test]
async fn test_hunt_detail_over_http() {
    let api = signed_in_client().await;
    let mut detail = load_hunt_detail(&api, 5).await.unwrap();

    assert_eq!(detail.hunt.id, 5);
    assert_eq!(detail.organizer.email, "organizer@example.com");
    assert_eq!(detail.challenges[0].optimal_solutions[0].language, "Python");
    assert_eq!(detail.comments.comments()[0].hunt_id, "5");

    let created = submit_comment(&api, 5, "Map pin is off")
        .await
        .unwrap()
        .unwrap();
    detail.comments.append(created);
    assert_eq!(detail.comments.len(), 2);
    assert_eq!(detail.comments.comments()[1].content, "Map pin is off");

    resolve_comment(&api, 1).await.unwrap();
    assert!(detail.comments.resolve(1));
    assert_eq!(detail.comments.comments()[0].id, 2);

    let err = resolve_comment(&api, 42).await.unwrap_err();
    assert_eq!(err.user_message("fallback"), "Comment not found");
}
