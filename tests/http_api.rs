//! Client behavior against a stub of the status board backend.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use workstatus::api::{ApiClient, Backend};
use workstatus::board::StatusBoard;
use workstatus::config::Config;
use workstatus::error::ApiError;
use workstatus::models::status::Status;
use workstatus::session::Session;

fn test_config(base: &str) -> Config {
    Config {
        api_url: base.to_string(),
        login_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_secs(2),
        poll_interval: Duration::from_secs(60),
        seed_mode: false,
    }
}

fn authed(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains("uid="))
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == "diana.tesler@example.com" && body["password"] == "diana1234" {
        (
            [(header::SET_COOKIE, "uid=1; Path=/; HttpOnly")],
            Json(json!({
                "id": 1,
                "email": "diana.tesler@example.com",
                "first_name": "Diana",
                "last_name": "Tesler"
            })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid email or password"})),
        )
            .into_response()
    }
}

async fn roster(headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Not authenticated"})),
        )
            .into_response();
    }
    // one snake_case status, the shipped backend typo, and a user with no
    // status row yet
    Json(json!({
        "users": [
            {"id": 1, "first_name": "Diana", "last_name": "Tesler", "status": "working_remotely"},
            {"id": 2, "first_name": "Noam", "last_name": "Peled", "status": "BuissnessTrip"},
            {"id": 3, "first_name": "Omer", "last_name": "Shahar", "status": null}
        ]
    }))
    .into_response()
}

async fn my_status(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !authed(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Not authenticated"})),
        )
            .into_response();
    }
    if params.get("user_id").map(String::as_str) == Some("1") {
        Json(json!({
            "id": 1,
            "first_name": "Diana",
            "last_name": "Tesler",
            "status": "working_remotely"
        }))
        .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "User not found"})),
        )
            .into_response()
    }
}

async fn update_status(
    headers: HeaderMap,
    Query(_params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if !authed(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Not authenticated"})),
        )
            .into_response();
    }
    // the stub only accepts one value, everything else fails validation
    if body["status"] == "OnVacation" {
        Json(json!({"user_id": 1, "status": "OnVacation"})).into_response()
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "detail": [
                    {"loc": ["body", "status"], "msg": "value is not a valid enumeration member", "type": "type_error.enum"}
                ]
            })),
        )
            .into_response()
    }
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(|| async { Json(json!({"ok": true})) }))
        .route("/users/list_users_with_statuses", get(roster))
        .route("/users/get_user_status", get(my_status))
        .route("/user_statuses/update_user_status", put(update_status));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn session_for(user_id: i64) -> Session {
    Session {
        user_id,
        display_name: "Diana Tesler".to_string(),
    }
}

#[tokio::test]
async fn login_sets_cookie_and_roster_is_canonicalized() {
    let base = spawn_stub().await;
    let client = ApiClient::new(&test_config(&base)).unwrap();

    let user = client
        .login("diana.tesler@example.com", "diana1234")
        .await
        .unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.first_name, "Diana");

    let mut board = StatusBoard::new(Backend::Http(client), session_for(1));
    board.load_me_status().await.unwrap();
    assert_eq!(board.me_status(), Status::WorkingRemotely);

    board.refresh().await.unwrap();
    let rows = board.view(&Default::default());
    assert_eq!(rows.len(), 2); // own row excluded
    let noam = rows.iter().find(|u| u.id == 2).unwrap();
    assert_eq!(noam.status, Status::BusinessTrip); // typo canonicalized
    let omer = rows.iter().find(|u| u.id == 3).unwrap();
    assert_eq!(omer.status, Status::Working); // null defaults to Working
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let base = spawn_stub().await;
    let client = ApiClient::new(&test_config(&base)).unwrap();
    let err = client
        .login("diana.tesler@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredentials));
}

#[tokio::test]
async fn roster_without_session_is_session_expired() {
    let base = spawn_stub().await;
    let client = ApiClient::new(&test_config(&base)).unwrap();
    let err = client.roster().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
}

#[tokio::test]
async fn rejected_update_rolls_back_with_backend_detail() {
    let base = spawn_stub().await;
    let client = ApiClient::new(&test_config(&base)).unwrap();
    client
        .login("diana.tesler@example.com", "diana1234")
        .await
        .unwrap();

    let mut board = StatusBoard::new(Backend::Http(client), session_for(1));
    board.load_me_status().await.unwrap();
    board.refresh().await.unwrap();

    let err = board.set_my_status(Status::BusinessTrip).await.unwrap_err();
    match &err {
        ApiError::Validation(msg) => {
            assert!(msg.contains("not a valid enumeration member"))
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(board.me_status(), Status::WorkingRemotely);

    // the value the stub accepts goes through and stays in place
    assert!(board.set_my_status(Status::OnVacation).await.unwrap());
    assert_eq!(board.me_status(), Status::OnVacation);
    let mine = board.roster().iter().find(|u| u.id == 1).unwrap();
    assert_eq!(mine.status, Status::OnVacation);
}
