mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{register_and_login, send, test_state};

#[tokio::test]
async fn full_crud_flow() {
    let state = test_state();
    let token = register_and_login(&state, "alice", "pw").await;

    // Empty collection before anything is created.
    let (status, body) = send(&state, "GET", "/todos", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 0);

    let (status, created) = send(
        &state,
        "POST",
        "/todos",
        Some(json!({ "title": "first task" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["title"], "first task");
    assert_eq!(created["completed"], false);
    assert!(created["created_at"].is_string());

    let (status, body) = send(&state, "GET", "/todos", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let todos = body.as_array().expect("array");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], id.as_str());

    let (status, body) = send(&state, "GET", &format!("/todos/{id}"), None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "first task");

    let (status, body) = send(
        &state,
        "PUT",
        &format!("/todos/{id}"),
        Some(json!({ "title": "updated task" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "updated task");
    assert_eq!(body["completed"], false);

    let (status, body) = send(
        &state,
        "PUT",
        &format!("/todos/{id}"),
        Some(json!({ "completed": true })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "updated task");
    assert_eq!(body["completed"], true);

    let (status, body) = send(&state, "DELETE", &format!("/todos/{id}"), None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted");

    let (status, body) = send(&state, "GET", "/todos", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn create_rejects_empty_title() {
    let state = test_state();
    let token = register_and_login(&state, "alice", "pw").await;

    let (status, _) = send(
        &state,
        "POST",
        "/todos",
        Some(json!({ "title": "" })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_then_get_and_double_delete_not_found() {
    let state = test_state();
    let token = register_and_login(&state, "alice", "pw").await;

    let (_, created) = send(
        &state,
        "POST",
        "/todos",
        Some(json!({ "title": "task" })),
        Some(&token),
    )
    .await;
    let id = created["id"].as_str().expect("id");

    let (status, _) = send(&state, "DELETE", &format!("/todos/{id}"), None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&state, "GET", &format!("/todos/{id}"), None, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&state, "DELETE", &format!("/todos/{id}"), None, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &state,
        "PUT",
        &format!("/todos/{id}"),
        Some(json!({ "completed": true })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
