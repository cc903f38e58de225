use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todo_backend::api::router;
use todo_backend::auth::{CredentialVault, TokenService};
use todo_backend::state::AppState;
use todo_backend::store::TodoStore;

pub fn test_state() -> AppState {
    AppState {
        // Low bcrypt cost keeps the suite fast; production uses the default.
        vault: CredentialVault::with_cost(4),
        tokens: TokenService::new("testsecret"),
        store: TodoStore::new(),
    }
}

/// Fire one request at the app and decode the JSON body (Null if empty).
pub async fn send(
    state: &AppState,
    method: &str,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router(state.clone())
        .oneshot(request)
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Register + login, returning a usable bearer token.
pub async fn register_and_login(state: &AppState, username: &str, password: &str) -> String {
    let creds = serde_json::json!({ "username": username, "password": password });
    let (status, _) = send(state, "POST", "/register", Some(creds.clone()), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(state, "POST", "/login", Some(creds), None).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token").to_string()
}
