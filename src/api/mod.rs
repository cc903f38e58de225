use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::models::{Credentials, LoginResponse, MessageResponse, NewTodoRequest, Todo, UpdateTodoRequest};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

async fn register(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    if creds.username.is_empty() || creds.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password required".to_string(),
        ));
    }

    state.vault.register(&creds.username, &creds.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created".to_string(),
        }),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    if creds.username.is_empty() || creds.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password required".to_string(),
        ));
    }

    state.vault.verify(&creds.username, &creds.password).await?;

    let token = state.tokens.issue(&creds.username).map_err(|err| {
        tracing::error!("token issuance failed: {}", err);
        AppError::InternalServerError
    })?;
    Ok(Json(LoginResponse { token }))
}

async fn list_todos(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Todo>>, AppError> {
    Ok(Json(state.store.list(&user.username).await))
}

async fn create_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<NewTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    if req.title.is_empty() {
        return Err(AppError::BadRequest("Title required".to_string()));
    }

    let todo = state.store.create(&user.username, req.title).await;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .store
        .get(&user.username, &id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

async fn update_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .store
        .update(&user.username, &id, req)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.delete(&user.username, &id).await {
        return Err(AppError::NotFound);
    }
    Ok(Json(MessageResponse {
        message: "Todo deleted".to_string(),
    }))
}
