use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Identity resolved from a validated bearer token. Handlers take this as
/// an extractor argument, so every todo operation is scoped to the token's
/// username and never to anything in the body or query.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        match state.tokens.validate(token) {
            Ok(username) => Ok(AuthUser { username }),
            Err(err) => {
                debug!("rejected bearer token: {}", err);
                Err(AppError::Unauthorized)
            }
        }
    }
}
