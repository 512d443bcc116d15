//! Bearer-token guard for the order endpoints.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;

/// The static token requests must present.
#[derive(Clone)]
pub struct AuthToken(pub String);

/// Middleware rejecting requests without `Authorization: Bearer <token>`.
pub async fn require_bearer(
    State(AuthToken(token)): State<AuthToken>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|presented| presented == token);

    if !authorized {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
