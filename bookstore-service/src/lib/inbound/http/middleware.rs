use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const REJECTION: &str = "invalid or expired token";

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that verifies the bearer token and adds the caller to request extensions.
///
/// Every rejection carries the same message; the reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::Unauthorized(REJECTION.to_string())
    })?;

    let payload = state.token_service.verify_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Bearer token rejected");
        ApiError::Unauthorized(REJECTION.to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: payload.user_id,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
