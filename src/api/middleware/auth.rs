//! Bearer token authentication for the admin API.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Rejects admin requests without a valid `Authorization: Bearer <token>`.
///
/// The token is hashed with the server's signing secret and must match a
/// non-revoked row in `api_tokens`; a match stamps `last_used_at`. Failures
/// answer `401` with `WWW-Authenticate: Bearer`.
///
/// Mounted with `route_layer` so unknown admin paths still answer `404`.
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => token,
        Err(_) => {
            tracing::debug!(path = %parts.uri.path(), "Admin request without bearer token");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            ));
        }
    };

    if let Err(e) = state.auth_service.authenticate(&token).await {
        tracing::info!(path = %parts.uri.path(), "Admin request with rejected token");
        return Err(e);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
