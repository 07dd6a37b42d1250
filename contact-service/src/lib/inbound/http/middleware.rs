use auth::AuthGate;
use auth::GateRejection;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

const NO_TOKEN: &str = "User is not authorized, no token";
const NOT_AUTHORIZED: &str = "User is not authorized";

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
}

/// Middleware that admits requests carrying a valid bearer token and attaches
/// the caller's identity to request extensions.
pub async fn authenticate(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = match req.headers().get(http::header::AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            tracing::warn!("Rejected request: Authorization header is not valid UTF-8");
            ApiError::Unauthorized(NOT_AUTHORIZED.to_string())
        })?),
        None => None,
    };

    let claim = gate.admit(authorization).map_err(|rejection| {
        tracing::warn!(
            reason = %rejection,
            method = %req.method(),
            uri = %req.uri(),
            "Rejected request"
        );
        match rejection {
            GateRejection::MissingCredentials => ApiError::Unauthorized(NO_TOKEN.to_string()),
            GateRejection::MalformedCredentials | GateRejection::InvalidToken => {
                ApiError::Unauthorized(NOT_AUTHORIZED.to_string())
            }
        }
    })?;

    let user_id = UserId::from_string(&claim.user_id).map_err(|e| {
        tracing::warn!(error = %e, "Rejected request: token identity is not a user id");
        ApiError::Unauthorized(NOT_AUTHORIZED.to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claim.username,
        email: claim.email,
    });

    Ok(next.run(req).await)
}
