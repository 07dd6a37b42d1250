use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Echo the identity the gate attached to the request.
pub async fn current_user(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<CurrentUserResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<AuthenticatedUser> for CurrentUserResponseData {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.user_id.to_string(),
            username: user.username,
            email: user.email,
        }
    }
}
