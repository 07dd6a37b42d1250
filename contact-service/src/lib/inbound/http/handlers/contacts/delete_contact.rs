use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ContactResponseData;
use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Delete a contact and answer with the removed document.
pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    let contact_id = ContactId::from_string(&id).map_err(ContactError::from)?;

    state
        .contact_service
        .delete_contact(user.user_id, contact_id)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}
