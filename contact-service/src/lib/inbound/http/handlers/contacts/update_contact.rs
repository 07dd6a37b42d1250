use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ContactResponseData;
use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactName;
use crate::domain::contact::models::PhoneNumber;
use crate::domain::contact::models::UpdateContactCommand;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a contact (raw JSON)
///
/// Any owner field a client sends is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateContactRequest {
    fn try_into_command(self) -> Result<UpdateContactCommand, ContactError> {
        // Validation errors convert via #[from]
        let name = self.name.map(ContactName::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        let phone = self.phone.map(PhoneNumber::new).transpose()?;

        Ok(UpdateContactCommand { name, email, phone })
    }
}

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    body: Result<Json<UpdateContactRequest>, JsonRejection>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    let contact_id = ContactId::from_string(&id).map_err(ContactError::from)?;

    // Absent and foreign contacts answer 404/403 whatever the body holds.
    state
        .contact_service
        .get_contact(user.user_id, contact_id)
        .await?;

    let Json(req) = body?;
    let command = req.try_into_command()?;

    state
        .contact_service
        .update_contact(user.user_id, contact_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}
