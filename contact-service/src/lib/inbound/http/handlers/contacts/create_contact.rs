use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ContactResponseData;
use crate::domain::contact::errors::ContactNameError;
use crate::domain::contact::errors::PhoneNumberError;
use crate::domain::contact::models::ContactName;
use crate::domain::contact::models::CreateContactCommand;
use crate::domain::contact::models::PhoneNumber;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::present;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .contact_service
        .create_contact(user.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::CREATED, contact.into()))
}

/// HTTP request body for creating a contact (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateContactRequest {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateContactRequestError {
    #[error("All fields are mandatory")]
    MissingField,

    #[error("Invalid contact name: {0}")]
    Name(#[from] ContactNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid phone number: {0}")]
    Phone(#[from] PhoneNumberError),
}

impl CreateContactRequest {
    fn try_into_command(self) -> Result<CreateContactCommand, ParseCreateContactRequestError> {
        let (Some(name), Some(email), Some(phone)) =
            (present(self.name), present(self.email), present(self.phone))
        else {
            return Err(ParseCreateContactRequestError::MissingField);
        };

        Ok(CreateContactCommand {
            name: ContactName::new(name)?,
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::new(phone)?,
        })
    }
}

impl From<ParseCreateContactRequestError> for ApiError {
    fn from(err: ParseCreateContactRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
