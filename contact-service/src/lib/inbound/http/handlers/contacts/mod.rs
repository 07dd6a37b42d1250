use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::contact::models::Contact;

pub mod create_contact;
pub mod delete_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod update_contact;

pub use create_contact::create_contact;
pub use delete_contact::delete_contact;
pub use get_contact::get_contact;
pub use list_contacts::list_contacts;
pub use update_contact::update_contact;

/// Response body for contact operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactResponseData {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Contact> for ContactResponseData {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            owner_id: contact.owner_id.to_string(),
            name: contact.name.as_str().to_string(),
            email: contact.email.as_str().to_string(),
            phone: contact.phone.as_str().to_string(),
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
