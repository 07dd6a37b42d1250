use std::fmt;

use auth::ownership::Owned;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::contact::errors::ContactIdError;
use crate::domain::contact::errors::ContactNameError;
use crate::domain::contact::errors::PhoneNumberError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

/// Contact unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub Uuid);

impl ContactId {
    /// Generate a new random contact ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a contact ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ContactIdError> {
        Uuid::parse_str(s)
            .map(ContactId)
            .map_err(|e| ContactIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Contact aggregate.
///
/// `owner_id` is fixed when the contact is created and is never reassigned;
/// only its owner may read or change it.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub owner_id: UserId,
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Apply the provided fields of an update, leaving ownership untouched.
    pub fn apply(&mut self, command: UpdateContactCommand, at: DateTime<Utc>) {
        if let Some(name) = command.name {
            self.name = name;
        }
        if let Some(email) = command.email {
            self.email = email;
        }
        if let Some(phone) = command.phone {
            self.phone = phone;
        }
        self.updated_at = at;
    }
}

impl Owned for Contact {
    type OwnerId = UserId;

    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}

/// Contact name value object with validation.
///
/// Ensures name is non-empty and within 100 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated contact name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace
    /// * `TooLong` - Name exceeds 100 characters
    pub fn new(name: String) -> Result<Self, ContactNameError> {
        let length = name.chars().count();
        if name.trim().is_empty() {
            Err(ContactNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ContactNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MAX_LENGTH: usize = 32;

    /// Create a new validated phone number.
    ///
    /// # Errors
    /// * `Empty` - Number is empty or whitespace
    /// * `TooLong` - Number exceeds 32 characters
    /// * `InvalidCharacters` - Contains anything besides digits and separators
    pub fn new(phone: String) -> Result<Self, PhoneNumberError> {
        let length = phone.chars().count();
        if phone.trim().is_empty() {
            Err(PhoneNumberError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(PhoneNumberError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || " +-().".contains(c))
        {
            Err(PhoneNumberError::InvalidCharacters)
        } else {
            Ok(Self(phone))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a contact. All fields are mandatory.
#[derive(Debug)]
pub struct CreateContactCommand {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

/// Command to update a contact.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateContactCommand {
    pub name: Option<ContactName>,
    pub email: Option<EmailAddress>,
    pub phone: Option<PhoneNumber>,
}
