use thiserror::Error;

use crate::domain::contact::models::ContactId;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::UserId;

/// Error type for ContactId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for ContactName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactNameError {
    #[error("Contact name is empty")]
    Empty,

    #[error("Contact name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error type for PhoneNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("Phone number is empty")]
    Empty,

    #[error("Phone number too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Phone number may only contain digits, spaces, '+', '-', '(', ')' and '.'")]
    InvalidCharacters,
}

/// Top-level error type for all contact-related operations
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Invalid contact ID: {0}")]
    InvalidContactId(#[from] ContactIdError),

    #[error("Invalid contact name: {0}")]
    InvalidName(#[from] ContactNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneNumberError),

    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    #[error("User {user_id} does not own contact {contact_id}")]
    Forbidden {
        user_id: UserId,
        contact_id: ContactId,
    },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
