use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::CreateContactCommand;
use crate::domain::contact::models::UpdateContactCommand;
use crate::domain::user::models::UserId;

/// Port for contact domain service operations.
///
/// Every operation acts on behalf of an authenticated user. Single-contact
/// operations check existence first and ownership second.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    /// List the contacts owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_contacts(&self, owner: UserId) -> Result<Vec<Contact>, ContactError>;

    /// Create a contact owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_contact(
        &self,
        owner: UserId,
        command: CreateContactCommand,
    ) -> Result<Contact, ContactError>;

    /// Fetch a single contact.
    ///
    /// # Errors
    /// * `NotFound` - Contact does not exist
    /// * `Forbidden` - Contact belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get_contact(&self, actor: UserId, id: ContactId) -> Result<Contact, ContactError>;

    /// Update the provided fields of a contact.
    ///
    /// # Errors
    /// * `NotFound` - Contact does not exist
    /// * `Forbidden` - Contact belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_contact(
        &self,
        actor: UserId,
        id: ContactId,
        command: UpdateContactCommand,
    ) -> Result<Contact, ContactError>;

    /// Delete a contact, returning the removed document.
    ///
    /// # Errors
    /// * `NotFound` - Contact does not exist
    /// * `Forbidden` - Contact belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_contact(&self, actor: UserId, id: ContactId) -> Result<Contact, ContactError>;
}

/// Persistence operations for contact aggregate.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    /// Persist a new contact.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Retrieve contact by identifier regardless of owner.
    ///
    /// # Returns
    /// Optional contact (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactError>;

    /// Retrieve every contact owned by `owner`, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, ContactError>;

    /// Overwrite the mutable fields of an existing contact.
    ///
    /// The write is conditioned on both id and owner id; the owner column is
    /// never written.
    ///
    /// # Errors
    /// * `NotFound` - No contact with this id and owner
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Remove exactly this contact (matched by id and owner id).
    ///
    /// # Errors
    /// * `NotFound` - No contact with this id and owner
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, contact: &Contact) -> Result<(), ContactError>;
}
