use std::sync::Arc;

use async_trait::async_trait;
use auth::ownership;
use auth::ownership::Operation;
use chrono::Utc;

use super::errors::ContactError;
use super::models::Contact;
use super::models::ContactId;
use super::models::CreateContactCommand;
use super::models::UpdateContactCommand;
use super::ports::ContactRepository;
use super::ports::ContactServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of ContactServicePort.
///
/// Lists are scoped to the caller at the repository query. Single-contact
/// operations fetch first, answer `NotFound` for absent ids, and only then
/// consult the ownership policy.
pub struct ContactService<CR>
where
    CR: ContactRepository,
{
    contact_repository: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository,
{
    pub fn new(contact_repository: Arc<CR>) -> Self {
        Self { contact_repository }
    }

    async fn fetch_authorized(
        &self,
        actor: UserId,
        id: ContactId,
        operation: Operation,
    ) -> Result<Contact, ContactError> {
        let contact = self
            .contact_repository
            .find_by_id(id)
            .await?
            .ok_or(ContactError::NotFound(id))?;

        ownership::authorize(&actor, &contact, operation).into_result(|| {
            tracing::warn!(
                user_id = %actor,
                contact_id = %id,
                ?operation,
                mutation = operation.is_mutation(),
                "Contact access denied"
            );
            ContactError::Forbidden {
                user_id: actor,
                contact_id: id,
            }
        })?;

        Ok(contact)
    }
}

#[async_trait]
impl<CR> ContactServicePort for ContactService<CR>
where
    CR: ContactRepository,
{
    async fn list_contacts(&self, owner: UserId) -> Result<Vec<Contact>, ContactError> {
        self.contact_repository.find_by_owner(owner).await
    }

    async fn create_contact(
        &self,
        owner: UserId,
        command: CreateContactCommand,
    ) -> Result<Contact, ContactError> {
        let now = Utc::now();
        let contact = Contact {
            id: ContactId::new(),
            owner_id: owner,
            name: command.name,
            email: command.email,
            phone: command.phone,
            created_at: now,
            updated_at: now,
        };

        let created = self.contact_repository.create(contact).await?;
        tracing::info!(contact_id = %created.id, owner_id = %owner, "Contact created");

        Ok(created)
    }

    async fn get_contact(&self, actor: UserId, id: ContactId) -> Result<Contact, ContactError> {
        self.fetch_authorized(actor, id, Operation::Read).await
    }

    async fn update_contact(
        &self,
        actor: UserId,
        id: ContactId,
        command: UpdateContactCommand,
    ) -> Result<Contact, ContactError> {
        let mut contact = self.fetch_authorized(actor, id, Operation::Update).await?;
        contact.apply(command, Utc::now());

        let updated = self.contact_repository.update(contact).await?;
        tracing::info!(contact_id = %id, "Contact updated");

        Ok(updated)
    }

    async fn delete_contact(&self, actor: UserId, id: ContactId) -> Result<Contact, ContactError> {
        let contact = self.fetch_authorized(actor, id, Operation::Delete).await?;

        self.contact_repository.delete(&contact).await?;
        tracing::info!(contact_id = %id, "Contact deleted");

        Ok(contact)
    }
}
