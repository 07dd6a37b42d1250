use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactName;
use crate::domain::contact::models::PhoneNumber;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_contact(row: PgRow) -> Result<Contact, ContactError> {
        let id: Uuid = row.get("id");
        let owner_id: Uuid = row.get("owner_id");
        let name: String = row.get("name");
        let email: String = row.get("email");
        let phone: String = row.get("phone");
        let created_at: DateTime<Utc> = row.get("created_at");
        let updated_at: DateTime<Utc> = row.get("updated_at");

        let corrupt =
            |e: String| ContactError::DatabaseError(format!("Corrupt contact {}: {}", id, e));

        Ok(Contact {
            id: ContactId(id),
            owner_id: UserId(owner_id),
            name: ContactName::new(name).map_err(|e| corrupt(e.to_string()))?,
            email: EmailAddress::new(email).map_err(|e| corrupt(e.to_string()))?,
            phone: PhoneNumber::new(phone).map_err(|e| corrupt(e.to_string()))?,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, owner_id, name, email, phone, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .bind(contact.name.as_str())
        .bind(contact.email.as_str())
        .bind(contact.phone.as_str())
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        Ok(contact)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, name, email, phone, created_at, updated_at
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_contact).transpose()
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, ContactError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, name, email, phone, created_at, updated_at
            FROM contacts
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_contact).collect()
    }

    async fn update(&self, contact: Contact) -> Result<Contact, ContactError> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET name = $3, email = $4, phone = $5, updated_at = $6
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .bind(contact.name.as_str())
        .bind(contact.email.as_str())
        .bind(contact.phone.as_str())
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(contact.id));
        }

        Ok(contact)
    }

    async fn delete(&self, contact: &Contact) -> Result<(), ContactError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contacts
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(contact.id));
        }

        Ok(())
    }
}
