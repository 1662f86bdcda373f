//! 基于 Postgres 的联系人存储

use super::model::{Contact, ContactPayload};
use super::repository::ContactRepository;
use crate::core::error::CoreError;
use async_trait::async_trait;
use sqlx::postgres::PgPool;

const CONTACT_COLUMNS: &str =
    "id, user_id, first_name, last_name, email, phone, birthday, notes";

#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turn free text into an ILIKE pattern that matches it literally.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, owner: i32, payload: ContactPayload) -> Result<Contact, CoreError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "INSERT INTO contacts (user_id, first_name, last_name, email, phone, birthday, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            CONTACT_COLUMNS
        ))
        .bind(owner)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.birthday)
        .bind(&payload.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn list(&self, owner: i32, query: &str) -> Result<Vec<Contact>, CoreError> {
        let contacts = if query.is_empty() {
            sqlx::query_as::<_, Contact>(&format!(
                "SELECT {} FROM contacts WHERE user_id = $1 ORDER BY id",
                CONTACT_COLUMNS
            ))
            .bind(owner)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Contact>(&format!(
                "SELECT {} FROM contacts \
                 WHERE user_id = $1 \
                   AND (first_name ILIKE $2 ESCAPE '\\' \
                        OR last_name ILIKE $2 ESCAPE '\\' \
                        OR email ILIKE $2 ESCAPE '\\') \
                 ORDER BY id",
                CONTACT_COLUMNS
            ))
            .bind(owner)
            .bind(contains_pattern(query))
            .fetch_all(&self.pool)
            .await?
        };

        Ok(contacts)
    }

    async fn get(&self, owner: i32, id: i32) -> Result<Option<Contact>, CoreError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "SELECT {} FROM contacts WHERE id = $1 AND user_id = $2",
            CONTACT_COLUMNS
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn update(
        &self,
        owner: i32,
        id: i32,
        payload: ContactPayload,
    ) -> Result<Option<Contact>, CoreError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "UPDATE contacts \
             SET first_name = $1, last_name = $2, email = $3, phone = $4, birthday = $5, notes = $6 \
             WHERE id = $7 AND user_id = $8 \
             RETURNING {}",
            CONTACT_COLUMNS
        ))
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.birthday)
        .bind(&payload.notes)
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn delete(&self, owner: i32, id: i32) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
