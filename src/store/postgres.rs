use async_trait::async_trait;
use sqlx::PgPool;

use super::{ContactRecord, ContactStore};

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn put(&self, record: &ContactRecord) -> Result<(), String> {
        sqlx::query(
            "INSERT INTO contacts (pk, sk, contact_id, body) VALUES ($1, $2, $3, $4)",
        )
        .bind(&record.pk)
        .bind(&record.sk)
        .bind(record.contact_id)
        .bind(&record.body)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to store contact: {e}"))?;

        Ok(())
    }
}
