use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::storage::KeyValueStorage;

use super::entity::LocalStorageEntity;

pub struct KeyValueStoragePostgres {
    pool: PgPool,
}

impl KeyValueStoragePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStorage for KeyValueStoragePostgres {
    async fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, LocalStorageEntity>(
            "SELECT value FROM local_storage WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.value))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO local_storage (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
