use sqlx::FromRow;

/// Row of the `local_storage` table.
#[derive(Debug, FromRow)]
pub struct LocalStorageEntity {
    pub value: String,
}
