use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Durable string key-value storage, the server-side stand-in for browser local storage.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}
