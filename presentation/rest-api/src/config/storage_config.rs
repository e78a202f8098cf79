use std::env;
use std::sync::Arc;

use anyhow::{Context, bail};
use business::domain::storage::KeyValueStorage;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::key_value::file::KeyValueStorageFile;
use persistence::key_value::postgres::KeyValueStoragePostgres;

/// Where the cart snapshot is persisted
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    File {
        path: String,
    },
    Postgres {
        database_url: String,
        migrations_path: String,
    },
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "file" or "postgres" (default: "file")
    /// - CART_STORAGE_PATH: JSON file for the file backend (default: "cart-storage.json")
    /// - DATABASE_URL: PostgreSQL connection string (required for postgres)
    /// - MIGRATIONS_PATH: SQL migrations directory (default: "./infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("STORAGE_BACKEND").ok(),
            env::var("CART_STORAGE_PATH").ok(),
            env::var("DATABASE_URL").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_values(
        backend: Option<String>,
        path: Option<String>,
        database_url: Option<String>,
        migrations_path: Option<String>,
    ) -> anyhow::Result<Self> {
        match backend.as_deref().map(str::trim).unwrap_or("file") {
            "file" => Ok(Self::File {
                path: path.unwrap_or_else(|| "cart-storage.json".to_string()),
            }),
            "postgres" => Ok(Self::Postgres {
                database_url: database_url
                    .context("DATABASE_URL must be set for the postgres storage backend")?,
                migrations_path: migrations_path
                    .unwrap_or_else(|| "./infrastructure/persistence/migrations".to_string()),
            }),
            other => bail!("Unknown STORAGE_BACKEND: {}", other),
        }
    }
}

/// Builds the key-value storage adapter for the configured backend
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<Arc<dyn KeyValueStorage>> {
    match config {
        StorageConfig::File { path } => {
            tracing::info!("Using file storage at {}", path);
            Ok(Arc::new(KeyValueStorageFile::new(path.as_str())))
        }
        StorageConfig::Postgres {
            database_url,
            migrations_path,
        } => {
            tracing::info!("Using postgres storage");
            let pool = create_postgres_pool(&DatabaseConfig::new(database_url.clone())).await?;
            run_migrations(&pool, migrations_path).await?;
            Ok(Arc::new(KeyValueStoragePostgres::new(pool)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_file_backend() {
        let config = StorageConfig::from_values(None, None, None, None).unwrap();

        assert_eq!(
            config,
            StorageConfig::File {
                path: "cart-storage.json".to_string()
            }
        );
    }

    #[test]
    fn should_require_database_url_for_postgres() {
        let result = StorageConfig::from_values(Some("postgres".to_string()), None, None, None);

        assert!(result.is_err());
    }

    #[test]
    fn should_build_postgres_config() {
        let config = StorageConfig::from_values(
            Some("postgres".to_string()),
            None,
            Some("postgres://cart@localhost/cart".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(
            config,
            StorageConfig::Postgres {
                database_url: "postgres://cart@localhost/cart".to_string(),
                migrations_path: "./infrastructure/persistence/migrations".to_string(),
            }
        );
    }

    #[test]
    fn should_reject_unknown_backend() {
        let result = StorageConfig::from_values(Some("redis".to_string()), None, None, None);

        assert!(result.is_err());
    }
}
