use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::storage::KeyValueStorage;

/// Key-value storage kept as one JSON object in a local file.
///
/// Writes land in a sibling `.tmp` file that is renamed over the original.
pub struct KeyValueStorageFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl KeyValueStorageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                tracing::error!("Failed to read {}: {}", self.path.display(), err);
                return Err(RepositoryError::Persistence);
            }
        };

        serde_json::from_str(&raw).map_err(|_| RepositoryError::Serialization)
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string_pretty(entries).map_err(|_| RepositoryError::Serialization)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| RepositoryError::Persistence)?;
        }

        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, raw)
            .await
            .map_err(|_| RepositoryError::Persistence)?;
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|err| {
            tracing::error!("Failed to replace {}: {}", self.path.display(), err);
            RepositoryError::Persistence
        })
    }
}

#[async_trait]
impl KeyValueStorage for KeyValueStorageFile {
    async fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = match self.read_all().await {
            Ok(entries) => entries,
            Err(RepositoryError::Serialization) => {
                tracing::warn!(
                    "Replacing unparsable storage file {}",
                    self.path.display()
                );
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_none_for_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorageFile::new(dir.path().join("storage.json"));

        let value = storage.get_item("@RocketShoes:cart").await.unwrap();

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn should_read_back_written_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorageFile::new(dir.path().join("storage.json"));

        storage.set_item("@RocketShoes:cart", "[]").await.unwrap();

        let value = storage.get_item("@RocketShoes:cart").await.unwrap();
        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn should_overwrite_existing_value_and_keep_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = KeyValueStorageFile::new(dir.path().join("storage.json"));

        storage.set_item("theme", "dark").await.unwrap();
        storage.set_item("@RocketShoes:cart", "[]").await.unwrap();
        storage
            .set_item("@RocketShoes:cart", r#"[{"id":1}]"#)
            .await
            .unwrap();

        assert_eq!(
            storage.get_item("@RocketShoes:cart").await.unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
        assert_eq!(
            storage.get_item("theme").await.unwrap().as_deref(),
            Some("dark")
        );
    }

    #[tokio::test]
    async fn should_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        KeyValueStorageFile::new(&path)
            .set_item("@RocketShoes:cart", "[]")
            .await
            .unwrap();
        let reopened = KeyValueStorageFile::new(&path);

        assert_eq!(
            reopened.get_item("@RocketShoes:cart").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn should_report_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        tokio::fs::write(&path, "not json").await.unwrap();
        let storage = KeyValueStorageFile::new(&path);

        let result = storage.get_item("@RocketShoes:cart").await;

        assert!(matches!(result.unwrap_err(), RepositoryError::Serialization));
    }

    #[tokio::test]
    async fn should_recover_from_corrupted_file_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        tokio::fs::write(&path, "{truncated").await.unwrap();
        let storage = KeyValueStorageFile::new(&path);

        storage.set_item("@RocketShoes:cart", "[]").await.unwrap();
        storage
            .set_item("@RocketShoes:cart", r#"[{"id":1}]"#)
            .await
            .unwrap();

        assert_eq!(
            storage.get_item("@RocketShoes:cart").await.unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }
}
