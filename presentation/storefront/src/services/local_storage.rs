use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorefrontError;
use crate::services::contracts::LocalStorage;

/// Local storage persisted as one `<key>.json` file per key.
pub struct FileLocalStorage {
    dir: PathBuf,
}

impl FileLocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

#[async_trait]
impl LocalStorage for FileLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<Value>, StorefrontError> {
        match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<(), StorefrontError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec(&value)?;
        tokio::fs::write(self.path_for(key), bytes).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorefrontError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scratch_storage() -> FileLocalStorage {
        FileLocalStorage::new(std::env::temp_dir().join(format!(
            "storefront-test-{}",
            uuid::Uuid::new_v4()
        )))
    }

    #[tokio::test]
    async fn should_return_none_for_missing_key() {
        let storage = scratch_storage();

        let value = storage.get_item("ProductCollection").await.unwrap();

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn should_read_back_stored_value() {
        let storage = scratch_storage();
        let value = json!([{ "id": 1, "name": "Nike Shoes" }]);

        storage
            .set_item("ProductCollection", value.clone())
            .await
            .unwrap();
        let stored = storage.get_item("ProductCollection").await.unwrap();

        assert_eq!(stored, Some(value));
        tokio::fs::remove_dir_all(storage.dir()).await.unwrap();
    }

    #[tokio::test]
    async fn should_forget_removed_key() {
        let storage = scratch_storage();
        storage.set_item("CartItemCollection", json!([])).await.unwrap();

        storage.remove_item("CartItemCollection").await.unwrap();
        storage.remove_item("CartItemCollection").await.unwrap();

        assert!(storage.get_item("CartItemCollection").await.unwrap().is_none());
        tokio::fs::remove_dir_all(storage.dir()).await.unwrap();
    }

    #[test]
    fn should_keep_keys_inside_storage_dir() {
        let storage = FileLocalStorage::new("/tmp/store");

        assert_eq!(
            storage.path_for("../etc/passwd"),
            PathBuf::from("/tmp/store/___etc_passwd.json")
        );
    }
}
