use super::KeyValueStore;
use crate::StorageError;

// NoopStore for when persistence is not needed
pub struct NoopStore;

#[async_trait::async_trait]
impl KeyValueStore for NoopStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<(), StorageError> {
        Ok(())
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
