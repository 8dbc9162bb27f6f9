use std::sync::Mutex;

use crate::error::StorageError;
use crate::traits::ResultPointerStore;

/// In-process pointer store, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultPointerStore for MemoryStore {
    fn load_last(&self) -> Result<Option<String>, StorageError> {
        let token = self.token.lock().unwrap_or_else(|e| e.into_inner());
        Ok(token.clone())
    }

    fn save_last(&self, token: &str) -> Result<(), StorageError> {
        if token.is_empty() {
            return Err(StorageError::EmptyToken);
        }
        let mut slot = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        Ok(())
    }
}
