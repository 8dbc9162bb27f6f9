use crate::error::StorageError;

/// Storage for the most recent result token.
///
/// Exactly one pointer exists at a time: `save_last` replaces it and
/// `clear` removes it. Implementations must be `Send + Sync` so one store
/// can be shared across request handlers.
pub trait ResultPointerStore: Send + Sync {
    /// The stored token, or `None` if nothing has been saved.
    fn load_last(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored token.
    ///
    /// Returns `Err(StorageError::EmptyToken)` for an empty token.
    fn save_last(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}
