use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use moodcast_core::LAST_RESULT_KEY;

use crate::error::StorageError;
use crate::traits::ResultPointerStore;

/// Pointer store backed by a small JSON file:
///
/// ```json
/// { "mw:last-result": "<token>" }
/// ```
///
/// A missing file means no pointer. Saves write a sibling temp file and
/// rename it over the target, so readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, message: impl Into<String>) -> StorageError {
        StorageError::Corrupt {
            path: self.path.clone(),
            message: message.into(),
        }
    }
}

impl ResultPointerStore for FileStore {
    fn load_last(&self) -> Result<Option<String>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let value: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| self.corrupt(e.to_string()))?;
        let obj = value
            .as_object()
            .ok_or_else(|| self.corrupt("expected a JSON object"))?;

        match obj.get(LAST_RESULT_KEY) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(token)) if token.is_empty() => Ok(None),
            Some(serde_json::Value::String(token)) => Ok(Some(token.clone())),
            Some(_) => Err(self.corrupt(format!("'{}' is not a string", LAST_RESULT_KEY))),
        }
    }

    fn save_last(&self, token: &str) -> Result<(), StorageError> {
        if token.is_empty() {
            return Err(StorageError::EmptyToken);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let body = serde_json::json!({ LAST_RESULT_KEY: token }).to_string();
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, body).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), "saved last result pointer");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
