use std::path::PathBuf;

/// All errors that can be returned by a `ResultPointerStore` implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a pointer object.
    #[error("corrupt pointer file {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// An empty token was offered for saving.
    #[error("refusing to store an empty token")]
    EmptyToken,
}
