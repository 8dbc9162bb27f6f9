//! moodcast-storage: the one piece of persisted state MoodCast keeps.
//!
//! A single key ([`moodcast_core::LAST_RESULT_KEY`]) maps to the most
//! recently viewed result token. Writes are best-effort at the call sites:
//! use [`remember_last`] and [`recent_result_href`], which log failures
//! instead of propagating them.

mod error;
mod file;
mod memory;
mod traits;

pub mod conformance;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::ResultPointerStore;

/// Save `token` as the last result, logging instead of failing.
pub fn remember_last(store: &dyn ResultPointerStore, token: &str) {
    if token.is_empty() {
        return;
    }
    if let Err(e) = store.save_last(token) {
        tracing::warn!(error = %e, "could not remember last result");
    }
}

/// Link to the most recent result, if one is stored.
pub fn recent_result_href(store: &dyn ResultPointerStore) -> Option<String> {
    match store.load_last() {
        Ok(Some(token)) => Some(format!("/result?s={}", token)),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "could not read last result");
            None
        }
    }
}
