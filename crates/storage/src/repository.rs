use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::warn;
use thiserror::Error;

use study_core::model::StudyDocument;

use crate::document::DocumentRecord;

/// Key under which the whole study document is persisted.
pub const DOCUMENT_KEY: &str = "studyhub_data";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors surfaced by storage backends.
///
/// Read failures are absorbed by [`DocumentRepository::load`], which falls
/// back to the initial document. Write failures are not locally recoverable
/// (the in-memory and persisted states diverge) and callers should treat
/// them as fatal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

//
// ─── KEY-VALUE STORE ───────────────────────────────────────────────────────────
//

/// Contract for a durable string key-value store.
///
/// Values are opaque serialized payloads; one key holds one document.
pub trait KeyValueStore: Send + Sync {
    /// Reads the payload stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably writes `payload` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the payload cannot be written.
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        guard.insert(key.to_owned(), payload.to_owned());
        Ok(())
    }
}

//
// ─── DOCUMENT REPOSITORY ───────────────────────────────────────────────────────
//

/// Loads and saves the study document through a key-value backend.
///
/// `load` never fails: a missing key, unreadable payload, unsupported
/// version, or invariant violation all fall back to the freshly initialized
/// document, so callers always have a usable aggregate.
#[derive(Clone)]
pub struct DocumentRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl DocumentRepository {
    /// Creates a repository over `store` using the standard document key.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DOCUMENT_KEY)
    }

    /// Creates a repository persisting under a custom key.
    #[must_use]
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Writes the initial document iff nothing is stored yet.
    ///
    /// Returns `true` when this call seeded the store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or written.
    pub fn ensure_initialized(&self) -> Result<bool, StorageError> {
        if self.store.read(&self.key)?.is_some() {
            return Ok(false);
        }
        self.save(&StudyDocument::initial())?;
        Ok(true)
    }

    /// Loads the persisted document, falling back to the initial document on
    /// any read or decode failure.
    #[must_use]
    pub fn load(&self) -> StudyDocument {
        let payload = match self.store.read(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return StudyDocument::initial(),
            Err(err) => {
                warn!("failed to read study document, starting fresh: {err}");
                return StudyDocument::initial();
            }
        };

        match DocumentRecord::decode(&payload) {
            Ok(document) => document,
            Err(err) => {
                warn!("discarding unreadable study document: {err}");
                StudyDocument::initial()
            }
        }
    }

    /// Persists the whole document synchronously.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backend write fails.
    pub fn save(&self, document: &StudyDocument) -> Result<(), StorageError> {
        let payload = DocumentRecord::from_document(document)
            .encode()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.write(&self.key, &payload)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{Note, NoteId, Subject};
    use study_core::time::fixed_now;

    fn repo() -> DocumentRepository {
        DocumentRepository::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn load_without_data_returns_initial() {
        assert_eq!(repo().load(), StudyDocument::initial());
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = repo();
        let mut doc = StudyDocument::initial();
        let note = Note::new(NoteId::new(), "photosynthesis", fixed_now()).unwrap();
        doc.subject_mut(Subject::EconEdexcel).add_note(note);

        repo.save(&doc).unwrap();
        assert_eq!(repo.load(), doc);
    }

    #[test]
    fn load_falls_back_on_garbage_payload() {
        let store = Arc::new(InMemoryStore::new());
        store.write(DOCUMENT_KEY, "{{{ definitely not json").unwrap();

        let repo = DocumentRepository::new(store);
        assert_eq!(repo.load(), StudyDocument::initial());
    }

    #[test]
    fn ensure_initialized_seeds_once() {
        let repo = repo();
        assert!(repo.ensure_initialized().unwrap());
        assert!(!repo.ensure_initialized().unwrap());
        assert_eq!(repo.load(), StudyDocument::initial());
    }

    #[test]
    fn ensure_initialized_keeps_existing_data() {
        let repo = repo();
        let mut doc = StudyDocument::initial();
        doc.progress_mut(Subject::MathsOcr).record(4, 4).unwrap();
        repo.save(&doc).unwrap();

        assert!(!repo.ensure_initialized().unwrap());
        assert_eq!(repo.load().progress(Subject::MathsOcr).mastery(), 100);
    }
}
