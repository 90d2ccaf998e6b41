#![forbid(unsafe_code)]

pub mod document;
pub mod json_file;
pub mod repository;

pub use document::{DocumentDecodeError, DocumentRecord, DOCUMENT_VERSION};
pub use json_file::JsonFileStore;
pub use repository::{
    DocumentRepository, InMemoryStore, KeyValueStore, StorageError, DOCUMENT_KEY,
};
