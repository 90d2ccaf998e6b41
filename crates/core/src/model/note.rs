use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::NoteId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NoteError {
    #[error("note text cannot be empty")]
    EmptyText,
}

//
// ─── NOTE ──────────────────────────────────────────────────────────────────────
//

/// A free-text study note attached to a subject.
///
/// Notes are ordered newest-first in their subject and are immutable after
/// creation except for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    text: String,
    created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note with trimmed text.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::EmptyText` if the text is empty or whitespace-only.
    pub fn new(
        id: NoteId,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, NoteError> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(NoteError::EmptyText);
        }

        Ok(Self {
            id,
            text: text.to_owned(),
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> NoteId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
