use study_core::model::{Note, NoteError, NoteId, Subject};
use study_core::text;
use study_core::Clock;

use storage::DocumentRepository;

use crate::error::NoteServiceError;

/// Number of sentences kept by the note auto-summary.
pub const AUTO_SUMMARY_SENTENCES: usize = 3;

/// Raw note text handed to the export collaborator.
///
/// The core performs no file I/O; the view layer turns this into a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteExport {
    pub file_name: String,
    pub contents: String,
}

/// Orchestrates note creation, deletion, summarizing, and export.
#[derive(Clone)]
pub struct NoteService {
    clock: Clock,
    repo: DocumentRepository,
}

impl NoteService {
    #[must_use]
    pub fn new(clock: Clock, repo: DocumentRepository) -> Self {
        Self { clock, repo }
    }

    /// Creates a note for the subject and persists it.
    ///
    /// # Errors
    ///
    /// Returns `NoteServiceError::Note` for blank text.
    /// Returns `NoteServiceError::Storage` if persistence fails.
    pub fn create_note(&self, subject: Subject, text: &str) -> Result<Note, NoteServiceError> {
        let note = Note::new(NoteId::new(), text, self.clock.now())?;

        let mut doc = self.repo.load();
        doc.subject_mut(subject).add_note(note.clone());
        self.repo.save(&doc)?;
        Ok(note)
    }

    /// Deletes a note by id and persists the change.
    ///
    /// # Errors
    ///
    /// Returns `NoteServiceError::NotFound` for a stale id.
    /// Returns `NoteServiceError::Storage` if persistence fails.
    pub fn delete_note(&self, subject: Subject, id: NoteId) -> Result<(), NoteServiceError> {
        let mut doc = self.repo.load();
        doc.subject_mut(subject)
            .remove_note(id)
            .ok_or(NoteServiceError::NotFound)?;
        self.repo.save(&doc)?;
        Ok(())
    }

    /// Lists the subject's notes, newest first.
    #[must_use]
    pub fn list_notes(&self, subject: Subject) -> Vec<Note> {
        self.repo.load().subject(subject).notes().to_vec()
    }

    /// Shortens draft note text to its first few sentences.
    ///
    /// # Errors
    ///
    /// Returns `NoteServiceError::Note` for blank input.
    pub fn summarize_draft(&self, text: &str) -> Result<String, NoteServiceError> {
        if text.trim().is_empty() {
            return Err(NoteError::EmptyText.into());
        }
        Ok(text::summarize(text, AUTO_SUMMARY_SENTENCES))
    }

    /// Hands a stored note's raw text to the export collaborator.
    ///
    /// # Errors
    ///
    /// Returns `NoteServiceError::NotFound` for a stale id.
    pub fn export_note(&self, subject: Subject, id: NoteId) -> Result<NoteExport, NoteServiceError> {
        let doc = self.repo.load();
        let note = doc
            .subject(subject)
            .note(id)
            .ok_or(NoteServiceError::NotFound)?;

        Ok(NoteExport {
            file_name: format!("{}-notes.txt", subject.id()),
            contents: note.text().to_owned(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
