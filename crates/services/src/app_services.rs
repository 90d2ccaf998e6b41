use std::path::PathBuf;
use std::sync::Arc;

use storage::{DocumentRepository, InMemoryStore, JsonFileStore, KeyValueStore};
use study_core::Clock;

use crate::card_service::CardService;
use crate::error::AppServicesError;
use crate::note_service::NoteService;
use crate::pastpaper_service::PastPaperService;
use crate::progress_service::ProgressService;
use crate::quiz_service::QuizService;

/// Bundles every service over one shared store and clock.
///
/// On first run the store is seeded with the initial document (all subjects
/// present, empty lists, zeroed progress); later runs load the existing
/// document unmodified.
#[derive(Clone)]
pub struct AppServices {
    pub notes: NoteService,
    pub quizzes: QuizService,
    pub cards: CardService,
    pub papers: PastPaperService,
    pub progress: ProgressService,
}

impl AppServices {
    /// Opens the JSON-file store under `data_dir` and bootstraps services.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the directory cannot be created
    /// or the first-run document cannot be written.
    pub fn open(data_dir: impl Into<PathBuf>, clock: Clock) -> Result<Self, AppServicesError> {
        let store = JsonFileStore::open(data_dir)?;
        Self::with_store(Arc::new(store), clock)
    }

    /// Bootstraps services over an in-memory store, for tests and prototyping.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the first-run document cannot
    /// be written.
    pub fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::with_store(Arc::new(InMemoryStore::new()), clock)
    }

    /// Bootstraps services over any key-value backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the first-run document cannot
    /// be written.
    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let repo = DocumentRepository::new(store);
        repo.ensure_initialized()?;

        Ok(Self {
            notes: NoteService::new(clock, repo.clone()),
            quizzes: QuizService::new(repo.clone()),
            cards: CardService::new(clock, repo.clone()),
            papers: PastPaperService::new(clock, repo.clone()),
            progress: ProgressService::new(repo),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::Subject;
    use study_core::time::fixed_clock;

    #[test]
    fn services_share_one_document() {
        let app = AppServices::in_memory(fixed_clock()).unwrap();

        app.notes.create_note(Subject::MathsOcr, "note").unwrap();
        app.quizzes
            .create_quiz(Subject::MathsOcr, "T", "Q | a | b")
            .unwrap();
        app.progress.record(Subject::MathsOcr, 1, 1).unwrap();

        assert_eq!(app.notes.list_notes(Subject::MathsOcr).len(), 1);
        assert_eq!(app.quizzes.list_quizzes(Subject::MathsOcr).len(), 1);
        assert_eq!(app.progress.get(Subject::MathsOcr).mastery(), 100);
    }
}
