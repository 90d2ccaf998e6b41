use study_core::model::{PaperError, PaperId, PastPaper, Subject};
use study_core::text;
use study_core::Clock;

use storage::DocumentRepository;

use crate::error::PaperServiceError;

/// Orchestrates past-paper storage and keyword analysis.
#[derive(Clone)]
pub struct PastPaperService {
    clock: Clock,
    repo: DocumentRepository,
}

impl PastPaperService {
    #[must_use]
    pub fn new(clock: Clock, repo: DocumentRepository) -> Self {
        Self { clock, repo }
    }

    /// Stores pasted past-paper text for the subject.
    ///
    /// # Errors
    ///
    /// Returns `PaperServiceError::Paper` for blank text.
    /// Returns `PaperServiceError::Storage` if persistence fails.
    pub fn save_paper(&self, subject: Subject, text: &str) -> Result<PastPaper, PaperServiceError> {
        let paper = PastPaper::new(PaperId::new(), text, self.clock.now())?;

        let mut doc = self.repo.load();
        doc.subject_mut(subject).add_paper(paper.clone());
        self.repo.save(&doc)?;
        Ok(paper)
    }

    /// Deletes a past paper by id and persists the change.
    ///
    /// # Errors
    ///
    /// Returns `PaperServiceError::NotFound` for a stale id.
    /// Returns `PaperServiceError::Storage` if persistence fails.
    pub fn delete_paper(&self, subject: Subject, id: PaperId) -> Result<(), PaperServiceError> {
        let mut doc = self.repo.load();
        doc.subject_mut(subject)
            .remove_paper(id)
            .ok_or(PaperServiceError::NotFound)?;
        self.repo.save(&doc)?;
        Ok(())
    }

    /// Lists the subject's past papers, newest first.
    #[must_use]
    pub fn list_papers(&self, subject: Subject) -> Vec<PastPaper> {
        self.repo.load().subject(subject).pastpapers().to_vec()
    }

    /// Extracts keywords from draft past-paper text.
    ///
    /// # Errors
    ///
    /// Returns `PaperServiceError::Paper` for blank input.
    pub fn analyze_text(&self, text: &str) -> Result<Vec<String>, PaperServiceError> {
        if text.trim().is_empty() {
            return Err(PaperError::EmptyText.into());
        }
        Ok(text::extract_topics(text))
    }

    /// Extracts keywords from a stored past paper.
    ///
    /// # Errors
    ///
    /// Returns `PaperServiceError::NotFound` for a stale id.
    pub fn analyze_paper(
        &self,
        subject: Subject,
        id: PaperId,
    ) -> Result<Vec<String>, PaperServiceError> {
        let doc = self.repo.load();
        let paper = doc
            .subject(subject)
            .paper(id)
            .ok_or(PaperServiceError::NotFound)?;
        Ok(text::extract_topics(paper.text()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
