use study_core::model::{ProgressRecord, Subject};

use storage::DocumentRepository;

use crate::error::ProgressServiceError;

/// One subject's progress, paired with the subject for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectProgress {
    pub subject: Subject,
    pub record: ProgressRecord,
}

/// Tracks quiz performance per subject.
#[derive(Clone)]
pub struct ProgressService {
    repo: DocumentRepository,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: DocumentRepository) -> Self {
        Self { repo }
    }

    /// Accumulates a batch of attempts into the subject's record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Progress` if `correct > attempts`.
    /// Returns `ProgressServiceError::Storage` if persistence fails.
    pub fn record(
        &self,
        subject: Subject,
        attempts: u32,
        correct: u32,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        let mut doc = self.repo.load();
        doc.progress_mut(subject).record(attempts, correct)?;
        self.repo.save(&doc)?;
        Ok(*doc.progress(subject))
    }

    /// Zeroes the subject's record unconditionally.
    ///
    /// Confirmation is the caller's concern; resetting twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if persistence fails.
    pub fn reset(&self, subject: Subject) -> Result<ProgressRecord, ProgressServiceError> {
        let mut doc = self.repo.load();
        doc.progress_mut(subject).reset();
        self.repo.save(&doc)?;
        Ok(*doc.progress(subject))
    }

    /// The subject's current record.
    #[must_use]
    pub fn get(&self, subject: Subject) -> ProgressRecord {
        *self.repo.load().progress(subject)
    }

    /// Progress for one subject, or for all subjects in display order.
    #[must_use]
    pub fn list(&self, filter: Option<Subject>) -> Vec<SubjectProgress> {
        let doc = self.repo.load();
        doc.progress_entries()
            .filter(|(subject, _)| filter.is_none_or(|wanted| wanted == *subject))
            .map(|(subject, record)| SubjectProgress {
                subject,
                record: *record,
            })
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::InMemoryStore;
    use study_core::model::ProgressError;

    fn service() -> ProgressService {
        ProgressService::new(DocumentRepository::new(Arc::new(InMemoryStore::new())))
    }

    #[test]
    fn record_accumulates_across_calls() {
        let service = service();
        service.record(Subject::MathsOcr, 3, 2).unwrap();
        let progress = service.record(Subject::MathsOcr, 3, 1).unwrap();

        assert_eq!(progress.attempts(), 6);
        assert_eq!(progress.correct(), 3);
        assert_eq!(progress.mastery(), 50);
        assert_eq!(service.get(Subject::MathsOcr), progress);
    }

    #[test]
    fn record_rejects_impossible_batches() {
        let err = service().record(Subject::MathsOcr, 2, 3).unwrap_err();
        assert!(matches!(
            err,
            ProgressServiceError::Progress(ProgressError::CorrectExceedsAttempts { .. })
        ));
    }

    #[test]
    fn reset_zeroes_and_is_idempotent() {
        let service = service();
        service.record(Subject::CsOcr, 10, 9).unwrap();

        let once = service.reset(Subject::CsOcr).unwrap();
        let twice = service.reset(Subject::CsOcr).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.attempts(), 0);
        assert_eq!(once.mastery(), 0);
    }

    #[test]
    fn list_returns_all_or_one() {
        let service = service();
        service.record(Subject::EconEdexcel, 4, 4).unwrap();

        let all = service.list(None);
        assert_eq!(all.len(), Subject::ALL.len());

        let one = service.list(Some(Subject::EconEdexcel));
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].subject, Subject::EconEdexcel);
        assert_eq!(one[0].record.mastery(), 100);
    }
}
