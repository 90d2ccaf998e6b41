use rand::seq::SliceRandom;

use study_core::model::{
    ProgressRecord, Question, QuestionDraft, QuestionId, Quiz, QuizError, QuizId, Subject,
};

use storage::DocumentRepository;

use crate::error::{QuizServiceError, QuizSessionError};
use crate::quiz_session::QuizSession;

/// Orchestrates quiz authoring, play sessions, and score commits.
#[derive(Clone)]
pub struct QuizService {
    repo: DocumentRepository,
}

impl QuizService {
    #[must_use]
    pub fn new(repo: DocumentRepository) -> Self {
        Self { repo }
    }

    /// Parses authoring text into a quiz and persists it.
    ///
    /// Each question's choices are shuffled once here; the stored order is
    /// what every later play session presents.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` for blank input
    /// (`QuizError::EmptyInput`) or input with no usable lines
    /// (`QuizError::NoValidQuestions`).
    /// Returns `QuizServiceError::Storage` if persistence fails.
    pub fn create_quiz(
        &self,
        subject: Subject,
        title: &str,
        raw: &str,
    ) -> Result<Quiz, QuizServiceError> {
        if raw.trim().is_empty() {
            return Err(QuizError::EmptyInput.into());
        }

        let mut rng = rand::rng();
        let mut questions = Vec::new();
        for draft in QuestionDraft::parse_block(raw) {
            let mut choices = draft.choices();
            choices.shuffle(&mut rng);
            let (text, correct) = draft.into_parts();
            questions.push(Question::new(QuestionId::new(), text, choices, correct)?);
        }

        let quiz = Quiz::new(QuizId::new(), title, questions)?;

        let mut doc = self.repo.load();
        doc.subject_mut(subject).add_quiz(quiz.clone());
        self.repo.save(&doc)?;
        Ok(quiz)
    }

    /// Deletes a quiz by id and persists the change.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::NotFound` for a stale id.
    /// Returns `QuizServiceError::Storage` if persistence fails.
    pub fn delete_quiz(&self, subject: Subject, id: QuizId) -> Result<(), QuizServiceError> {
        let mut doc = self.repo.load();
        doc.subject_mut(subject)
            .remove_quiz(id)
            .ok_or(QuizServiceError::NotFound)?;
        self.repo.save(&doc)?;
        Ok(())
    }

    /// Lists the subject's quizzes, newest first.
    #[must_use]
    pub fn list_quizzes(&self, subject: Subject) -> Vec<Quiz> {
        self.repo.load().subject(subject).quizzes().to_vec()
    }

    /// Starts a play session for a specific quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::NotFound` for a stale id.
    pub fn start_session(
        &self,
        subject: Subject,
        quiz_id: QuizId,
    ) -> Result<QuizSession, QuizSessionError> {
        let doc = self.repo.load();
        let quiz = doc
            .subject(subject)
            .quiz(quiz_id)
            .ok_or(QuizSessionError::NotFound)?;
        Ok(QuizSession::new(subject, quiz))
    }

    /// Starts a play session for the most recently created quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::NoQuizzes` if the subject has none.
    pub fn start_latest_session(&self, subject: Subject) -> Result<QuizSession, QuizSessionError> {
        let doc = self.repo.load();
        let quiz = doc
            .subject(subject)
            .latest_quiz()
            .ok_or(QuizSessionError::NoQuizzes)?;
        Ok(QuizSession::new(subject, quiz))
    }

    /// Commits a completed session's score into the subject's progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::NotComplete` if questions remain.
    /// Returns `QuizSessionError::Storage` if persistence fails.
    pub fn finish_session(
        &self,
        session: &QuizSession,
    ) -> Result<ProgressRecord, QuizSessionError> {
        if !session.is_complete() {
            return Err(QuizSessionError::NotComplete);
        }

        let attempts = u32::try_from(session.question_count()).unwrap_or(u32::MAX);

        let mut doc = self.repo.load();
        doc.progress_mut(session.subject())
            .record(attempts, session.score())?;
        self.repo.save(&doc)?;
        Ok(*doc.progress(session.subject()))
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
    use study_core::model::{CHOICES_PER_QUESTION, DEFAULT_QUIZ_TITLE, PLACEHOLDER_CHOICE};

    fn service() -> QuizService {
        QuizService::new(DocumentRepository::new(Arc::new(InMemoryStore::new())))
    }

    #[test]
    fn create_quiz_parses_and_shuffles_choices() {
        let service = service();
        let quiz = service
            .create_quiz(Subject::MathsOcr, "Arithmetic", "What is 2+2? | 4 | 3 ; 5 ; 22")
            .unwrap();

        assert_eq!(quiz.question_count(), 1);
        let question = &quiz.questions()[0];
        assert_eq!(question.answer(), "4");
        assert_eq!(question.choices().len(), CHOICES_PER_QUESTION);

        let mut sorted: Vec<&str> = question.choices().iter().map(String::as_str).collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["22", "3", "4", "5"]);
    }

    #[test]
    fn create_quiz_pads_missing_wrongs() {
        let service = service();
        let quiz = service
            .create_quiz(Subject::CsOcr, "", "What does CPU stand for? | Central Processing Unit")
            .unwrap();

        assert_eq!(quiz.title(), DEFAULT_QUIZ_TITLE);
        let question = &quiz.questions()[0];
        let placeholders = question
            .choices()
            .iter()
            .filter(|c| c.as_str() == PLACEHOLDER_CHOICE)
            .count();
        assert_eq!(placeholders, 3);
    }

    #[test]
    fn create_quiz_rejects_blank_and_unparseable_input() {
        let service = service();

        let err = service.create_quiz(Subject::MathsOcr, "T", "  ").unwrap_err();
        assert!(matches!(err, QuizServiceError::Quiz(QuizError::EmptyInput)));

        let err = service
            .create_quiz(Subject::MathsOcr, "T", "Bad line with one field")
            .unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Quiz(QuizError::NoValidQuestions)
        ));
        assert!(service.list_quizzes(Subject::MathsOcr).is_empty());
    }

    #[test]
    fn quizzes_list_newest_first() {
        let service = service();
        service
            .create_quiz(Subject::EconEdexcel, "old", "Q1 | a | b")
            .unwrap();
        let newest = service
            .create_quiz(Subject::EconEdexcel, "new", "Q2 | c | d")
            .unwrap();

        let quizzes = service.list_quizzes(Subject::EconEdexcel);
        assert_eq!(quizzes[0].id(), newest.id());
    }

    #[test]
    fn delete_quiz_surfaces_stale_id() {
        let service = service();
        let quiz = service
            .create_quiz(Subject::CsOcr, "T", "Q | a | b")
            .unwrap();
        service.delete_quiz(Subject::CsOcr, quiz.id()).unwrap();
        assert!(matches!(
            service.delete_quiz(Subject::CsOcr, quiz.id()).unwrap_err(),
            QuizServiceError::NotFound
        ));
    }

    #[test]
    fn start_latest_session_requires_a_quiz() {
        let service = service();
        assert!(matches!(
            service.start_latest_session(Subject::MathsOcr).unwrap_err(),
            QuizSessionError::NoQuizzes
        ));

        service
            .create_quiz(Subject::MathsOcr, "only", "Q | a | b")
            .unwrap();
        let session = service.start_latest_session(Subject::MathsOcr).unwrap();
        assert_eq!(session.title(), "only");
    }

    #[test]
    fn finish_session_commits_score_to_progress() {
        let service = service();
        let quiz = service
            .create_quiz(
                Subject::MathsOcr,
                "T",
                "Q1 | a | b\nQ2 | c | d\nQ3 | e | f",
            )
            .unwrap();

        let mut session = service.start_session(Subject::MathsOcr, quiz.id()).unwrap();
        assert!(matches!(
            service.finish_session(&session).unwrap_err(),
            QuizSessionError::NotComplete
        ));

        // two right, one wrong
        session.answer("a").unwrap();
        session.answer("d").unwrap();
        session.answer("e").unwrap();

        let progress = service.finish_session(&session).unwrap();
        assert_eq!(progress.attempts(), 3);
        assert_eq!(progress.correct(), 2);
        assert_eq!(progress.mastery(), 67);
    }
}
