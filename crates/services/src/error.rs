//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use study_core::model::{CardError, NoteError, PaperError, ProgressError, QuizError};

/// Errors emitted by `NoteService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NoteServiceError {
    #[error("note not found")]
    NotFound,
    #[error(transparent)]
    Note(#[from] NoteError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizService` quiz management.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("quiz not found")]
    NotFound,
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by quiz play sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("no quizzes available")]
    NoQuizzes,
    #[error("quiz not found")]
    NotFound,
    #[error("quiz session already complete")]
    Completed,
    #[error("quiz session is not complete yet")]
    NotComplete,
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `CardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CardServiceError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by flashcard study sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudySessionError {
    #[error("no cards available to study")]
    NoCards,
    #[error("card no longer exists")]
    CardNotFound,
    #[error("study session already complete")]
    Completed,
    #[error("reveal the card before rating it")]
    NotRevealed,
    #[error("card already revealed")]
    AlreadyRevealed,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PastPaperService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PaperServiceError {
    #[error("past paper not found")]
    NotFound,
    #[error(transparent)]
    Paper(#[from] PaperError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
