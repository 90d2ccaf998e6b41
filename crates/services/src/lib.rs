#![forbid(unsafe_code)]

pub mod app_services;
pub mod card_service;
pub mod error;
pub mod note_service;
pub mod pastpaper_service;
pub mod progress_service;
pub mod quiz_service;
pub mod quiz_session;
pub mod study_session;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use card_service::CardService;
pub use error::{
    AppServicesError, CardServiceError, NoteServiceError, PaperServiceError,
    ProgressServiceError, QuizServiceError, QuizSessionError, StudySessionError,
};
pub use note_service::{NoteExport, NoteService, AUTO_SUMMARY_SENTENCES};
pub use pastpaper_service::PastPaperService;
pub use progress_service::{ProgressService, SubjectProgress};
pub use quiz_service::QuizService;
pub use quiz_session::{AnswerFeedback, QuizSession, QuizSessionState};
pub use study_session::{StudyPhase, StudySession};
