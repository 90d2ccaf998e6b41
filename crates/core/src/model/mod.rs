mod document;
mod flashcard;
mod ids;
mod note;
mod pastpaper;
mod progress;
mod quiz;
mod subject;

pub use document::{StudyDocument, SubjectData};
pub use flashcard::{
    CardError, Deck, DeckError, Flashcard, DEFAULT_DECK_NAME, INITIAL_EASE, INITIAL_INTERVAL_DAYS,
};
pub use ids::{CardId, DeckId, NoteId, PaperId, QuestionId, QuizId};
pub use note::{Note, NoteError};
pub use pastpaper::{PaperError, PastPaper};
pub use progress::{ProgressError, ProgressRecord};
pub use quiz::{
    Question, QuestionDraft, Quiz, QuizError, CHOICES_PER_QUESTION, DEFAULT_QUIZ_TITLE,
    PLACEHOLDER_CHOICE,
};
pub use subject::{ParseSubjectError, Subject, SubjectTable};
