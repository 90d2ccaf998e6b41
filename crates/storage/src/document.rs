//! Persisted shape of the study document.
//!
//! The record types mirror the domain model so the repository can
//! serialize/deserialize without leaking storage concerns into the domain
//! layer. Mapping a record back into domain types re-validates every
//! invariant; a record that fails validation is treated like any other
//! unreadable payload.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use study_core::model::{
    CardError, CardId, Deck, DeckError, DeckId, Flashcard, Note, NoteError, NoteId, PaperError,
    PaperId, PastPaper, ProgressError, ProgressRecord, Question, QuestionId, Quiz, QuizError,
    QuizId, StudyDocument, Subject, SubjectData, SubjectTable,
};

/// Version written into every persisted document.
pub const DOCUMENT_VERSION: u32 = 1;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Why a persisted payload could not be turned into a domain document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentDecodeError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported document version: {0}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Note(#[from] NoteError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Card(#[from] CardError),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Paper(#[from] PaperError),

    #[error(transparent)]
    Progress(#[from] ProgressError),
}

//
// ─── ENTITY RECORDS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NoteRecord {
    id: NoteId,
    text: String,
    created: DateTime<Utc>,
}

impl NoteRecord {
    fn from_note(note: &Note) -> Self {
        Self {
            id: note.id(),
            text: note.text().to_owned(),
            created: note.created_at(),
        }
    }

    fn into_note(self) -> Result<Note, NoteError> {
        Note::new(self.id, self.text, self.created)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionRecord {
    id: QuestionId,
    #[serde(rename = "q")]
    text: String,
    choices: Vec<String>,
    answer: String,
}

impl QuestionRecord {
    fn from_question(question: &Question) -> Self {
        Self {
            id: question.id(),
            text: question.text().to_owned(),
            choices: question.choices().to_vec(),
            answer: question.answer().to_owned(),
        }
    }

    fn into_question(self) -> Result<Question, QuizError> {
        Question::new(self.id, self.text, self.choices, self.answer)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuizRecord {
    id: QuizId,
    title: String,
    questions: Vec<QuestionRecord>,
}

impl QuizRecord {
    fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id(),
            title: quiz.title().to_owned(),
            questions: quiz.questions().iter().map(QuestionRecord::from_question).collect(),
        }
    }

    fn into_quiz(self) -> Result<Quiz, QuizError> {
        let questions = self
            .questions
            .into_iter()
            .map(QuestionRecord::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Quiz::new(self.id, self.title, questions)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CardRecord {
    id: CardId,
    front: String,
    back: String,
    #[serde(rename = "nextDue")]
    next_due: DateTime<Utc>,
    #[serde(rename = "interval")]
    interval_days: u32,
    ease: f64,
}

impl CardRecord {
    fn from_card(card: &Flashcard) -> Self {
        Self {
            id: card.id(),
            front: card.front().to_owned(),
            back: card.back().to_owned(),
            next_due: card.next_due(),
            interval_days: card.interval_days(),
            ease: card.ease(),
        }
    }

    fn into_card(self) -> Result<Flashcard, CardError> {
        Flashcard::from_persisted(
            self.id,
            self.front,
            self.back,
            self.next_due,
            self.interval_days,
            self.ease,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeckRecord {
    id: DeckId,
    name: String,
    cards: Vec<CardRecord>,
}

impl DeckRecord {
    fn from_deck(deck: &Deck) -> Self {
        Self {
            id: deck.id(),
            name: deck.name().to_owned(),
            cards: deck.cards().iter().map(CardRecord::from_card).collect(),
        }
    }

    fn into_deck(self) -> Result<Deck, DocumentDecodeError> {
        let cards = self
            .cards
            .into_iter()
            .map(CardRecord::into_card)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Deck::from_persisted(self.id, self.name, cards)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PaperRecord {
    id: PaperId,
    text: String,
    created: DateTime<Utc>,
}

impl PaperRecord {
    fn from_paper(paper: &PastPaper) -> Self {
        Self {
            id: paper.id(),
            text: paper.text().to_owned(),
            created: paper.created_at(),
        }
    }

    fn into_paper(self) -> Result<PastPaper, PaperError> {
        PastPaper::new(self.id, self.text, self.created)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProgressStateRecord {
    attempts: u32,
    correct: u32,
    mastery: u32,
}

impl ProgressStateRecord {
    fn from_progress(progress: &ProgressRecord) -> Self {
        Self {
            attempts: progress.attempts(),
            correct: progress.correct(),
            mastery: progress.mastery(),
        }
    }

    fn into_progress(self) -> Result<ProgressRecord, ProgressError> {
        ProgressRecord::from_persisted(self.attempts, self.correct, self.mastery)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SubjectDataRecord {
    notes: Vec<NoteRecord>,
    quizzes: Vec<QuizRecord>,
    decks: Vec<DeckRecord>,
    pastpapers: Vec<PaperRecord>,
}

impl SubjectDataRecord {
    fn from_subject_data(data: &SubjectData) -> Self {
        Self {
            notes: data.notes().iter().map(NoteRecord::from_note).collect(),
            quizzes: data.quizzes().iter().map(QuizRecord::from_quiz).collect(),
            decks: data.decks().iter().map(DeckRecord::from_deck).collect(),
            pastpapers: data.pastpapers().iter().map(PaperRecord::from_paper).collect(),
        }
    }

    fn into_subject_data(self) -> Result<SubjectData, DocumentDecodeError> {
        let notes = self
            .notes
            .into_iter()
            .map(NoteRecord::into_note)
            .collect::<Result<Vec<_>, _>>()?;
        let quizzes = self
            .quizzes
            .into_iter()
            .map(QuizRecord::into_quiz)
            .collect::<Result<Vec<_>, _>>()?;
        let decks = self
            .decks
            .into_iter()
            .map(DeckRecord::into_deck)
            .collect::<Result<Vec<_>, _>>()?;
        let pastpapers = self
            .pastpapers
            .into_iter()
            .map(PaperRecord::into_paper)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SubjectData::from_parts(notes, quizzes, decks, pastpapers))
    }
}

//
// ─── DOCUMENT RECORD ───────────────────────────────────────────────────────────
//

/// The JSON-shaped top-level document, keyed by subject id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    version: u32,
    subjects: BTreeMap<Subject, SubjectDataRecord>,
    progress: BTreeMap<Subject, ProgressStateRecord>,
}

impl DocumentRecord {
    #[must_use]
    pub fn from_document(document: &StudyDocument) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            subjects: document
                .subjects()
                .map(|(subject, data)| (subject, SubjectDataRecord::from_subject_data(data)))
                .collect(),
            progress: document
                .progress_entries()
                .map(|(subject, progress)| (subject, ProgressStateRecord::from_progress(progress)))
                .collect(),
        }
    }

    /// Maps the record back into a domain document.
    ///
    /// Subjects absent from the payload come back empty; the subject set is
    /// closed, so extra keys cannot occur (they fail deserialization).
    ///
    /// # Errors
    ///
    /// Returns `DocumentDecodeError` if the version is unsupported or any
    /// entity fails validation.
    pub fn into_document(self) -> Result<StudyDocument, DocumentDecodeError> {
        if self.version != DOCUMENT_VERSION {
            return Err(DocumentDecodeError::UnsupportedVersion(self.version));
        }

        let mut subjects = SubjectTable::<SubjectData>::default();
        for (subject, record) in self.subjects {
            *subjects.get_mut(subject) = record.into_subject_data()?;
        }

        let mut progress = SubjectTable::<ProgressRecord>::default();
        for (subject, record) in self.progress {
            *progress.get_mut(subject) = record.into_progress()?;
        }

        Ok(StudyDocument::from_parts(subjects, progress))
    }

    /// Parses a serialized payload into a domain document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentDecodeError` for malformed JSON, an unsupported
    /// version, or invariant violations.
    pub fn decode(payload: &str) -> Result<StudyDocument, DocumentDecodeError> {
        let record: DocumentRecord = serde_json::from_str(payload)?;
        record.into_document()
    }

    /// Serializes the record to its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
