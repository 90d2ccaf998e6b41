use crate::model::flashcard::Deck;
use crate::model::ids::{DeckId, NoteId, PaperId, QuizId};
use crate::model::note::Note;
use crate::model::pastpaper::PastPaper;
use crate::model::progress::ProgressRecord;
use crate::model::quiz::Quiz;
use crate::model::subject::{Subject, SubjectTable};

//
// ─── SUBJECT DATA ──────────────────────────────────────────────────────────────
//

/// Everything stored for one subject: notes, quizzes, decks, and past papers.
///
/// All lists keep newest entries first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectData {
    notes: Vec<Note>,
    quizzes: Vec<Quiz>,
    decks: Vec<Deck>,
    pastpapers: Vec<PastPaper>,
}

impl SubjectData {
    /// Rehydrates subject data from persisted storage.
    #[must_use]
    pub fn from_parts(
        notes: Vec<Note>,
        quizzes: Vec<Quiz>,
        decks: Vec<Deck>,
        pastpapers: Vec<PastPaper>,
    ) -> Self {
        Self {
            notes,
            quizzes,
            decks,
            pastpapers,
        }
    }

    // ── Notes ──

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Removes a note by id, returning it if it was present.
    pub fn remove_note(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|n| n.id() == id)?;
        Some(self.notes.remove(index))
    }

    // ── Quizzes ──

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn add_quiz(&mut self, quiz: Quiz) {
        self.quizzes.insert(0, quiz);
    }

    #[must_use]
    pub fn quiz(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id() == id)
    }

    /// The most recently created quiz, if any.
    #[must_use]
    pub fn latest_quiz(&self) -> Option<&Quiz> {
        self.quizzes.first()
    }

    pub fn remove_quiz(&mut self, id: QuizId) -> Option<Quiz> {
        let index = self.quizzes.iter().position(|q| q.id() == id)?;
        Some(self.quizzes.remove(index))
    }

    // ── Decks ──

    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// The singleton study deck, if it has been created.
    #[must_use]
    pub fn default_deck(&self) -> Option<&Deck> {
        self.decks.first()
    }

    pub fn default_deck_mut(&mut self) -> Option<&mut Deck> {
        self.decks.first_mut()
    }

    /// Returns the singleton deck, creating it with `new_id` on first use.
    pub fn ensure_default_deck(&mut self, new_id: DeckId) -> &mut Deck {
        if self.decks.is_empty() {
            self.decks.push(Deck::default_deck(new_id));
        }
        &mut self.decks[0]
    }

    // ── Past papers ──

    #[must_use]
    pub fn pastpapers(&self) -> &[PastPaper] {
        &self.pastpapers
    }

    pub fn add_paper(&mut self, paper: PastPaper) {
        self.pastpapers.insert(0, paper);
    }

    #[must_use]
    pub fn paper(&self, id: PaperId) -> Option<&PastPaper> {
        self.pastpapers.iter().find(|p| p.id() == id)
    }

    pub fn remove_paper(&mut self, id: PaperId) -> Option<PastPaper> {
        let index = self.pastpapers.iter().position(|p| p.id() == id)?;
        Some(self.pastpapers.remove(index))
    }
}

//
// ─── STUDY DOCUMENT ────────────────────────────────────────────────────────────
//

/// The single owned aggregate: per-subject data plus per-subject progress.
///
/// Every subject is always present; lookups are total. Mutations happen in
/// memory and the whole document is persisted afterwards in one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyDocument {
    subjects: SubjectTable<SubjectData>,
    progress: SubjectTable<ProgressRecord>,
}

impl StudyDocument {
    /// The first-run document: empty lists and zeroed progress per subject.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Rehydrates a document from persisted storage.
    #[must_use]
    pub fn from_parts(
        subjects: SubjectTable<SubjectData>,
        progress: SubjectTable<ProgressRecord>,
    ) -> Self {
        Self { subjects, progress }
    }

    #[must_use]
    pub fn subject(&self, subject: Subject) -> &SubjectData {
        self.subjects.get(subject)
    }

    pub fn subject_mut(&mut self, subject: Subject) -> &mut SubjectData {
        self.subjects.get_mut(subject)
    }

    #[must_use]
    pub fn progress(&self, subject: Subject) -> &ProgressRecord {
        self.progress.get(subject)
    }

    pub fn progress_mut(&mut self, subject: Subject) -> &mut ProgressRecord {
        self.progress.get_mut(subject)
    }

    /// Iterates subject data in `Subject::ALL` order.
    pub fn subjects(&self) -> impl Iterator<Item = (Subject, &SubjectData)> {
        self.subjects.iter()
    }

    /// Iterates progress records in `Subject::ALL` order.
    pub fn progress_entries(&self) -> impl Iterator<Item = (Subject, &ProgressRecord)> {
        self.progress.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
