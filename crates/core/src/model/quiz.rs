use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};

/// Title given to quizzes created with a blank title.
pub const DEFAULT_QUIZ_TITLE: &str = "Untitled Quiz";

/// Every question carries exactly this many choices.
pub const CHOICES_PER_QUESTION: usize = 4;

/// Filler choice used when a question has fewer than four answers.
pub const PLACEHOLDER_CHOICE: &str = "N/A";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz text cannot be empty")]
    EmptyInput,

    #[error("no valid questions could be parsed")]
    NoValidQuestions,

    #[error("a question needs exactly four choices, got {0}")]
    InvalidChoiceCount(usize),

    #[error("the correct answer must be one of the choices")]
    AnswerNotInChoices,
}

//
// ─── QUESTION DRAFT ────────────────────────────────────────────────────────────
//

/// One parsed line of quiz authoring input, before ids and choice order are
/// assigned.
///
/// The authoring format is line-based, one question per line:
///
/// ```text
/// What is 2+2? | 4 | 3 ; 5 ; 22
/// ```
///
/// Fields are `|`-separated and trimmed; wrong answers are `;`-separated and
/// optional. Lines with fewer than two fields are not questions and are
/// skipped without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    text: String,
    correct: String,
    wrongs: Vec<String>,
}

impl QuestionDraft {
    /// Parses a single authoring line, returning `None` for non-question lines.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() < 2 {
            return None;
        }

        let wrongs = parts
            .get(2)
            .map(|field| {
                field
                    .split(';')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            text: parts[0].to_owned(),
            correct: parts[1].to_owned(),
            wrongs,
        })
    }

    /// Parses a whole authoring block, skipping blank and malformed lines.
    #[must_use]
    pub fn parse_block(raw: &str) -> Vec<Self> {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(Self::parse_line)
            .collect()
    }

    /// Builds the choice list in canonical order: the correct answer first,
    /// then the wrong answers, truncated to four entries and padded with
    /// [`PLACEHOLDER_CHOICE`].
    #[must_use]
    pub fn choices(&self) -> Vec<String> {
        let mut choices: Vec<String> = std::iter::once(self.correct.clone())
            .chain(self.wrongs.iter().cloned())
            .take(CHOICES_PER_QUESTION)
            .collect();
        while choices.len() < CHOICES_PER_QUESTION {
            choices.push(PLACEHOLDER_CHOICE.to_owned());
        }
        choices
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    /// Consumes the draft, yielding `(question_text, correct_answer)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.text, self.correct)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with a fixed choice order.
///
/// The choice order is decided once, when the quiz is created, and never
/// changes afterwards; replays present the same permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    choices: Vec<String>,
    answer: String,
}

impl Question {
    /// Creates a question from an already-ordered choice list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidChoiceCount` unless exactly four choices are
    /// given, and `QuizError::AnswerNotInChoices` if `answer` is absent from
    /// them.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        choices: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuizError> {
        if choices.len() != CHOICES_PER_QUESTION {
            return Err(QuizError::InvalidChoiceCount(choices.len()));
        }
        let answer = answer.into();
        if !choices.iter().any(|c| c == &answer) {
            return Err(QuizError::AnswerNotInChoices);
        }

        Ok(Self {
            id,
            text: text.into(),
            choices,
            answer,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether the picked choice is textually equal to the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// A titled list of questions. Immutable after creation except for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    title: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// Creates a quiz, defaulting a blank title to [`DEFAULT_QUIZ_TITLE`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoValidQuestions` if `questions` is empty.
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoValidQuestions);
        }

        let title = title.into();
        let title = title.trim();
        let title = if title.is_empty() {
            DEFAULT_QUIZ_TITLE.to_owned()
        } else {
            title.to_owned()
        };

        Ok(Self {
            id,
            title,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
