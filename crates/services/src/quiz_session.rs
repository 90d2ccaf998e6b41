use study_core::model::{Question, Quiz, QuizId, Subject};

use crate::error::QuizSessionError;

/// Observable state of a quiz play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSessionState {
    /// A question is on screen, awaiting a choice.
    Presenting { index: usize, total: usize },
    /// Every question has been answered once.
    Complete { score: u32, total: usize },
}

/// Feedback for a single answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    /// Whether the picked choice was the correct answer.
    pub correct: bool,
    /// The correct answer text, for display on a wrong pick.
    pub answer: String,
    /// Whether this answer completed the session.
    pub is_complete: bool,
}

/// Ephemeral quiz play session.
///
/// Steps through the quiz's questions in order, scoring one point per correct
/// choice. Never persisted mid-session; the questions and their choice order
/// are a snapshot taken at start and replays keep the same order.
#[derive(Debug, Clone)]
pub struct QuizSession {
    subject: Subject,
    quiz_id: QuizId,
    title: String,
    questions: Vec<Question>,
    index: usize,
    score: u32,
}

impl QuizSession {
    /// Starts a session over a snapshot of `quiz`.
    #[must_use]
    pub fn new(subject: Subject, quiz: &Quiz) -> Self {
        Self {
            subject,
            quiz_id: quiz.id(),
            title: quiz.title().to_owned(),
            questions: quiz.questions().to_vec(),
            index: 0,
            score: 0,
        }
    }

    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    #[must_use]
    pub fn state(&self) -> QuizSessionState {
        if self.is_complete() {
            QuizSessionState::Complete {
                score: self.score,
                total: self.questions.len(),
            }
        } else {
            QuizSessionState::Presenting {
                index: self.index,
                total: self.questions.len(),
            }
        }
    }

    /// The question currently presented, or `None` once complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Answers the current question with the picked choice text and advances.
    ///
    /// Each question is answered exactly once; there is no going back.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Completed` if the session is already done.
    pub fn answer(&mut self, choice: &str) -> Result<AnswerFeedback, QuizSessionError> {
        let Some(question) = self.questions.get(self.index) else {
            return Err(QuizSessionError::Completed);
        };

        let correct = question.is_correct(choice);
        if correct {
            self.score += 1;
        }
        let answer = question.answer().to_owned();
        self.index += 1;

        Ok(AnswerFeedback {
            correct,
            answer,
            is_complete: self.is_complete(),
        })
    }

    /// Restarts a completed session with the same question and choice order.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::NotComplete` before the last question is
    /// answered.
    pub fn retry(&mut self) -> Result<(), QuizSessionError> {
        if !self.is_complete() {
            return Err(QuizSessionError::NotComplete);
        }
        self.index = 0;
        self.score = 0;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
