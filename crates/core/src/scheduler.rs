use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Growth factor applied to the interval on a passing review.
const PASS_GROWTH: f64 = 1.6;

/// Extra growth per score step above `Good`.
const EASY_STEP: f64 = 0.3;

/// Interval a card falls back to after a failed review, in days.
const LAPSE_INTERVAL_DAYS: u32 = 1;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchedulerError {
    #[error("invalid recall score: {0}")]
    InvalidScore(u8),
}

//
// ─── RECALL RATING ─────────────────────────────────────────────────────────────
//

/// Three-level recall rating for flashcard reviews.
///
/// There is deliberately no "Again" rating: a failed recall is `Hard`, which
/// resets the interval to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallRating {
    /// Failed or struggled to recall. Interval resets.
    Hard,
    /// Recalled correctly. Interval grows ×1.6.
    Good,
    /// Recalled instantly. Interval grows ×1.9.
    Easy,
}

impl RecallRating {
    /// Converts a numeric score to a rating. Valid scores are 1, 3, and 4.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::InvalidScore` for any other value.
    pub fn from_score(value: u8) -> Result<Self, SchedulerError> {
        match value {
            1 => Ok(Self::Hard),
            3 => Ok(Self::Good),
            4 => Ok(Self::Easy),
            _ => Err(SchedulerError::InvalidScore(value)),
        }
    }

    /// The numeric score backing this rating.
    #[must_use]
    pub fn score(self) -> u8 {
        match self {
            RecallRating::Hard => 1,
            RecallRating::Good => 3,
            RecallRating::Easy => 4,
        }
    }

    /// Whether this rating counts as a successful recall.
    #[must_use]
    pub fn is_pass(self) -> bool {
        self.score() >= RecallRating::Good.score()
    }
}

//
// ─── REVIEW OUTCOME ────────────────────────────────────────────────────────────
//

/// The schedule produced by reviewing a card: its new interval and due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub interval_days: u32,
    pub next_due: DateTime<Utc>,
}

//
// ─── SCHEDULER ─────────────────────────────────────────────────────────────────
//

/// Stateless interval scheduler.
///
/// A single-pass heuristic with no tunable parameters: passing reviews grow
/// the interval multiplicatively, failed reviews reset it to one day. The
/// card's stored ease factor is not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler;

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the next schedule for a card with the given current interval.
    ///
    /// The returned interval is always at least one day.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::unused_self)]
    pub fn review(
        &self,
        interval_days: u32,
        rating: RecallRating,
        now: DateTime<Utc>,
    ) -> ReviewOutcome {
        let interval_days = if rating.is_pass() {
            let steps = f64::from(rating.score() - RecallRating::Good.score());
            let factor = PASS_GROWTH + steps * EASY_STEP;
            ((f64::from(interval_days) * factor).round() as u32).max(1)
        } else {
            LAPSE_INTERVAL_DAYS
        };

        ReviewOutcome {
            interval_days,
            next_due: now + Duration::days(i64::from(interval_days)),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
