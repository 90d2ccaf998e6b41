use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("correct answers ({correct}) exceed attempts ({attempts})")]
    CorrectExceedsAttempts { attempts: u32, correct: u32 },

    #[error("mastery {mastery} does not match {correct}/{attempts}")]
    MasteryMismatch {
        attempts: u32,
        correct: u32,
        mastery: u32,
    },
}

//
// ─── PROGRESS RECORD ───────────────────────────────────────────────────────────
//

/// Accumulated quiz performance for one subject.
///
/// Invariants: `correct <= attempts`, `mastery <= 100`, and `mastery` is the
/// rounded percentage of correct answers (0 when there are no attempts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    attempts: u32,
    correct: u32,
    mastery: u32,
}

impl ProgressRecord {
    /// A record with no attempts and zero mastery.
    #[must_use]
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Rehydrates a record from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::CorrectExceedsAttempts` or
    /// `ProgressError::MasteryMismatch` if the stored values are inconsistent.
    pub fn from_persisted(attempts: u32, correct: u32, mastery: u32) -> Result<Self, ProgressError> {
        if correct > attempts {
            return Err(ProgressError::CorrectExceedsAttempts { attempts, correct });
        }
        let expected = mastery_percent(attempts, correct);
        if mastery != expected {
            return Err(ProgressError::MasteryMismatch {
                attempts,
                correct,
                mastery,
            });
        }

        Ok(Self {
            attempts,
            correct,
            mastery,
        })
    }

    /// Adds a batch of attempts and recomputes mastery.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::CorrectExceedsAttempts` if the batch itself
    /// claims more correct answers than attempts.
    pub fn record(&mut self, attempts: u32, correct: u32) -> Result<(), ProgressError> {
        if correct > attempts {
            return Err(ProgressError::CorrectExceedsAttempts { attempts, correct });
        }

        self.attempts = self.attempts.saturating_add(attempts);
        self.correct = self.correct.saturating_add(correct);
        self.mastery = mastery_percent(self.attempts, self.correct);
        Ok(())
    }

    /// Zeroes the record. Resetting an already-zeroed record is a no-op.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Rounded percentage of correct answers, 0–100.
    #[must_use]
    pub fn mastery(&self) -> u32 {
        self.mastery
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mastery_percent(attempts: u32, correct: u32) -> u32 {
    if attempts == 0 {
        return 0;
    }
    ((f64::from(correct) / f64::from(attempts)) * 100.0).round() as u32
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_record_has_no_mastery() {
        let record = ProgressRecord::zeroed();
        assert_eq!(record.attempts(), 0);
        assert_eq!(record.mastery(), 0);
    }

    #[test]
    fn record_accumulates_and_rounds_mastery() {
        let mut record = ProgressRecord::zeroed();
        record.record(3, 2).unwrap();
        assert_eq!(record.attempts(), 3);
        assert_eq!(record.correct(), 2);
        // 200/3 rounds up
        assert_eq!(record.mastery(), 67);

        record.record(3, 1).unwrap();
        assert_eq!(record.attempts(), 6);
        assert_eq!(record.mastery(), 50);
    }

    #[test]
    fn record_rejects_more_correct_than_attempts() {
        let mut record = ProgressRecord::zeroed();
        let err = record.record(1, 2).unwrap_err();
        assert_eq!(
            err,
            ProgressError::CorrectExceedsAttempts {
                attempts: 1,
                correct: 2
            }
        );
        assert_eq!(record.attempts(), 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut record = ProgressRecord::zeroed();
        record.record(10, 7).unwrap();

        record.reset();
        let once = record;
        record.reset();
        assert_eq!(record, once);
        assert_eq!(record, ProgressRecord::zeroed());
    }

    #[test]
    fn from_persisted_checks_invariants() {
        assert!(ProgressRecord::from_persisted(3, 2, 67).is_ok());

        let err = ProgressRecord::from_persisted(1, 2, 50).unwrap_err();
        assert!(matches!(err, ProgressError::CorrectExceedsAttempts { .. }));

        let err = ProgressRecord::from_persisted(3, 2, 66).unwrap_err();
        assert!(matches!(err, ProgressError::MasteryMismatch { .. }));
    }

    #[test]
    fn mastery_stays_in_range() {
        let mut record = ProgressRecord::zeroed();
        record.record(5, 5).unwrap();
        assert_eq!(record.mastery(), 100);

        record.reset();
        record.record(5, 0).unwrap();
        assert_eq!(record.mastery(), 0);
    }
}
