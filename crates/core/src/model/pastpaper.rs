use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::PaperId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaperError {
    #[error("past paper text cannot be empty")]
    EmptyText,
}

//
// ─── PAST PAPER ────────────────────────────────────────────────────────────────
//

/// Pasted past-paper text kept for later keyword analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastPaper {
    id: PaperId,
    text: String,
    created_at: DateTime<Utc>,
}

impl PastPaper {
    /// Creates a past paper with trimmed text.
    ///
    /// # Errors
    ///
    /// Returns `PaperError::EmptyText` if the text is empty or whitespace-only.
    pub fn new(
        id: PaperId,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, PaperError> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(PaperError::EmptyText);
        }

        Ok(Self {
            id,
            text: text.to_owned(),
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> PaperId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
