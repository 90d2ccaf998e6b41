use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── SUBJECT ───────────────────────────────────────────────────────────────────
//

/// The fixed set of supported subjects.
///
/// The set is a closed enumeration: subjects are not user-extensible and are
/// never deleted. Serializes as the stable id string (e.g. `"maths-ocr"`) so
/// it can key JSON maps in the persisted document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Subject {
    #[serde(rename = "maths-ocr")]
    MathsOcr,
    #[serde(rename = "cs-ocr")]
    CsOcr,
    #[serde(rename = "econ-edx")]
    EconEdexcel,
}

impl Subject {
    /// Every supported subject, in display order.
    pub const ALL: [Subject; 3] = [Subject::MathsOcr, Subject::CsOcr, Subject::EconEdexcel];

    /// Stable identifier used in the persisted document and export file names.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Subject::MathsOcr => "maths-ocr",
            Subject::CsOcr => "cs-ocr",
            Subject::EconEdexcel => "econ-edx",
        }
    }

    /// Human-readable subject name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Subject::MathsOcr => "A Level Maths (OCR)",
            Subject::CsOcr => "A Level Computer Science (OCR)",
            Subject::EconEdexcel => "A Level Economics (Edexcel)",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error type for parsing a `Subject` from its id string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown subject id: {0}")]
pub struct ParseSubjectError(String);

impl FromStr for Subject {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.id() == s)
            .ok_or_else(|| ParseSubjectError(s.to_owned()))
    }
}

//
// ─── SUBJECT TABLE ─────────────────────────────────────────────────────────────
//

/// One value of `T` per subject.
///
/// Because the subject set is closed, lookups are total: no `Option`, no
/// missing-key case. The persisted document stores this as a JSON map keyed
/// by subject id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectTable<T> {
    maths_ocr: T,
    cs_ocr: T,
    econ_edx: T,
}

impl<T> SubjectTable<T> {
    /// Builds a table by calling `f` once per subject.
    pub fn from_fn(mut f: impl FnMut(Subject) -> T) -> Self {
        Self {
            maths_ocr: f(Subject::MathsOcr),
            cs_ocr: f(Subject::CsOcr),
            econ_edx: f(Subject::EconEdexcel),
        }
    }

    #[must_use]
    pub fn get(&self, subject: Subject) -> &T {
        match subject {
            Subject::MathsOcr => &self.maths_ocr,
            Subject::CsOcr => &self.cs_ocr,
            Subject::EconEdexcel => &self.econ_edx,
        }
    }

    pub fn get_mut(&mut self, subject: Subject) -> &mut T {
        match subject {
            Subject::MathsOcr => &mut self.maths_ocr,
            Subject::CsOcr => &mut self.cs_ocr,
            Subject::EconEdexcel => &mut self.econ_edx,
        }
    }

    /// Iterates entries in `Subject::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, &T)> {
        Subject::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
