use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{CardId, DeckId};
use crate::scheduler::ReviewOutcome;

/// Name of the single deck each subject gets.
pub const DEFAULT_DECK_NAME: &str = "Default deck";

/// Interval assigned to freshly created cards, in days.
pub const INITIAL_INTERVAL_DAYS: u32 = 1;

/// Ease factor assigned to freshly created cards.
pub const INITIAL_EASE: f64 = 2.5;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card front cannot be empty")]
    EmptyFront,

    #[error("card back cannot be empty")]
    EmptyBack,

    #[error("card interval must be at least 1 day")]
    InvalidInterval,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck name cannot be empty")]
    EmptyName,
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

/// A front/back flashcard with its review schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Flashcard {
    id: CardId,
    front: String,
    back: String,
    next_due: DateTime<Utc>,
    interval_days: u32,
    // Stored for persisted-format compatibility; the interval rule never
    // reads it.
    ease: f64,
}

impl Flashcard {
    /// Creates a new card due immediately, with the initial interval and ease.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyFront` / `CardError::EmptyBack` if either side
    /// is empty or whitespace-only.
    pub fn new(
        id: CardId,
        front: impl Into<String>,
        back: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, CardError> {
        let front = front.into();
        let front = front.trim();
        if front.is_empty() {
            return Err(CardError::EmptyFront);
        }

        let back = back.into();
        let back = back.trim();
        if back.is_empty() {
            return Err(CardError::EmptyBack);
        }

        Ok(Self {
            id,
            front: front.to_owned(),
            back: back.to_owned(),
            next_due: now,
            interval_days: INITIAL_INTERVAL_DAYS,
            ease: INITIAL_EASE,
        })
    }

    /// Rehydrates a card from persisted storage, re-checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if either side is blank or the interval is zero.
    pub fn from_persisted(
        id: CardId,
        front: impl Into<String>,
        back: impl Into<String>,
        next_due: DateTime<Utc>,
        interval_days: u32,
        ease: f64,
    ) -> Result<Self, CardError> {
        if interval_days == 0 {
            return Err(CardError::InvalidInterval);
        }

        let mut card = Self::new(id, front, back, next_due)?;
        card.interval_days = interval_days;
        card.ease = ease;
        Ok(card)
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    /// Timestamp after which the card is considered due for review.
    #[must_use]
    pub fn next_due(&self) -> DateTime<Utc> {
        self.next_due
    }

    #[must_use]
    pub fn interval_days(&self) -> u32 {
        self.interval_days
    }

    #[must_use]
    pub fn ease(&self) -> f64 {
        self.ease
    }

    /// Applies a review outcome, replacing the interval and due date.
    pub fn apply_outcome(&mut self, outcome: &ReviewOutcome) {
        self.interval_days = outcome.interval_days;
        self.next_due = outcome.next_due;
    }
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A named collection of flashcards. Cards are ordered newest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    id: DeckId,
    name: String,
    cards: Vec<Flashcard>,
}

impl Deck {
    /// Creates an empty deck.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyName` if the name is empty or whitespace-only.
    pub fn new(id: DeckId, name: impl Into<String>) -> Result<Self, DeckError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::EmptyName);
        }

        Ok(Self {
            id,
            name: name.to_owned(),
            cards: Vec::new(),
        })
    }

    /// The lazily created singleton deck each subject uses.
    #[must_use]
    pub fn default_deck(id: DeckId) -> Self {
        Self {
            id,
            name: DEFAULT_DECK_NAME.to_owned(),
            cards: Vec::new(),
        }
    }

    /// Rehydrates a deck and its cards from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyName` if the name is blank.
    pub fn from_persisted(
        id: DeckId,
        name: impl Into<String>,
        cards: Vec<Flashcard>,
    ) -> Result<Self, DeckError> {
        let mut deck = Self::new(id, name)?;
        deck.cards = cards;
        Ok(deck)
    }

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Flashcard> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Flashcard> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    /// Prepends a card so the newest card is listed first.
    pub fn add_card(&mut self, card: Flashcard) {
        self.cards.insert(0, card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn new_card_starts_due_now_with_initial_interval() {
        let card = Flashcard::new(CardId::new(), "front", "back", fixed_now()).unwrap();
        assert_eq!(card.next_due(), fixed_now());
        assert_eq!(card.interval_days(), INITIAL_INTERVAL_DAYS);
        assert!((card.ease() - INITIAL_EASE).abs() < f64::EPSILON);
    }

    #[test]
    fn card_rejects_blank_sides() {
        let err = Flashcard::new(CardId::new(), "  ", "back", fixed_now()).unwrap_err();
        assert_eq!(err, CardError::EmptyFront);

        let err = Flashcard::new(CardId::new(), "front", "\t", fixed_now()).unwrap_err();
        assert_eq!(err, CardError::EmptyBack);
    }

    #[test]
    fn card_from_persisted_rejects_zero_interval() {
        let err =
            Flashcard::from_persisted(CardId::new(), "f", "b", fixed_now(), 0, INITIAL_EASE)
                .unwrap_err();
        assert_eq!(err, CardError::InvalidInterval);
    }

    #[test]
    fn deck_rejects_blank_name() {
        let err = Deck::new(DeckId::new(), " ").unwrap_err();
        assert_eq!(err, DeckError::EmptyName);
    }

    #[test]
    fn deck_prepends_cards() {
        let mut deck = Deck::default_deck(DeckId::new());
        assert_eq!(deck.name(), DEFAULT_DECK_NAME);

        let first = Flashcard::new(CardId::new(), "a", "1", fixed_now()).unwrap();
        let second = Flashcard::new(CardId::new(), "b", "2", fixed_now()).unwrap();
        deck.add_card(first.clone());
        deck.add_card(second.clone());

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards()[0].id(), second.id());
        assert_eq!(deck.card(first.id()).unwrap().front(), "a");
    }
}
