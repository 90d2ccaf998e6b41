use study_core::model::{CardId, Deck, DeckId, Flashcard, Subject};

use crate::error::StudySessionError;

/// Reveal state of the card currently being studied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyPhase {
    /// Only the front is visible.
    Hidden,
    /// Front and back are visible; a rating may be given.
    Revealed,
}

/// Ephemeral flashcard study session.
///
/// Walks the deck's cards in stored order; every card is shown each session,
/// with no due-date filtering. Each card goes through a two-phase reveal:
/// hidden front, then revealed back, then a rating or a skip advances to the
/// next card. Ratings are applied and persisted by `CardService`; the session
/// itself only tracks position and phase.
#[derive(Debug, Clone)]
pub struct StudySession {
    subject: Subject,
    deck_id: DeckId,
    cards: Vec<Flashcard>,
    position: usize,
    phase: StudyPhase,
}

impl StudySession {
    /// Starts a session over a snapshot of the deck's cards.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionError::NoCards` if the deck is empty.
    pub fn new(subject: Subject, deck: &Deck) -> Result<Self, StudySessionError> {
        if deck.is_empty() {
            return Err(StudySessionError::NoCards);
        }

        Ok(Self {
            subject,
            deck_id: deck.id(),
            cards: deck.cards().to_vec(),
            position: 0,
            phase: StudyPhase::Hidden,
        })
    }

    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    #[must_use]
    pub fn deck_id(&self) -> DeckId {
        self.deck_id
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn phase(&self) -> StudyPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position >= self.cards.len()
    }

    /// The card currently being studied, or `None` once complete.
    #[must_use]
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.position)
    }

    /// Flips the current card to show its back.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionError::Completed` after the last card and
    /// `StudySessionError::AlreadyRevealed` on a second flip.
    pub fn reveal(&mut self) -> Result<&Flashcard, StudySessionError> {
        if self.is_complete() {
            return Err(StudySessionError::Completed);
        }
        if self.phase == StudyPhase::Revealed {
            return Err(StudySessionError::AlreadyRevealed);
        }

        self.phase = StudyPhase::Revealed;
        self.current_card().ok_or(StudySessionError::Completed)
    }

    /// Advances to the next card without rating; the schedule is untouched.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionError::Completed` after the last card.
    pub fn skip(&mut self) -> Result<(), StudySessionError> {
        if self.is_complete() {
            return Err(StudySessionError::Completed);
        }
        self.advance();
        Ok(())
    }

    /// Checks the session is on a revealed card and returns its id.
    pub(crate) fn require_revealed(&self) -> Result<CardId, StudySessionError> {
        let Some(card) = self.current_card() else {
            return Err(StudySessionError::Completed);
        };
        if self.phase == StudyPhase::Hidden {
            return Err(StudySessionError::NotRevealed);
        }
        Ok(card.id())
    }

    pub(crate) fn advance(&mut self) {
        self.position += 1;
        self.phase = StudyPhase::Hidden;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::CardId;
    use study_core::time::fixed_now;

    fn build_deck(cards: usize) -> Deck {
        let mut deck = Deck::default_deck(DeckId::new());
        for i in 0..cards {
            let card =
                Flashcard::new(CardId::new(), format!("front {i}"), format!("back {i}"), fixed_now())
                    .unwrap();
            deck.add_card(card);
        }
        deck
    }

    #[test]
    fn empty_deck_cannot_start_session() {
        let deck = Deck::default_deck(DeckId::new());
        assert!(matches!(
            StudySession::new(Subject::MathsOcr, &deck).unwrap_err(),
            StudySessionError::NoCards
        ));
    }

    #[test]
    fn reveal_then_skip_walks_all_cards() {
        let deck = build_deck(2);
        let mut session = StudySession::new(Subject::CsOcr, &deck).unwrap();
        assert_eq!(session.total_cards(), 2);
        assert_eq!(session.phase(), StudyPhase::Hidden);

        session.reveal().unwrap();
        assert_eq!(session.phase(), StudyPhase::Revealed);
        assert!(matches!(
            session.reveal().unwrap_err(),
            StudySessionError::AlreadyRevealed
        ));

        session.skip().unwrap();
        assert_eq!(session.phase(), StudyPhase::Hidden);
        session.skip().unwrap();
        assert!(session.is_complete());
        assert!(matches!(
            session.skip().unwrap_err(),
            StudySessionError::Completed
        ));
    }

    #[test]
    fn rating_requires_reveal_first() {
        let deck = build_deck(1);
        let session = StudySession::new(Subject::CsOcr, &deck).unwrap();
        assert!(matches!(
            session.require_revealed().unwrap_err(),
            StudySessionError::NotRevealed
        ));
    }

    #[test]
    fn cards_appear_in_stored_order() {
        let deck = build_deck(3);
        let mut session = StudySession::new(Subject::CsOcr, &deck).unwrap();

        let mut seen = Vec::new();
        while let Some(card) = session.current_card() {
            seen.push(card.id());
            session.skip().unwrap();
        }
        let stored: Vec<CardId> = deck.cards().iter().map(Flashcard::id).collect();
        assert_eq!(seen, stored);
    }
}
