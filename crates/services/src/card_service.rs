use study_core::model::{CardId, Deck, DeckId, Flashcard, Subject};
use study_core::scheduler::{RecallRating, ReviewOutcome, Scheduler};
use study_core::Clock;

use storage::DocumentRepository;

use crate::error::{CardServiceError, StudySessionError};
use crate::study_session::StudySession;

/// Orchestrates flashcard creation and study-session ratings.
#[derive(Clone)]
pub struct CardService {
    clock: Clock,
    repo: DocumentRepository,
    scheduler: Scheduler,
}

impl CardService {
    #[must_use]
    pub fn new(clock: Clock, repo: DocumentRepository) -> Self {
        Self {
            clock,
            repo,
            scheduler: Scheduler::new(),
        }
    }

    /// Creates a card in the subject's default deck and persists it.
    ///
    /// The deck itself is created lazily on the first card.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Card` for a blank front or back.
    /// Returns `CardServiceError::Storage` if persistence fails.
    pub fn create_card(
        &self,
        subject: Subject,
        front: &str,
        back: &str,
    ) -> Result<Flashcard, CardServiceError> {
        let card = Flashcard::new(CardId::new(), front, back, self.clock.now())?;

        let mut doc = self.repo.load();
        doc.subject_mut(subject)
            .ensure_default_deck(DeckId::new())
            .add_card(card.clone());
        self.repo.save(&doc)?;
        Ok(card)
    }

    /// Lists the subject's decks (at most one today).
    #[must_use]
    pub fn list_decks(&self, subject: Subject) -> Vec<Deck> {
        self.repo.load().subject(subject).decks().to_vec()
    }

    /// Starts a study session over the subject's default deck.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionError::NoCards` if no deck or cards exist.
    pub fn start_study(&self, subject: Subject) -> Result<StudySession, StudySessionError> {
        let doc = self.repo.load();
        let deck = doc
            .subject(subject)
            .default_deck()
            .ok_or(StudySessionError::NoCards)?;
        StudySession::new(subject, deck)
    }

    /// Rates the revealed card, persists its new schedule, and advances the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionError::NotRevealed` before a reveal,
    /// `StudySessionError::Completed` after the last card,
    /// `StudySessionError::CardNotFound` if the card was deleted meanwhile,
    /// and `StudySessionError::Storage` if persistence fails.
    pub fn rate_current(
        &self,
        session: &mut StudySession,
        rating: RecallRating,
    ) -> Result<ReviewOutcome, StudySessionError> {
        let card_id = session.require_revealed()?;
        let now = self.clock.now();

        let mut doc = self.repo.load();
        let card = doc
            .subject_mut(session.subject())
            .default_deck_mut()
            .and_then(|deck| deck.card_mut(card_id))
            .ok_or(StudySessionError::CardNotFound)?;

        let outcome = self.scheduler.review(card.interval_days(), rating, now);
        card.apply_outcome(&outcome);
        self.repo.save(&doc)?;

        session.advance();
        Ok(outcome)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;
    use storage::InMemoryStore;
    use study_core::model::{CardError, DEFAULT_DECK_NAME, INITIAL_INTERVAL_DAYS};
    use study_core::time::{fixed_clock, fixed_now};

    fn service() -> CardService {
        let repo = DocumentRepository::new(Arc::new(InMemoryStore::new()));
        CardService::new(fixed_clock(), repo)
    }

    #[test]
    fn create_card_lazily_creates_single_default_deck() {
        let service = service();
        assert!(service.list_decks(Subject::MathsOcr).is_empty());

        let card = service.create_card(Subject::MathsOcr, "sin²+cos²", "1").unwrap();
        assert_eq!(card.interval_days(), INITIAL_INTERVAL_DAYS);
        assert_eq!(card.next_due(), fixed_now());

        service.create_card(Subject::MathsOcr, "d/dx eˣ", "eˣ").unwrap();
        let decks = service.list_decks(Subject::MathsOcr);
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name(), DEFAULT_DECK_NAME);
        assert_eq!(decks[0].len(), 2);
    }

    #[test]
    fn create_card_requires_both_sides() {
        let service = service();
        let err = service.create_card(Subject::CsOcr, "", "back").unwrap_err();
        assert!(matches!(err, CardServiceError::Card(CardError::EmptyFront)));

        let err = service.create_card(Subject::CsOcr, "front", " ").unwrap_err();
        assert!(matches!(err, CardServiceError::Card(CardError::EmptyBack)));
    }

    #[test]
    fn start_study_requires_cards() {
        let service = service();
        assert!(matches!(
            service.start_study(Subject::EconEdexcel).unwrap_err(),
            StudySessionError::NoCards
        ));
    }

    #[test]
    fn rating_good_persists_grown_interval() {
        let service = service();
        let card = service.create_card(Subject::CsOcr, "TCP", "transport").unwrap();

        let mut session = service.start_study(Subject::CsOcr).unwrap();
        session.reveal().unwrap();
        let outcome = service.rate_current(&mut session, RecallRating::Good).unwrap();

        // round(1 * 1.6)
        assert_eq!(outcome.interval_days, 2);
        assert_eq!(outcome.next_due, fixed_now() + Duration::days(2));

        let decks = service.list_decks(Subject::CsOcr);
        let stored = decks[0].card(card.id()).unwrap();
        assert_eq!(stored.interval_days(), 2);
        assert!(session.is_complete());
    }

    #[test]
    fn rating_hard_resets_interval() {
        let service = service();
        service.create_card(Subject::CsOcr, "UDP", "datagram").unwrap();

        let mut session = service.start_study(Subject::CsOcr).unwrap();
        session.reveal().unwrap();
        service.rate_current(&mut session, RecallRating::Easy).unwrap();

        let mut session = service.start_study(Subject::CsOcr).unwrap();
        session.reveal().unwrap();
        let outcome = service.rate_current(&mut session, RecallRating::Hard).unwrap();
        assert_eq!(outcome.interval_days, 1);
        assert_eq!(outcome.next_due, fixed_now() + Duration::days(1));
    }

    #[test]
    fn rating_before_reveal_is_rejected() {
        let service = service();
        service.create_card(Subject::CsOcr, "front", "back").unwrap();

        let mut session = service.start_study(Subject::CsOcr).unwrap();
        assert!(matches!(
            service
                .rate_current(&mut session, RecallRating::Good)
                .unwrap_err(),
            StudySessionError::NotRevealed
        ));
    }

    #[test]
    fn rating_a_deleted_card_surfaces_not_found() {
        let service = service();
        service.create_card(Subject::CsOcr, "front", "back").unwrap();
        let mut session = service.start_study(Subject::CsOcr).unwrap();
        session.reveal().unwrap();

        // wipe the stored document under the running session
        let fresh = DocumentRepository::new(Arc::new(InMemoryStore::new()));
        let rival = CardService::new(fixed_clock(), fresh);
        assert!(matches!(
            rival
                .rate_current(&mut session, RecallRating::Good)
                .unwrap_err(),
            StudySessionError::CardNotFound
        ));
    }
}
