//! Card-flow errors.
//!
//! Both errors describe running out of cards. The engine turns them into a
//! finished game rather than passing them on to callers.

use derive_more::{Display, Error};

/// Failure to produce a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum CardError {
    /// A deal was attempted from an empty deck.
    #[display("deck is empty")]
    EmptyDeck,
    /// A player has neither a hand nor won cards to draw from.
    #[display("no cards left in hand or won pile")]
    NoCardsLeft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CardError::EmptyDeck.to_string(), "deck is empty");
        assert_eq!(
            CardError::NoCardsLeft.to_string(),
            "no cards left in hand or won pile"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CardError::NoCardsLeft);
        assert!(err.source().is_none());
    }
}
