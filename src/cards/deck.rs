//! The 52-card deck used to set up a game.
//!
//! A deck is only live during setup: once every card has been dealt it is
//! empty and inert, and the players own the cards.

use super::card::{Card, Rank, Suit};
use crate::core::{CardError, GameRng};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered stack of cards; `deal` takes from the end.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a fully populated deck in population order.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self::default();
        deck.populate();
        deck
    }

    /// Replace the contents with one card per (suit, rank), suit-major.
    pub fn populate(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::all() {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Randomize card order and turn every card face up.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.turn_face_up();
    }

    /// Turn every card face up without reordering.
    pub fn turn_face_up(&mut self) {
        for card in &mut self.cards {
            card.face_up = true;
        }
    }

    /// Remove and return the last card.
    pub fn deal(&mut self) -> Result<Card, CardError> {
        self.cards.pop().ok_or(CardError::EmptyDeck)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// View the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
