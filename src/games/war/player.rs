//! A seated player: draw pile plus won pile.
//!
//! Piles are `im::Vector`s so cloning a whole table for lookahead is cheap.
//! The hand is a stack: cards are drawn from the back.

use im::Vector;
use log::trace;

use crate::cards::Card;
use crate::core::{CardError, GameRng};

/// A player's cards.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    hand: Vector<Card>,
    won_cards: Vector<Card>,
}

impl Player {
    /// Create a player with empty piles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vector::new(),
            won_cards: Vector::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Put a card on top of the hand.
    pub fn take_card(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    /// Add awarded cards to the won pile.
    pub fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.won_cards.extend(cards);
    }

    /// Draw the top card of the hand, setting its face flag.
    ///
    /// An empty hand is refilled from the won pile before drawing, and a
    /// draw that empties the hand refills it straight away. Fails with
    /// `NoCardsLeft` only when both piles are empty.
    pub fn play_card(&mut self, face_up: bool, rng: &mut GameRng) -> Result<Card, CardError> {
        if self.hand.is_empty() {
            self.reshuffle(rng);
        }

        let mut card = self.hand.pop_back().ok_or(CardError::NoCardsLeft)?;
        card.face_up = face_up;

        if self.hand.is_empty() {
            self.reshuffle(rng);
        }

        Ok(card)
    }

    /// Stake a hidden card.
    pub fn place_card_face_down(&mut self, rng: &mut GameRng) -> Result<Card, CardError> {
        self.play_card(false, rng)
    }

    /// Randomize the hand and turn every card in it face up.
    pub fn shuffle_hand(&mut self, rng: &mut GameRng) {
        rng.shuffle_vector(&mut self.hand);
        for card in self.hand.iter_mut() {
            card.face_up = true;
        }
    }

    /// Move the won pile into the hand and shuffle it.
    ///
    /// Returns `false` if there was nothing to move.
    fn reshuffle(&mut self, rng: &mut GameRng) -> bool {
        if self.won_cards.is_empty() {
            return false;
        }

        trace!("{}: reshuffling {} won cards", self.name, self.won_cards.len());
        self.hand.append(std::mem::take(&mut self.won_cards));
        self.shuffle_hand(rng);
        true
    }

    /// The card that would be drawn next, if the hand is non-empty.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.hand.back()
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn won_cards(&self) -> &Vector<Card> {
        &self.won_cards
    }

    /// Cards held in both piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.won_cards.len()
    }

    /// Check whether the player can still produce a card.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        self.card_count() > 0
    }
}
