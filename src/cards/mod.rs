//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: card identity (rank 14 is the ace)
//! - `Card`: a value with a face-up flag
//! - `Deck`: the 52 cards used to set up a game

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
