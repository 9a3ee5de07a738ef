//! Playing cards.
//!
//! A `Card` is a plain value: suit, rank and a face-up flag. Two cards are
//! the same card when suit and rank match; a deck never holds duplicates.

use serde::{Deserialize, Serialize};

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Upper-case suit name, as printed on the card art.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, 2 through 14 (14 is the ace).
///
/// Ranks compare by value; suits never break ties in War.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank (deuce).
    pub const MIN: u8 = 2;
    /// Highest rank (ace).
    pub const MAX: u8 = 14;
    pub const ACE: Rank = Rank(14);

    /// Create a rank, or `None` if `value` is outside `2..=14`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over every rank, deuce to ace.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} outside 2..=14"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            14 => f.write_str("A"),
            n => write!(f, "{n}"),
        }
    }
}

/// A single playing card.
///
/// Only `face_up` changes over a card's life.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Return this card with the face flag set.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    /// Check whether two cards are the same physical card.
    #[must_use]
    pub fn same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

// Identity ignores the face flag.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.same_card(other)
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.suit.hash(hasher);
        self.rank.hash(hasher);
    }
}

/// Face-up cards print their art key (`CLUBS14`), face-down cards `TOP`.
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.suit, self.rank.value())
        } else {
            f.write_str("TOP")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(n: u8) -> Rank {
        Rank::new(n).unwrap()
    }

    #[test]
    fn test_rank_bounds() {
        assert!(Rank::new(1).is_none());
        assert!(Rank::new(15).is_none());
        assert_eq!(Rank::new(2).map(Rank::value), Some(2));
        assert_eq!(Rank::new(14), Some(Rank::ACE));
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    fn test_rank_ordering() {
        assert!(rank(14) > rank(13));
        assert!(rank(2) < rank(3));
        assert_eq!(rank(7), rank(7));
    }

    #[test]
    fn test_card_identity_ignores_face() {
        let down = Card::new(Suit::Hearts, rank(9));
        let up = down.with_face_up(true);

        assert_eq!(down, up);
        assert_ne!(up, Card::new(Suit::Spades, rank(9)));
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Suit::Clubs, Rank::ACE);
        assert_eq!(format!("{}", card), "TOP");
        assert_eq!(format!("{}", card.with_face_up(true)), "CLUBS14");
        assert_eq!(format!("{}", Card::new(Suit::Spades, rank(10)).with_face_up(true)), "SPADES10");
    }

    #[test]
    fn test_rank_serde() {
        let card = Card::new(Suit::Diamonds, rank(12)).with_face_up(true);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
        assert!(back.face_up);

        assert!(serde_json::from_str::<Rank>("15").is_err());
    }
}
