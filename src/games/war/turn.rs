//! What a turn stakes and reports.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::GameResult;

/// Why a card is in the pot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StakeKind {
    /// Face-up card of a basic turn.
    Battle,
    /// A battle card whose tie started a war.
    WarCause,
    /// Hidden card staked during a war.
    FaceDown,
    /// Face-up card that settles a war round.
    Reveal,
}

/// A card on the table, tagged with its owner and role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakedCard {
    pub owner: PlayerId,
    pub card: Card,
    pub kind: StakeKind,
}

impl StakedCard {
    #[must_use]
    pub fn is_war_cause(&self) -> bool {
        self.kind == StakeKind::WarCause
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.card.face_up
    }
}

/// One rank comparison between the two seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    pub first: Card,
    pub second: Card,
}

impl Showdown {
    /// The seat with the higher rank, or `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.first.rank.cmp(&self.second.rank) {
            std::cmp::Ordering::Greater => Some(PlayerId::FIRST),
            std::cmp::Ordering::Less => Some(PlayerId::SECOND),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Summary of one played turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Comparisons in order: the battle, then one per war round.
    pub showdowns: SmallVec<[Showdown; 2]>,
    /// Who took the pot. `None` when a capped war left it staked.
    pub winner: Option<PlayerId>,
    /// Pot size when it was awarded.
    pub cards_won: usize,
    /// War rounds fought this turn.
    pub war_rounds: u32,
    /// Seat that ran out of cards mid-turn.
    pub forfeit: Option<PlayerId>,
}

impl TurnReport {
    /// Check whether this turn went to war.
    #[must_use]
    pub fn had_war(&self) -> bool {
        self.war_rounds > 0
    }
}

/// Result of one `advance`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A turn was played.
    Played(TurnReport),
    /// The previous turn's table was cleared.
    Cleared,
    /// The game is already over; nothing happened.
    Finished(GameResult),
}

/// Running totals over a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStats {
    pub turns_played: u64,
    pub war_rounds: u64,
    pub cards_played: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: u8) -> Card {
        Card::new(Suit::Spades, Rank::new(rank).unwrap()).with_face_up(true)
    }

    #[test]
    fn test_showdown_winner() {
        let high = Showdown { first: card(10), second: card(5) };
        let low = Showdown { first: card(2), second: card(14) };
        let tie = Showdown { first: card(7), second: card(7) };

        assert_eq!(high.winner(), Some(PlayerId::FIRST));
        assert_eq!(low.winner(), Some(PlayerId::SECOND));
        assert_eq!(tie.winner(), None);
    }

    #[test]
    fn test_staked_card_tags() {
        let cause = StakedCard {
            owner: PlayerId::FIRST,
            card: card(7),
            kind: StakeKind::WarCause,
        };
        let hidden = StakedCard {
            owner: PlayerId::SECOND,
            card: card(3).with_face_up(false),
            kind: StakeKind::FaceDown,
        };

        assert!(cause.is_war_cause());
        assert!(cause.is_face_up());
        assert!(!hidden.is_war_cause());
        assert!(!hidden.is_face_up());
    }
}
