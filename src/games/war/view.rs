//! Render model for front ends.
//!
//! `TableView` is derived from a `WarGame` on demand. Front ends draw from
//! it and never touch the engine's piles directly.

use serde::{Deserialize, Serialize};

use super::game::Phase;
use super::turn::{StakedCard, TurnStats};
use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::rules::GameResult;

/// What one seat shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub player: PlayerId,
    pub name: String,
    /// Next card to be drawn.
    pub top_card: Option<Card>,
    pub hand_count: usize,
    pub won_count: usize,
}

/// Snapshot of the whole table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub phase: Phase,
    pub seats: PlayerMap<SeatView>,
    /// Cards laid out by the last turn, in staking order.
    pub table: Vec<StakedCard>,
    /// Cards still staked (non-zero only when a capped war carried over).
    pub pot_size: usize,
    pub war_depth: u32,
    pub result: Option<GameResult>,
    pub stats: TurnStats,
}

impl TableView {
    /// Display name of the winner, once there is one.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.result.map(|result| self.seats[result.winner].name.as_str())
    }

    /// Cards staked by one seat on the table, in order.
    pub fn staked_by(&self, seat: PlayerId) -> impl Iterator<Item = &StakedCard> {
        self.table.iter().filter(move |staked| staked.owner == seat)
    }
}

impl std::fmt::Display for TableView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (seat, view) in self.seats.iter() {
            let played: Vec<String> = self.staked_by(seat).map(|s| s.card.to_string()).collect();
            writeln!(
                f,
                "{}: {} cards won, {} cards left | {}",
                view.name,
                view.won_count,
                view.hand_count,
                played.join(" ")
            )?;
        }
        if self.pot_size > 0 {
            writeln!(f, "pot: {} cards", self.pot_size)?;
        }
        if let Some(name) = self.winner_name() {
            writeln!(f, "{} is the winner!", name)?;
        }
        Ok(())
    }
}
