//! The card game War.
//!
//! Two players reveal their top cards; the higher rank takes both. A tie
//! starts a war: each player stakes face-down cards and one reveal card,
//! and the reveal decides who takes the whole pot. Tied reveals escalate
//! into another war round. Running out of cards mid-turn loses the game.

mod game;
mod player;
mod turn;
mod view;

pub use game::{Phase, WarGame, WarGameBuilder};
pub use player::Player;
pub use turn::{Showdown, StakeKind, StakedCard, TurnOutcome, TurnReport, TurnStats};
pub use view::{SeatView, TableView};
