//! # war-engine
//!
//! A rules engine for the card game War.
//!
//! ## Design Principles
//!
//! 1. **Closed System**: 52 cards, never created or destroyed. Every card
//!    is in a hand, a won pile, or the pot.
//!
//! 2. **Discrete Steps**: The engine moves only when a front end calls
//!    `advance`. Each call runs to completion, wars included.
//!
//! 3. **Render Model**: Front ends read a `TableView` snapshot and never
//!    mutate the engine directly.
//!
//! 4. **Deterministic**: A seed fixes the deal and every reshuffle.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Cards and the deck
//! - `rules`: RulesEngine trait and game results
//! - `games`: The War engine
//!
//! ## Example
//!
//! ```
//! use war_engine::{RulesEngine, WarGameBuilder};
//!
//! let mut game = WarGameBuilder::new().build(42);
//! let result = game.play_to_end(1_000_000).expect("game should finish");
//! let view = game.view();
//! assert_eq!(view.seats[result.winner].hand_count + view.seats[result.winner].won_count, 52);
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{CardError, DealMode, GameRng, PlayerId, PlayerMap, WarConfig};

pub use crate::cards::{Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::rules::{GameResult, RulesEngine, WinReason};

pub use crate::games::war::{
    Phase, Player, SeatView, Showdown, StakeKind, StakedCard, TableView, TurnOutcome, TurnReport,
    TurnStats, WarGame, WarGameBuilder,
};
