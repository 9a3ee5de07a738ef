//! Rules engine trait for turn-driven card games.
//!
//! A presentation layer drives a game through `RulesEngine`:
//! - `advance` performs one discrete step (one click)
//! - `view` derives a render model without touching engine internals
//! - `result` reports the winner once the game is over

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner holds every card.
    CollectedAllCards,
    /// The loser could not produce a card when one was required.
    OpponentExhausted,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: WinReason,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `advance`: Runs to completion; no suspension points
/// - `advance` after the game is over must be a no-op
/// - `view`: Must not mutate state
pub trait RulesEngine {
    /// What a single step reports.
    type Outcome;
    /// Render model handed to the presentation layer.
    type View;

    /// Perform one step of play.
    fn advance(&mut self) -> Self::Outcome;

    /// Get the result, or `None` while the game continues.
    fn result(&self) -> Option<GameResult>;

    /// Derive the current render model.
    fn view(&self) -> Self::View;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.result().is_some()
    }

    /// Advance until the game ends or `max_steps` steps have run.
    ///
    /// Returns the result if the game finished.
    fn play_to_end(&mut self, max_steps: usize) -> Option<GameResult> {
        for _ in 0..max_steps {
            if self.is_terminal() {
                break;
            }
            self.advance();
        }
        self.result()
    }
}
