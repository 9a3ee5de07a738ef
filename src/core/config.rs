//! Game configuration.
//!
//! Tables are configured at startup with a `WarConfig`:
//! - Seat names
//! - Whether the deck is shuffled before dealing
//! - War stake size and an optional escalation cap
//!
//! Build one through `WarGameBuilder` rather than by hand.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

/// How the deck is ordered before it is dealt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealMode {
    /// Shuffle with the game seed before dealing.
    #[default]
    Shuffled,
    /// Deal in population order. Every game with this mode starts identically.
    Ordered,
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarConfig {
    /// Display name per seat.
    pub player_names: PlayerMap<String>,

    /// Deck ordering before the deal.
    pub deal_mode: DealMode,

    /// Face-down cards each player stakes per war round.
    pub war_stake: usize,

    /// Maximum war rounds per turn. `None` escalates until the tie breaks
    /// or a player runs dry. When the cap is hit on a tie, the pot stays
    /// staked and carries into the next turn.
    pub max_war_rounds: Option<u32>,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            player_names: PlayerMap::from_pair("Opponent".to_string(), "You".to_string()),
            deal_mode: DealMode::Shuffled,
            war_stake: 3,
            max_war_rounds: None,
        }
    }
}

impl WarConfig {
    /// Get the display name of a seat.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.player_names[player]
    }
}
