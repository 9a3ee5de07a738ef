//! Core types: seats, RNG, configuration, errors.
//!
//! These are shared by the cards and the War engine itself.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{DealMode, WarConfig};
pub use error::CardError;
pub use player::{PlayerId, PlayerMap, SEATS};
pub use rng::GameRng;
