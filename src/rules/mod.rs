//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - What one step of play does
//! - What the presentation layer may observe
//! - Win conditions
//!
//! Front ends call into `RulesEngine` and never reach into game state.

pub mod engine;

pub use engine::{GameResult, RulesEngine, WinReason};
