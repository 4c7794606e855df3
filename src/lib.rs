//! Detective Quest
//!
//! A single-player mansion mystery played in the terminal: walk the rooms
//! of the old mansion, note the clues hidden in them, and let the evidence
//! name the culprit.
//!
//! # Game Mechanics
//!
//! - **Exploration**: The mansion is a fixed tree of rooms; every junction
//!   offers at most a left and a right passage
//! - **Clues**: Some rooms hold a clue; found clues are kept sorted and
//!   deduplicated for review
//! - **Deduction**: A ledger ties each clue to a suspect; the final
//!   analysis tallies the ledger and points at the most implicated one
//!
//! # Architecture
//!
//! - `data` - The three structures the game runs on: the mansion room tree,
//!   the clue index, and the suspect ledger
//! - `game` - Game state, the exploration controller, case seed data
//! - `tui` - Terminal user interface with ratatui

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Invalid mansion layout: {0}")]
    InvalidLayout(String),

    #[error("Case file has no rooms")]
    EmptyCase,
}
