//! Data structures for the game world
//!
//! Defines the mansion room tree, the clue index, and the suspect ledger.

pub mod clues;
pub mod mansion;
pub mod suspects;

pub use clues::*;
pub use mansion::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tags for journal entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    Info,
    Discovery,
    Warning,
    Verdict,
}

impl Notice {
    pub fn symbol(&self) -> &'static str {
        match self {
            Notice::Info => "·",
            Notice::Discovery => "◆",
            Notice::Warning => "▲",
            Notice::Verdict => "★",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Info => write!(f, "INFO"),
            Notice::Discovery => write!(f, "CLUE"),
            Notice::Warning => write!(f, "WARN"),
            Notice::Verdict => write!(f, "VERDICT"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}
