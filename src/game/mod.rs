//! Core game logic and state management

pub mod case;
pub mod exploration;

use crate::data::*;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use case::{CaseFile, SuspectLink};
pub use exploration::{Discovery, ExploreCommand, ExploreOutcome, Exploration};

/// The main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Title of the case being worked
    pub case_title: String,

    /// Briefing text shown before play
    pub briefing: String,

    /// The mansion, fixed for the whole session
    pub mansion: Mansion,

    /// The current walk through the mansion
    pub exploration: Exploration,

    /// Clues collected so far, sorted and deduplicated
    pub clues: ClueIndex,

    /// Clue -> suspect relations, seeded once at startup
    pub ledger: SuspectLedger,

    /// Session statistics
    pub stats: GameStats,

    /// Case journal (for UI display)
    pub journal: Vec<GameMessage>,
}

/// Counters kept across the session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub rooms_entered: u32,
    pub clues_found: u32,
    pub duplicate_finds: u32,
    pub dead_ends_reached: u32,
    pub steps_back: u32,
    pub explorations_started: u32,
}

/// A line in the case journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub id: Id,
    pub timestamp: DateTime<Utc>,
    pub notice: Notice,
    pub source: String,
    pub message: String,
}

impl GameMessage {
    pub fn info(source: &str, message: &str) -> Self {
        Self::tagged(Notice::Info, source, message)
    }

    pub fn tagged(notice: Notice, source: &str, message: &str) -> Self {
        Self {
            id: Id::new(),
            timestamp: Utc::now(),
            notice,
            source: source.to_string(),
            message: message.to_string(),
        }
    }
}

/// The final analysis over the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    /// Clue counts per suspect, in first-seen order
    pub tallies: Vec<SuspectTally>,
    /// The most implicated suspect, if anything is on file
    pub prime: Option<SuspectTally>,
}

impl Game {
    /// Build a fresh game from a case file. The mansion and the suspect
    /// ledger are seeded here, once; the player starts in the entrance.
    pub fn new(case: CaseFile) -> Result<Self> {
        let mansion = Mansion::build(&case.rooms)?;

        let mut ledger = SuspectLedger::new();
        for link in &case.suspect_links {
            ledger.insert(&link.clue, &link.suspect);
        }

        let mut clues = ClueIndex::new();
        let (exploration, discovery) = Exploration::begin(&mansion, &mut clues, &ledger);

        let mut game = Self {
            case_title: case.title,
            briefing: case.briefing,
            mansion,
            exploration,
            clues,
            ledger,
            stats: GameStats::default(),
            journal: Vec::new(),
        };

        game.stats.explorations_started += 1;
        game.stats.rooms_entered += 1;

        let opening = format!("You take the case: {}", game.case_title);
        game.add_message(GameMessage::info("Case", &opening));
        if let Some(discovery) = discovery {
            game.record_discovery(&discovery);
        }

        Ok(game)
    }

    /// Add a message to the journal
    pub fn add_message(&mut self, message: GameMessage) {
        self.journal.push(message);
    }

    /// Walk back to the entrance and start a new sweep. Clues collected
    /// so far are kept for the whole session.
    pub fn start_exploration(&mut self) {
        let (exploration, discovery) =
            Exploration::begin(&self.mansion, &mut self.clues, &self.ledger);
        self.exploration = exploration;
        self.stats.explorations_started += 1;
        self.stats.rooms_entered += 1;

        let entrance = self.mansion.room(self.mansion.root()).name.clone();
        self.add_message(GameMessage::info(
            "Mansion",
            &format!("You step through the doors of {entrance}."),
        ));
        if let Some(discovery) = discovery {
            self.record_discovery(&discovery);
        }
    }

    /// Execute an exploration command, returning lines for the shell to
    /// show
    pub fn execute(&mut self, command: ExploreCommand) -> Vec<String> {
        let outcome =
            self.exploration
                .step(command, &self.mansion, &mut self.clues, &self.ledger);

        let mut lines = Vec::new();
        match outcome {
            ExploreOutcome::Moved { room, discovery } => {
                self.stats.rooms_entered += 1;
                let (name, leaf) = {
                    let room = self.mansion.room(room);
                    (room.name.clone(), room.is_leaf())
                };
                lines.push(format!("You are in: {name}"));
                if let Some(discovery) = discovery {
                    lines.extend(self.record_discovery(&discovery));
                }
                if leaf {
                    self.stats.dead_ends_reached += 1;
                    lines.push("The trail stops here; there is nowhere deeper to go.".to_string());
                }
            }
            ExploreOutcome::NoPassage => {
                lines.push("There is no passage that way.".to_string());
            }
            ExploreOutcome::SteppedBack { room } => {
                self.stats.steps_back += 1;
                lines.push(format!("You return to {}.", self.mansion.room(room).name));
            }
            ExploreOutcome::ClueReview => {
                if self.clues.is_empty() {
                    lines.push("No clues collected yet.".to_string());
                } else {
                    lines.push("Clues so far, in order:".to_string());
                    lines.extend(self.clues.iter().map(|clue| format!("  - {clue}")));
                }
            }
            ExploreOutcome::Ended => {
                lines.push("You leave the mansion for now.".to_string());
            }
        }
        lines
    }

    /// The final analysis: per-suspect tallies and the prime suspect
    pub fn case_report(&self) -> CaseReport {
        CaseReport {
            tallies: self.ledger.rank_suspects(),
            prime: self.ledger.prime_suspect(),
        }
    }

    /// One-line session status
    pub fn check_status(&self) -> String {
        format!(
            "Rooms entered: {} | Clues: {} | Dead ends: {} | Links on file: {}",
            self.stats.rooms_entered,
            self.clues.len(),
            self.stats.dead_ends_reached,
            self.ledger.len(),
        )
    }

    fn record_discovery(&mut self, discovery: &Discovery) -> Vec<String> {
        let mut lines = Vec::new();

        if discovery.newly_found {
            self.stats.clues_found += 1;
            lines.push(format!("*** You found a clue: {} ***", discovery.clue));
        } else {
            self.stats.duplicate_finds += 1;
            lines.push(format!(
                "You have already noted this clue: {}",
                discovery.clue
            ));
        }

        match &discovery.implicated {
            Some(suspect) => {
                lines.push(format!("    This clue points at: {suspect}"));
                let note = format!("{} -> {}", discovery.clue, suspect);
                self.add_message(GameMessage::tagged(Notice::Discovery, "Clue", &note));
            }
            None => {
                lines.push("    Nothing in the case file mentions this clue.".to_string());
                self.add_message(GameMessage::tagged(
                    Notice::Discovery,
                    "Clue",
                    &discovery.clue,
                ));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::case::create_manor_case;
    use super::*;

    #[test]
    fn a_new_game_starts_in_the_entrance_hall() {
        let game = Game::new(create_manor_case()).unwrap();
        let current = game.mansion.room(game.exploration.current_room());
        assert_eq!(current.name, "Hall de Entrada");
        assert!(game.clues.is_empty());
        assert_eq!(game.ledger.len(), 8);
    }

    #[test]
    fn executing_a_move_updates_clues_and_stats() {
        let mut game = Game::new(create_manor_case()).unwrap();
        let lines = game.execute(ExploreCommand::GoLeft);

        assert!(lines.iter().any(|line| line.contains("Biblioteca")));
        assert!(lines.iter().any(|line| line.contains("Carta Rasgada")));
        assert!(game.clues.contains("Carta Rasgada"));
        assert_eq!(game.stats.clues_found, 1);
        assert_eq!(game.stats.rooms_entered, 2);
    }

    #[test]
    fn restarting_keeps_collected_clues() {
        let mut game = Game::new(create_manor_case()).unwrap();
        game.execute(ExploreCommand::GoLeft);
        game.execute(ExploreCommand::End);
        assert!(game.exploration.has_ended());

        game.start_exploration();
        assert!(!game.exploration.has_ended());
        assert!(game.clues.contains("Carta Rasgada"));
        assert_eq!(
            game.mansion.room(game.exploration.current_room()).name,
            "Hall de Entrada"
        );
    }

    #[test]
    fn clue_review_lists_in_order() {
        let mut game = Game::new(create_manor_case()).unwrap();
        game.execute(ExploreCommand::GoRight);
        game.execute(ExploreCommand::Back);
        game.execute(ExploreCommand::GoLeft);

        let lines = game.execute(ExploreCommand::ViewClues);
        assert_eq!(
            lines,
            [
                "Clues so far, in order:",
                "  - Carta Rasgada",
                "  - Copo de Vinho",
            ]
        );
    }
}
