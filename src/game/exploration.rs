//! Exploring the mansion
//!
//! The controller walks the room tree under player commands, noting clues
//! as rooms are entered. Movement history is a path stack, so stepping
//! back is a pop rather than an unwinding call.

use crate::data::{ClueIndex, Mansion, RoomId, SuspectLedger};
use serde::{Deserialize, Serialize};

/// Commands the shell can issue while exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExploreCommand {
    GoLeft,
    GoRight,
    Back,
    ViewClues,
    End,
}

/// A clue noted on entering a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    pub clue: String,
    /// False when the clue was already in the index
    pub newly_found: bool,
    /// The suspect the ledger ties to this clue, if any
    pub implicated: Option<String>,
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExploreOutcome {
    /// Entered a room, possibly picking up its clue
    Moved {
        room: RoomId,
        discovery: Option<Discovery>,
    },
    /// No passage in that direction; nothing changed
    NoPassage,
    /// Returned to the previous room on the path
    SteppedBack { room: RoomId },
    /// The shell should show the collected clues; nothing changed
    ClueReview,
    /// The exploration session is over
    Ended,
}

/// One walk through the mansion
///
/// Starts at the entrance and ends when the player leaves, or backs out
/// through the entrance doors. The ended state is absorbing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exploration {
    current: RoomId,
    trail: Vec<RoomId>,
    ended: bool,
}

impl Exploration {
    /// Start at the entrance, noting any clue waiting there.
    pub fn begin(
        mansion: &Mansion,
        clues: &mut ClueIndex,
        ledger: &SuspectLedger,
    ) -> (Self, Option<Discovery>) {
        let exploration = Self {
            current: mansion.root(),
            trail: Vec::new(),
            ended: false,
        };
        let discovery = exploration.note_clue(mansion, clues, ledger);
        (exploration, discovery)
    }

    /// The room the player is standing in
    pub fn current_room(&self) -> RoomId {
        self.current
    }

    /// How many rooms lie between here and the entrance
    pub fn depth(&self) -> usize {
        self.trail.len()
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// True when the current room has no further passages
    pub fn at_dead_end(&self, mansion: &Mansion) -> bool {
        mansion.is_leaf(self.current)
    }

    /// Apply one command. Discovered clues go into the index; the ledger
    /// is only consulted, never changed.
    pub fn step(
        &mut self,
        command: ExploreCommand,
        mansion: &Mansion,
        clues: &mut ClueIndex,
        ledger: &SuspectLedger,
    ) -> ExploreOutcome {
        if self.ended {
            return ExploreOutcome::Ended;
        }

        match command {
            ExploreCommand::GoLeft => {
                self.go(mansion.room(self.current).left, mansion, clues, ledger)
            }
            ExploreCommand::GoRight => {
                self.go(mansion.room(self.current).right, mansion, clues, ledger)
            }
            ExploreCommand::Back => match self.trail.pop() {
                Some(previous) => {
                    self.current = previous;
                    ExploreOutcome::SteppedBack { room: previous }
                }
                // Backing out of the entrance leaves the mansion
                None => {
                    self.ended = true;
                    ExploreOutcome::Ended
                }
            },
            ExploreCommand::ViewClues => ExploreOutcome::ClueReview,
            ExploreCommand::End => {
                self.ended = true;
                ExploreOutcome::Ended
            }
        }
    }

    fn go(
        &mut self,
        destination: Option<RoomId>,
        mansion: &Mansion,
        clues: &mut ClueIndex,
        ledger: &SuspectLedger,
    ) -> ExploreOutcome {
        let Some(room) = destination else {
            return ExploreOutcome::NoPassage;
        };
        self.trail.push(self.current);
        self.current = room;
        let discovery = self.note_clue(mansion, clues, ledger);
        ExploreOutcome::Moved { room, discovery }
    }

    fn note_clue(
        &self,
        mansion: &Mansion,
        clues: &mut ClueIndex,
        ledger: &SuspectLedger,
    ) -> Option<Discovery> {
        let clue = mansion.room(self.current).clue.as_deref()?;
        let newly_found = clues.insert(clue);
        Some(Discovery {
            clue: clue.to_string(),
            newly_found,
            implicated: ledger.lookup(clue).map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RoomSeed;

    fn small_mansion() -> Mansion {
        Mansion::build(&[
            RoomSeed::new("Hall de Entrada", None, Some(1), Some(2)),
            RoomSeed::new("Biblioteca", Some("Carta Rasgada"), None, None),
            RoomSeed::new("Sala de Jantar", Some("Copo de Vinho"), None, None),
        ])
        .unwrap()
    }

    fn ledger() -> SuspectLedger {
        let mut ledger = SuspectLedger::new();
        ledger.insert("Carta Rasgada", "Sr. Black");
        ledger
    }

    #[test]
    fn going_left_collects_the_clue_there() {
        let mansion = small_mansion();
        let ledger = ledger();
        let mut clues = ClueIndex::new();
        let (mut exploration, discovery) = Exploration::begin(&mansion, &mut clues, &ledger);

        // The entrance hall holds nothing
        assert_eq!(discovery, None);
        assert!(!exploration.at_dead_end(&mansion));

        let outcome = exploration.step(ExploreCommand::GoLeft, &mansion, &mut clues, &ledger);
        match outcome {
            ExploreOutcome::Moved { discovery, .. } => {
                let discovery = discovery.unwrap();
                assert_eq!(discovery.clue, "Carta Rasgada");
                assert!(discovery.newly_found);
                assert_eq!(discovery.implicated.as_deref(), Some("Sr. Black"));
            }
            other => panic!("expected Moved, got {other:?}"),
        }

        assert!(exploration.at_dead_end(&mansion));
        assert_eq!(clues.iter().collect::<Vec<_>>(), ["Carta Rasgada"]);
    }

    #[test]
    fn revisiting_a_room_reports_an_old_find() {
        let mansion = small_mansion();
        let ledger = ledger();
        let mut clues = ClueIndex::new();
        let (mut exploration, _) = Exploration::begin(&mansion, &mut clues, &ledger);

        exploration.step(ExploreCommand::GoLeft, &mansion, &mut clues, &ledger);
        exploration.step(ExploreCommand::Back, &mansion, &mut clues, &ledger);
        let outcome = exploration.step(ExploreCommand::GoLeft, &mansion, &mut clues, &ledger);

        match outcome {
            ExploreOutcome::Moved { discovery, .. } => {
                assert!(!discovery.unwrap().newly_found);
            }
            other => panic!("expected Moved, got {other:?}"),
        }
        assert_eq!(clues.len(), 1);
    }

    #[test]
    fn a_missing_passage_is_a_no_op() {
        let mansion = small_mansion();
        let ledger = ledger();
        let mut clues = ClueIndex::new();
        let (mut exploration, _) = Exploration::begin(&mansion, &mut clues, &ledger);

        exploration.step(ExploreCommand::GoRight, &mansion, &mut clues, &ledger);
        let at_leaf = exploration.current_room();

        let outcome = exploration.step(ExploreCommand::GoLeft, &mansion, &mut clues, &ledger);
        assert_eq!(outcome, ExploreOutcome::NoPassage);
        assert_eq!(exploration.current_room(), at_leaf);
        assert!(!exploration.has_ended());
    }

    #[test]
    fn stepping_back_retraces_the_path() {
        let mansion = small_mansion();
        let ledger = ledger();
        let mut clues = ClueIndex::new();
        let (mut exploration, _) = Exploration::begin(&mansion, &mut clues, &ledger);

        exploration.step(ExploreCommand::GoLeft, &mansion, &mut clues, &ledger);
        assert_eq!(exploration.depth(), 1);

        let outcome = exploration.step(ExploreCommand::Back, &mansion, &mut clues, &ledger);
        assert_eq!(
            outcome,
            ExploreOutcome::SteppedBack {
                room: mansion.root()
            }
        );
        assert_eq!(exploration.depth(), 0);
    }

    #[test]
    fn backing_out_of_the_entrance_ends_the_session() {
        let mansion = small_mansion();
        let ledger = ledger();
        let mut clues = ClueIndex::new();
        let (mut exploration, _) = Exploration::begin(&mansion, &mut clues, &ledger);

        let outcome = exploration.step(ExploreCommand::Back, &mansion, &mut clues, &ledger);
        assert_eq!(outcome, ExploreOutcome::Ended);
        assert!(exploration.has_ended());

        // The ended state absorbs every further command
        let outcome = exploration.step(ExploreCommand::GoLeft, &mansion, &mut clues, &ledger);
        assert_eq!(outcome, ExploreOutcome::Ended);
    }

    #[test]
    fn viewing_clues_does_not_move_the_player() {
        let mansion = small_mansion();
        let ledger = ledger();
        let mut clues = ClueIndex::new();
        let (mut exploration, _) = Exploration::begin(&mansion, &mut clues, &ledger);

        let before = exploration.current_room();
        let outcome = exploration.step(ExploreCommand::ViewClues, &mansion, &mut clues, &ledger);
        assert_eq!(outcome, ExploreOutcome::ClueReview);
        assert_eq!(exploration.current_room(), before);
    }
}
