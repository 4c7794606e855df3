//! The mansion: a fixed binary tree of rooms
//!
//! Rooms live in an arena and address their children by index, so the
//! whole tree is torn down by a single `Vec` drop. The layout is built
//! once from a seed table and never mutated afterwards.

use crate::GameError;
use serde::{Deserialize, Serialize};

/// Index of a room in the mansion arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

/// One entry of the static layout table. Index 0 is the entrance; child
/// fields refer to positions in the same table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSeed {
    pub name: String,
    pub clue: Option<String>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl RoomSeed {
    pub fn new(name: &str, clue: Option<&str>, left: Option<usize>, right: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            clue: clue.map(str::to_string),
            left,
            right,
        }
    }
}

/// A single room of the mansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// The clue hidden in this room, if any
    pub clue: Option<String>,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Room {
    /// True when both passages are absent
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The fixed room tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mansion {
    rooms: Vec<Room>,
}

impl Mansion {
    /// Build the mansion from its layout table. Index 0 becomes the root.
    ///
    /// Rejects wiring that cannot form a tree: a child index outside the
    /// table, the entrance wired as somebody's child, a room that is its
    /// own child, or one room claimed by two parents.
    pub fn build(seeds: &[RoomSeed]) -> crate::Result<Self> {
        if seeds.is_empty() {
            return Err(GameError::EmptyCase.into());
        }

        let mut claimed = vec![false; seeds.len()];
        let mut rooms = Vec::with_capacity(seeds.len());

        for (index, seed) in seeds.iter().enumerate() {
            let left = wire(seeds, &mut claimed, index, seed.left)?;
            let right = wire(seeds, &mut claimed, index, seed.right)?;
            rooms.push(Room {
                name: seed.name.clone(),
                // An empty clue string means the room holds nothing
                clue: seed.clue.clone().filter(|clue| !clue.is_empty()),
                left,
                right,
            });
        }

        Ok(Self { rooms })
    }

    /// The entrance hall
    pub fn root(&self) -> RoomId {
        RoomId(0)
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn is_leaf(&self, id: RoomId) -> bool {
        self.room(id).is_leaf()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

fn wire(
    seeds: &[RoomSeed],
    claimed: &mut [bool],
    parent: usize,
    child: Option<usize>,
) -> crate::Result<Option<RoomId>> {
    let Some(child) = child else {
        return Ok(None);
    };
    let parent_name = &seeds[parent].name;
    if child >= seeds.len() {
        return Err(GameError::InvalidLayout(format!(
            "{parent_name} points at missing room {child}"
        ))
        .into());
    }
    if child == 0 {
        return Err(GameError::InvalidLayout(format!(
            "the entrance cannot lie behind {parent_name}"
        ))
        .into());
    }
    if child == parent {
        return Err(GameError::InvalidLayout(format!(
            "{parent_name} loops back into itself"
        ))
        .into());
    }
    if claimed[child] {
        return Err(GameError::InvalidLayout(format!(
            "{} has two parents",
            seeds[child].name
        ))
        .into());
    }
    claimed[child] = true;
    Ok(Some(RoomId(child)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rooms() -> Vec<RoomSeed> {
        vec![
            RoomSeed::new("Hall de Entrada", None, Some(1), Some(2)),
            RoomSeed::new("Biblioteca", Some("Carta Rasgada"), None, None),
            RoomSeed::new("Sala de Jantar", Some("Copo de Vinho"), None, None),
        ]
    }

    #[test]
    fn builds_the_seeded_layout() {
        let mansion = Mansion::build(&three_rooms()).unwrap();
        assert_eq!(mansion.len(), 3);

        let root = mansion.room(mansion.root());
        assert_eq!(root.name, "Hall de Entrada");
        assert_eq!(root.clue, None);
        assert!(!mansion.is_leaf(mansion.root()));

        let left = root.left.unwrap();
        assert_eq!(mansion.room(left).name, "Biblioteca");
        assert_eq!(mansion.room(left).clue.as_deref(), Some("Carta Rasgada"));
        assert!(mansion.is_leaf(left));
    }

    #[test]
    fn empty_clue_text_means_no_clue() {
        let seeds = vec![RoomSeed::new("Sotao", Some(""), None, None)];
        let mansion = Mansion::build(&seeds).unwrap();
        assert_eq!(mansion.room(mansion.root()).clue, None);
    }

    #[test]
    fn rejects_an_empty_table() {
        assert!(Mansion::build(&[]).is_err());
    }

    #[test]
    fn rejects_a_child_outside_the_table() {
        let seeds = vec![RoomSeed::new("Hall", None, Some(7), None)];
        assert!(Mansion::build(&seeds).is_err());
    }

    #[test]
    fn rejects_the_entrance_as_a_child() {
        let seeds = vec![
            RoomSeed::new("Hall", None, Some(1), None),
            RoomSeed::new("Porao", None, Some(0), None),
        ];
        assert!(Mansion::build(&seeds).is_err());
    }

    #[test]
    fn rejects_a_room_with_two_parents() {
        let seeds = vec![
            RoomSeed::new("Hall", None, Some(1), Some(1)),
            RoomSeed::new("Biblioteca", None, None, None),
        ];
        assert!(Mansion::build(&seeds).is_err());
    }

    #[test]
    fn rejects_a_room_that_is_its_own_child() {
        let seeds = vec![
            RoomSeed::new("Hall", None, Some(1), None),
            RoomSeed::new("Espelho", None, Some(1), None),
        ];
        assert!(Mansion::build(&seeds).is_err());
    }
}
