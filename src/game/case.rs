//! Case definitions
//!
//! A case file carries everything a game needs at startup: the mansion
//! layout table and the clue -> suspect links for the ledger. Both are
//! applied once and never change during play.

use crate::data::RoomSeed;
use serde::{Deserialize, Serialize};

/// One clue -> suspect relation, applied to the ledger at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectLink {
    pub clue: String,
    pub suspect: String,
}

impl SuspectLink {
    pub fn new(clue: &str, suspect: &str) -> Self {
        Self {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        }
    }
}

/// A complete playable case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub title: String,
    pub briefing: String,
    pub rooms: Vec<RoomSeed>,
    pub suspect_links: Vec<SuspectLink>,
}

/// The classic mansion case
pub fn create_manor_case() -> CaseFile {
    CaseFile {
        title: "The Mansion Murder".to_string(),
        briefing: r#"
A body was found in the old mansion on the hill, and five guests each
swear they saw nothing. The rooms tell a different story.

Walk the corridors, search every room you can reach, and note each clue
you find. When you have seen enough, run the final analysis: the suspect
the evidence names most often is your culprit.
        "#
        .trim()
        .to_string(),
        rooms: vec![
            RoomSeed::new("Hall de Entrada", None, Some(1), Some(2)),
            RoomSeed::new("Biblioteca", Some("Carta Rasgada"), Some(3), Some(4)),
            RoomSeed::new("Sala de Jantar", Some("Copo de Vinho"), Some(5), Some(6)),
            RoomSeed::new("Escritorio", Some("Documento Financeiro"), Some(7), None),
            RoomSeed::new("Sala de Leitura", Some("Livro Antigo"), None, None),
            RoomSeed::new("Cozinha", Some("Faca Ensanguentada"), None, Some(8)),
            RoomSeed::new("Adega", Some("Garrafa Quebrada"), None, None),
            RoomSeed::new("Cofre Secreto", Some("Joia Roubada"), None, None),
            RoomSeed::new("Despensa", Some("Veneno"), None, None),
        ],
        suspect_links: vec![
            SuspectLink::new("Carta Rasgada", "Sr. Black"),
            SuspectLink::new("Copo de Vinho", "Sra. Scarlet"),
            SuspectLink::new("Documento Financeiro", "Sr. Black"),
            SuspectLink::new("Livro Antigo", "Prof. Plum"),
            SuspectLink::new("Faca Ensanguentada", "Coronel Mustard"),
            SuspectLink::new("Garrafa Quebrada", "Sra. Scarlet"),
            SuspectLink::new("Joia Roubada", "Sr. Black"),
            SuspectLink::new("Veneno", "Sra. Peacock"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Mansion;

    #[test]
    fn the_manor_layout_builds() {
        let case = create_manor_case();
        let mansion = Mansion::build(&case.rooms).unwrap();
        assert_eq!(mansion.len(), 9);
        assert_eq!(mansion.room(mansion.root()).name, "Hall de Entrada");
    }

    #[test]
    fn every_room_clue_is_on_the_ledger() {
        let case = create_manor_case();
        for seed in &case.rooms {
            if let Some(clue) = &seed.clue {
                assert!(
                    case.suspect_links.iter().any(|link| &link.clue == clue),
                    "no suspect linked to {clue}"
                );
            }
        }
    }
}
