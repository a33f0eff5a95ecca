//! Monster catalog.
//!
//! Static templates only. Monsters accumulate per-session mutable state
//! (health, attached spells), so sessions always instantiate fresh copies
//! and never hold references into this catalog.

/// Static monster template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonsterTemplate {
    /// Stable string id used on the wire and in bets.
    pub monster_id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Payout for a winning bet.
    pub prize: i64,
    /// Base power; a fresh instance starts with this much health.
    pub power: i64,
    /// Registry name of the monster's innate effect, if any.
    pub effect: Option<&'static str>,
}

/// All monster templates. Weak monsters pay out more.
pub const MONSTERS: &[MonsterTemplate] = &[
    MonsterTemplate {
        monster_id: "monster_darkelf",
        name: "Dark Elf",
        prize: 4,
        power: 7,
        effect: None,
    },
    MonsterTemplate {
        monster_id: "monster_demon",
        name: "Demon",
        prize: 3,
        power: 9,
        effect: None,
    },
    MonsterTemplate {
        monster_id: "monster_dragon",
        name: "Dragon",
        prize: 3,
        power: 10,
        effect: None,
    },
    MonsterTemplate {
        monster_id: "monster_ghost",
        name: "Ghost",
        prize: 5,
        power: 5,
        effect: Some("Undead"),
    },
    MonsterTemplate {
        monster_id: "monster_goblin",
        name: "Goblin",
        prize: 10,
        power: 1,
        effect: None,
    },
    MonsterTemplate {
        monster_id: "monster_lizardman",
        name: "Lizardman",
        prize: 6,
        power: 4,
        effect: None,
    },
    MonsterTemplate {
        monster_id: "monster_minotaur",
        name: "Minotaur",
        prize: 4,
        power: 8,
        effect: None,
    },
    MonsterTemplate {
        monster_id: "monster_orc",
        name: "Orc",
        prize: 8,
        power: 2,
        effect: None,
    },
    MonsterTemplate {
        monster_id: "monster_skeleton",
        name: "Skeleton",
        prize: 7,
        power: 3,
        effect: Some("Undead"),
    },
    MonsterTemplate {
        monster_id: "monster_succubus",
        name: "Succubus",
        prize: 5,
        power: 6,
        effect: None,
    },
];

/// Look up a monster template by id.
#[must_use]
pub fn find(monster_id: &str) -> Option<&'static MonsterTemplate> {
    MONSTERS.iter().find(|m| m.monster_id == monster_id)
}
