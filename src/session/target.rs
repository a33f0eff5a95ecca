//! Spell targets.
//!
//! A target arrives from the transport as a `(kind, id)` pair. Ids are
//! loosely typed on the wire — string for monsters, integer for everything
//! else — so the resolver validates the type before looking anything up.
//! A wrong id type is a [`ContractError`] (caller bug), while an id of the
//! right type that names nothing is a [`GameError`] (rule violation).

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance};
use crate::core::ContractError;
use crate::session::entities::{JudgeInstance, MonsterInstance};
use crate::session::player::{PlayerId, PlayerSession};

/// The kind of game entity a spell can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// A monster in the fight.
    Monster,
    /// A spell already cast onto a card holder, or held in hand.
    Spell,
    /// Another player, or the caster themselves.
    Player,
    /// The judge.
    Judge,
}

/// Wire-level target id: string for monsters, integer otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetId {
    Int(i64),
    Str(String),
}

impl TargetId {
    /// The string id, or a contract violation naming the expected kind.
    pub fn as_str(&self, kind: TargetKind) -> Result<&str, ContractError> {
        match self {
            TargetId::Str(s) => Ok(s),
            TargetId::Int(v) => Err(ContractError::new(format!(
                "{kind:?} target id must be a string, got integer {v}"
            ))),
        }
    }

    /// The integer id, or a contract violation naming the expected kind.
    pub fn as_int(&self, kind: TargetKind) -> Result<i64, ContractError> {
        match self {
            TargetId::Int(v) => Ok(*v),
            TargetId::Str(s) => Err(ContractError::new(format!(
                "{kind:?} target id must be an integer, got string {s:?}"
            ))),
        }
    }
}

impl From<&str> for TargetId {
    fn from(v: &str) -> Self {
        TargetId::Str(v.to_string())
    }
}

impl From<String> for TargetId {
    fn from(v: String) -> Self {
        TargetId::Str(v)
    }
}

impl From<i64> for TargetId {
    fn from(v: i64) -> Self {
        TargetId::Int(v)
    }
}

/// An abstract target descriptor: what kind of entity, and which one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub kind: TargetKind,
    pub id: TargetId,
}

impl Target {
    /// Target a monster by its string id.
    #[must_use]
    pub fn monster(monster_id: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Monster,
            id: TargetId::Str(monster_id.into()),
        }
    }

    /// Target a spell card by its numeric id.
    #[must_use]
    pub fn spell(card_id: CardId) -> Self {
        Self {
            kind: TargetKind::Spell,
            id: TargetId::Int(card_id.0 as i64),
        }
    }

    /// Target a player by id.
    #[must_use]
    pub fn player(player_id: PlayerId) -> Self {
        Self {
            kind: TargetKind::Player,
            id: TargetId::Int(player_id.0 as i64),
        }
    }

    /// Target the judge.
    #[must_use]
    pub fn judge() -> Self {
        Self {
            kind: TargetKind::Judge,
            id: TargetId::Int(0),
        }
    }
}

/// A resolved target: a borrow of the concrete in-session entity.
#[derive(Debug)]
pub enum ResolvedEntity<'a> {
    Monster(&'a MonsterInstance),
    Judge(&'a JudgeInstance),
    Player(&'a PlayerSession),
    Spell(&'a CardInstance),
}

impl ResolvedEntity<'_> {
    /// Owned key for this entity, usable after the borrow ends.
    #[must_use]
    pub fn to_ref(&self) -> TargetRef {
        match self {
            ResolvedEntity::Monster(m) => TargetRef::Monster(m.monster_id.clone()),
            ResolvedEntity::Judge(_) => TargetRef::Judge,
            ResolvedEntity::Player(p) => TargetRef::Player(p.player_id),
            ResolvedEntity::Spell(c) => TargetRef::Spell(c.card_id),
        }
    }
}

/// Owned key naming a resolved target entity.
///
/// Effects hold this instead of a borrow so they can re-borrow the entity
/// mutably through the session while it is being mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetRef {
    Monster(String),
    Judge,
    Player(PlayerId),
    Spell(CardId),
}
