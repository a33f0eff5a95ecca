//! Per-session monsters and judges.
//!
//! Both are card holders: spell targets that retain the cards cast on them.
//! Instances are spawned fresh from catalog templates for every session —
//! they accumulate mutable state, so sharing one across sessions would leak
//! attached spells and health between games.

use serde::Serialize;
use smallvec::SmallVec;

use crate::cards::{CardInstance, EffectDef, SpellKind};
use crate::catalog::{JudgeTemplate, MonsterTemplate};
use crate::core::GameError;

/// A monster fighting in one session.
#[derive(Clone, Debug, Serialize)]
pub struct MonsterInstance {
    /// Stable string id used in bets and targets.
    pub monster_id: String,

    /// Display name.
    pub name: String,

    /// Payout for a winning bet.
    pub prize: i64,

    /// Base power.
    pub power: i64,

    /// Current health; starts at base power.
    pub health: i64,

    /// Innate effect, if any.
    pub effect: Option<EffectDef>,

    /// Spell cards cast onto this monster, in cast order.
    pub cards: Vec<CardInstance>,
}

impl MonsterInstance {
    /// Spawn a fresh instance from a catalog template.
    #[must_use]
    pub fn spawn(template: &MonsterTemplate) -> Self {
        Self {
            monster_id: template.monster_id.to_string(),
            name: template.name.to_string(),
            prize: template.prize,
            power: template.power,
            health: template.power,
            effect: template.effect.map(EffectDef::new),
            cards: Vec::new(),
        }
    }
}

/// The judge presiding over one session.
#[derive(Clone, Debug, Serialize)]
pub struct JudgeInstance {
    /// Stable string id.
    pub judge_id: String,

    /// Display name.
    pub name: String,

    /// Honorific shown to players.
    pub title: String,

    /// Mana budget per round. Data only; no mana economy exists yet.
    pub mana_limit: i64,

    /// Judgement effect, if any.
    pub judgement: Option<EffectDef>,

    /// Spell kinds this judge refuses to see cast.
    pub disallows: SmallVec<[SpellKind; 1]>,

    /// Whether forbidden cards are illegal under this judge.
    pub disallow_forbidden: bool,

    /// Spell cards cast onto the judge, in cast order.
    pub cards: Vec<CardInstance>,
}

impl JudgeInstance {
    /// Spawn a fresh instance from a catalog template.
    #[must_use]
    pub fn spawn(template: &JudgeTemplate) -> Self {
        Self {
            judge_id: template.judge_id.to_string(),
            name: template.name.to_string(),
            title: template.title.to_string(),
            mana_limit: template.mana_limit,
            judgement: template.judgement.map(EffectDef::new),
            disallows: template.disallows.iter().copied().collect(),
            disallow_forbidden: template.disallow_forbidden,
            cards: Vec::new(),
        }
    }

    /// Check the judge's restrictions against a card about to be cast.
    pub fn allows(&self, card: &CardInstance) -> Result<(), GameError> {
        if self.disallows.contains(&card.spell_kind) {
            return Err(GameError::new(format!(
                "Judge {} disallows {} spells",
                self.name, card.spell_kind
            )));
        }
        if self.disallow_forbidden && card.forbidden {
            return Err(GameError::new(format!(
                "Judge {} disallows forbidden cards",
                self.name
            )));
        }
        Ok(())
    }
}
