//! Card instances - per-session spell cards.
//!
//! A `CardInstance` is a catalog template stamped with a session-unique
//! numeric id. Instances move between the deck, player hands, monster
//! attachments, and the discard; the template data inside never changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{CardDefinition, SpellKind};
use super::effect_def::EffectDef;
use crate::session::PlayerId;

/// Session-unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A spell card inside one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Session-unique numeric id.
    pub card_id: CardId,

    /// Template name (e.g. `"Firebolt"`).
    pub name: String,

    /// Spell kind, checked against the judge's restrictions.
    pub spell_kind: SpellKind,

    /// Forbidden cards are illegal under some judges.
    pub forbidden: bool,

    /// Effect definitions resolved at cast time.
    pub effects: SmallVec<[EffectDef; 2]>,

    /// Player the card was dealt to. `None` while in the deck.
    pub owner: Option<PlayerId>,
}

impl CardInstance {
    /// Instantiate a catalog template with a session-unique id.
    #[must_use]
    pub fn from_definition(card_id: CardId, definition: &CardDefinition) -> Self {
        Self {
            card_id,
            name: definition.name.clone(),
            spell_kind: definition.spell_kind,
            forbidden: definition.forbidden,
            effects: definition.effects.clone(),
            owner: None,
        }
    }
}
