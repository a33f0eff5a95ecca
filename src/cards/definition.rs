//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card template as the
//! catalog declares it: name, spell kind, the forbidden flag, and the effect
//! definitions it carries. Per-session data (the numeric card id, the owner)
//! lives in `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect_def::EffectDef;

/// The kind of a spell card.
///
/// Judges restrict casting by kind, so the engine interprets this
/// (unlike most card data, which is opaque).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellKind {
    /// One-shot damage or healing aimed at a monster.
    Direct,
    /// A lasting enchantment that stays on its target.
    Enchant,
    /// Utility spells aimed at players or the table.
    Support,
}

impl std::fmt::Display for SpellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpellKind::Direct => "direct",
            SpellKind::Enchant => "enchant",
            SpellKind::Support => "support",
        };
        f.write_str(name)
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use sorcerer::cards::{CardDefinition, EffectDef, SpellKind};
///
/// let firebolt = CardDefinition::new("Firebolt", SpellKind::Direct)
///     .with_effect(EffectDef::new("Power").with_kwarg("power", -5));
///
/// assert!(!firebolt.forbidden);
/// assert_eq!(firebolt.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Display name (doubles as the template identifier).
    pub name: String,

    /// Spell kind, checked against the judge's restrictions.
    pub spell_kind: SpellKind,

    /// Forbidden cards are illegal under some judges.
    pub forbidden: bool,

    /// Effect definitions resolved at cast time.
    pub effects: SmallVec<[EffectDef; 2]>,
}

impl CardDefinition {
    /// Create a new card template with no effects.
    #[must_use]
    pub fn new(name: impl Into<String>, spell_kind: SpellKind) -> Self {
        Self {
            name: name.into(),
            spell_kind,
            forbidden: false,
            effects: SmallVec::new(),
        }
    }

    /// Mark the card as forbidden.
    #[must_use]
    pub fn forbidden(mut self) -> Self {
        self.forbidden = true;
        self
    }

    /// Append an effect definition.
    #[must_use]
    pub fn with_effect(mut self, effect: EffectDef) -> Self {
        self.effects.push(effect);
        self
    }
}
