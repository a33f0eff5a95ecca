//! Instantiated effects and their lifecycle hooks.
//!
//! An [`Effect`] is an [`EffectKind`](super::EffectKind) constructed with
//! the arguments its definition carried. Each variant may implement either
//! lifecycle hook; a hook a variant does not define is a legitimate no-op,
//! not missing behavior.

use crate::cards::EffectDef;
use crate::core::GameError;
use crate::session::Move;

use super::context::EffectContext;
use super::registry::EffectKind;

/// A runnable effect instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Adds `power` (signed) to the targeted monster's health at round end;
    /// attaches the spell to the monster on cast.
    Power { power: i64 },
    /// Monster trait: inverts the power of spells played on it.
    Undead,
    /// Judgement: removes an enchantment.
    Dispel,
    /// Judgement: throws a player's spell out of the fight.
    Eject,
}

impl EffectKind {
    /// Instantiate this effect kind with the arguments stored in `def`.
    #[must_use]
    pub fn instantiate(self, def: &EffectDef) -> Effect {
        match self {
            EffectKind::Power => Effect::Power {
                power: def.int_arg("power", 0, 0),
            },
            EffectKind::Undead => Effect::Undead,
            EffectKind::Dispel => Effect::Dispel,
            EffectKind::Eject => Effect::Eject,
        }
    }
}

impl Effect {
    /// Stable id used in move records.
    #[must_use]
    pub fn effect_id(&self) -> &'static str {
        match self {
            Effect::Power { .. } => "effect_power",
            Effect::Undead => "effect_undead",
            Effect::Dispel => "effect_dispel",
            Effect::Eject => "effect_eject",
        }
    }

    /// Hook executed when a player casts the spell card.
    pub fn on_cast(&self, ctx: &mut EffectContext<'_>) -> Result<(), GameError> {
        match self {
            Effect::Power { .. } => {
                let Some(monster_id) = ctx.target_monster_id().map(str::to_string) else {
                    return Ok(());
                };

                let card = ctx.spell_card.clone();
                let card_id = card.card_id;
                if let Some(monster) = ctx.session.find_monster_mut(&monster_id) {
                    monster.cards.push(card);
                }

                ctx.session.push_move(
                    Move::new("card_append")
                        .with_kwarg("effect_id", self.effect_id())
                        .with_kwarg("card_id", card_id.0)
                        .with_kwarg("monster_id", monster_id),
                );
                Ok(())
            }
            // No cast behavior defined
            _ => Ok(()),
        }
    }

    /// Hook executed when a fight round ends.
    pub fn on_round_end(&self, ctx: &mut EffectContext<'_>) -> Result<(), GameError> {
        match self {
            Effect::Power { power } => {
                let Some(monster_id) = ctx.target_monster_id().map(str::to_string) else {
                    return Ok(());
                };

                let new_health = match ctx.target_monster_mut() {
                    Some(monster) => {
                        monster.health += power;
                        monster.health
                    }
                    None => return Ok(()),
                };

                let card_id = ctx.spell_card.card_id;
                ctx.session.push_move(
                    Move::new("power_apply")
                        .with_kwarg("effect_id", self.effect_id())
                        .with_kwarg("card_id", card_id.0)
                        .with_kwarg("monster_id", monster_id)
                        .with_kwarg("power", *power)
                        .with_kwarg("new_health", new_health),
                );
                Ok(())
            }
            // No round-end behavior defined
            _ => Ok(()),
        }
    }
}
