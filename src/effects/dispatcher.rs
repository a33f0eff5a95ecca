//! Effect dispatch pipeline.
//!
//! For each lifecycle hook: resolve every definition the card declares
//! (unknown names reported together), instantiate each effect with its
//! stored arguments, and invoke the hook in card-declaration order against
//! the shared context.

use log::debug;

use super::context::EffectContext;
use super::registry::resolve_effects;
use crate::core::GameError;

#[derive(Clone, Copy, Debug)]
enum Hook {
    Cast,
    RoundEnd,
}

/// Hook executed when a player casts a spell card.
pub fn on_cast(ctx: &mut EffectContext<'_>) -> Result<(), GameError> {
    dispatch(ctx, Hook::Cast)
}

/// Hook executed when a fight round ends.
pub fn on_round_end(ctx: &mut EffectContext<'_>) -> Result<(), GameError> {
    dispatch(ctx, Hook::RoundEnd)
}

fn dispatch(ctx: &mut EffectContext<'_>, hook: Hook) -> Result<(), GameError> {
    // Cloned so the hook can borrow the context mutably.
    let defs = ctx.spell_card.effects.clone();
    let pairs = resolve_effects(&defs)?;

    for (kind, def) in pairs {
        let effect = kind.instantiate(def);
        debug!(
            "dispatching {:?} hook of {} for card {}",
            hook,
            effect.effect_id(),
            ctx.spell_card.card_id
        );

        match hook {
            Hook::Cast => effect.on_cast(ctx)?,
            Hook::RoundEnd => effect.on_round_end(ctx)?,
        }
    }

    Ok(())
}
