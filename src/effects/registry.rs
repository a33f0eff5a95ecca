//! Effect registry: name → constructible variant.
//!
//! The registry is a closed, enumerated set plus a pure mapping function,
//! so there is no runtime registration and no ordering dependency. Cards
//! reference effects by name; resolution happens at dispatch time.

use crate::cards::EffectDef;
use crate::core::GameError;

/// Every effect the engine knows how to construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Raises or lowers a monster's health.
    Power,
    /// Monster trait: inverts the power of spells played on it.
    Undead,
    /// Judgement: removes an enchantment.
    Dispel,
    /// Judgement: throws a player's spell out of the fight.
    Eject,
}

impl EffectKind {
    /// Map a registry name to its variant.
    #[must_use]
    pub fn from_name(name: &str) -> Option<EffectKind> {
        match name {
            "Power" => Some(EffectKind::Power),
            "Undead" => Some(EffectKind::Undead),
            "Dispel" => Some(EffectKind::Dispel),
            "Eject" => Some(EffectKind::Eject),
            _ => None,
        }
    }

    /// The registry name of this variant.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Power => "Power",
            EffectKind::Undead => "Undead",
            EffectKind::Dispel => "Dispel",
            EffectKind::Eject => "Eject",
        }
    }
}

/// Resolve every definition on a card to a `(kind, def)` pair.
///
/// Unresolvable names are collected and reported together in one rule
/// violation, not fail-fast on the first.
pub fn resolve_effects<'a>(
    effect_defs: &'a [EffectDef],
) -> Result<Vec<(EffectKind, &'a EffectDef)>, GameError> {
    let mut pairs = Vec::with_capacity(effect_defs.len());
    let mut unknown: Vec<&str> = Vec::new();

    for def in effect_defs {
        match EffectKind::from_name(&def.name) {
            Some(kind) => pairs.push((kind, def)),
            None => unknown.push(&def.name),
        }
    }

    if !unknown.is_empty() {
        return Err(GameError::new(format!(
            "Card effect(s) do not exist: {}",
            unknown.join(", ")
        )));
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for kind in [
            EffectKind::Power,
            EffectKind::Undead,
            EffectKind::Dispel,
            EffectKind::Eject,
        ] {
            assert_eq!(EffectKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(EffectKind::from_name("Fireball"), None);
    }

    #[test]
    fn test_resolve_in_declaration_order() {
        let defs = vec![
            EffectDef::new("Undead"),
            EffectDef::new("Power").with_kwarg("power", 2),
        ];

        let pairs = resolve_effects(&defs).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, EffectKind::Undead);
        assert_eq!(pairs[1].0, EffectKind::Power);
    }

    #[test]
    fn test_unknown_names_aggregate() {
        let defs = vec![
            EffectDef::new("Power"),
            EffectDef::new("Meteor"),
            EffectDef::new("Tsunami"),
        ];

        let err = resolve_effects(&defs).unwrap_err();
        assert_eq!(
            err.message(),
            "Card effect(s) do not exist: Meteor, Tsunami"
        );
    }
}
