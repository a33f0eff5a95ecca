//! Standard deck composition.
//!
//! Every session starts from the same 40-card deck; only the shuffle
//! differs. Built at runtime because effect definitions carry argument bags.

use crate::cards::{CardDefinition, EffectDef, SpellKind};

/// Number of cards in the standard deck.
pub const DECK_SIZE: usize = 40;

/// Card templates and their copy counts in the standard deck.
fn composition() -> Vec<(CardDefinition, usize)> {
    vec![
        (power_card("Firebolt", SpellKind::Direct, -5), 8),
        (power_card("Frostbite", SpellKind::Direct, -3), 8),
        (power_card("Blessing", SpellKind::Enchant, 4), 8),
        (power_card("Weaken", SpellKind::Enchant, -2), 8),
        (power_card("Mend", SpellKind::Support, 2), 6),
        (power_card("Soulburn", SpellKind::Direct, -7).forbidden(), 2),
    ]
}

fn power_card(name: &str, kind: SpellKind, power: i64) -> CardDefinition {
    CardDefinition::new(name, kind).with_effect(EffectDef::new("Power").with_kwarg("power", power))
}

/// Build the standard deck, one definition per physical card, in catalog
/// order. Callers shuffle.
#[must_use]
pub fn standard_deck() -> Vec<CardDefinition> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for (definition, count) in composition() {
        for _ in 0..count {
            deck.push(definition.clone());
        }
    }
    deck
}

/// Look up a card template in the standard deck by name.
#[must_use]
pub fn find(name: &str) -> Option<CardDefinition> {
    composition()
        .into_iter()
        .map(|(definition, _)| definition)
        .find(|definition| definition.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_size() {
        assert_eq!(standard_deck().len(), DECK_SIZE);
    }

    #[test]
    fn test_firebolt() {
        let firebolt = find("Firebolt").unwrap();
        assert_eq!(firebolt.spell_kind, SpellKind::Direct);
        assert!(!firebolt.forbidden);
        assert_eq!(firebolt.effects[0].int_arg("power", 0, 0), -5);
    }

    #[test]
    fn test_forbidden_cards_present() {
        let deck = standard_deck();
        let forbidden = deck.iter().filter(|c| c.forbidden).count();
        assert_eq!(forbidden, 2);
        assert!(deck.iter().any(|c| c.name == "Soulburn" && c.forbidden));
    }

    #[test]
    fn test_every_card_declares_effects() {
        for card in standard_deck() {
            assert!(!card.effects.is_empty(), "{} has no effects", card.name);
        }
    }
}
