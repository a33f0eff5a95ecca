//! Property tests for hand sizing and dealing.

use proptest::prelude::*;

use sorcerer::cards::{CardDefinition, CardId, CardInstance, SpellKind};
use sorcerer::session::dealing::{deal_cards, determine_hand_size};
use sorcerer::session::player::{PlayerId, PlayerSession};

fn deck_of(size: usize) -> Vec<CardInstance> {
    let definition = CardDefinition::new("Blank", SpellKind::Support);
    (0..size)
        .map(|i| CardInstance::from_definition(CardId(i as u32), &definition))
        .collect()
}

fn players_of(count: usize) -> Vec<PlayerSession> {
    (0..count)
        .map(|i| PlayerSession::new(PlayerId(i as u32), 2, i == 0))
        .collect()
}

proptest! {
    #[test]
    fn hand_size_is_one_of_the_tiers(players in 1usize..32) {
        let size = determine_hand_size(players);
        prop_assert!(matches!(size, 8 | 6 | 5));
    }

    #[test]
    fn hand_size_never_grows_with_more_players(players in 1usize..31) {
        prop_assert!(determine_hand_size(players) >= determine_hand_size(players + 1));
    }

    #[test]
    fn dealing_conserves_cards(deck_size in 0usize..60, player_count in 1usize..8) {
        let mut deck = deck_of(deck_size);
        let mut players = players_of(player_count);
        let hand_size = determine_hand_size(player_count);

        deal_cards(&mut deck, &mut players, hand_size);

        let dealt: usize = players.iter().map(|p| p.card_count()).sum();
        prop_assert_eq!(dealt + deck.len(), deck_size);
    }

    #[test]
    fn dealing_stamps_owners_and_caps_hands(deck_size in 0usize..60, player_count in 1usize..8) {
        let mut deck = deck_of(deck_size);
        let mut players = players_of(player_count);
        let hand_size = determine_hand_size(player_count);

        deal_cards(&mut deck, &mut players, hand_size);

        for player in &players {
            prop_assert!(player.card_count() <= hand_size);
            for card in &player.cards {
                prop_assert_eq!(card.owner, Some(player.player_id));
            }
        }
        for card in &deck {
            prop_assert_eq!(card.owner, None);
        }
    }

    #[test]
    fn exhausting_the_deck_deals_evenly(player_count in 2usize..8) {
        let hand_size = determine_hand_size(player_count);
        // Too few cards to fill every hand
        let mut deck = deck_of(hand_size * player_count - 3);
        let mut players = players_of(player_count);

        deal_cards(&mut deck, &mut players, hand_size);

        prop_assert!(deck.is_empty());
        let counts: Vec<_> = players.iter().map(|p| p.card_count()).collect();
        let max = counts.iter().max().copied().unwrap_or(0);
        let min = counts.iter().min().copied().unwrap_or(0);
        prop_assert!(max - min <= 1, "uneven deal: {:?}", counts);
    }
}
