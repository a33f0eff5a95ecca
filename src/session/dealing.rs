//! Card dealing.
//!
//! The deck is shuffled once at `begin_game`; all later deals continue from
//! the existing order. Dealing is a round-robin top-up: one card at a time
//! to each player below the hand size, stopping when every hand is full or
//! the deck runs out. Deterministic given the deck order.

use crate::cards::CardInstance;
use crate::session::player::PlayerSession;

/// Hand size rule by player count: small tables get bigger hands.
#[must_use]
pub fn determine_hand_size(player_count: usize) -> usize {
    if player_count <= 4 {
        8
    } else if player_count <= 5 {
        6
    } else {
        5
    }
}

/// Deal from the top of `deck` (the end of the vec) round-robin until every
/// player holds `hand_size` cards or the deck is exhausted.
///
/// Dealt cards are stamped with their new owner. Never reshuffles.
pub fn deal_cards(deck: &mut Vec<CardInstance>, players: &mut [PlayerSession], hand_size: usize) {
    loop {
        let mut dealt = false;

        for player in players.iter_mut() {
            if player.cards.len() >= hand_size {
                continue;
            }
            let Some(mut card) = deck.pop() else {
                return;
            };
            card.owner = Some(player.player_id);
            player.cards.push(card);
            dealt = true;
        }

        if !dealt {
            return;
        }
    }
}
