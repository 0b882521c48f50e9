//! The fixed four-card deck every session starts with.

use super::definition::Card;

/// Number of cards in the starter deck.
pub const STARTER_DECK_SIZE: usize = 4;

/// Build the starter deck in draw order.
#[must_use]
pub fn starter_deck() -> Vec<Card> {
    vec![
        Card::creature("Дракон", 5, 8, 8),
        Card::spell("Огненный шар", 3, "наносит 5 урона"),
        Card::item("Меч героя", 2, "+3 к атаке"),
        Card::creature("Эльф", 2, 2, 3),
    ]
}
