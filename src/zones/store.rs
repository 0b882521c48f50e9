//! The card store: one deck and one discard pile.
//!
//! `CardStore` owns every card of a session. A card is always in exactly
//! one of the two piles; moving it is a move of ownership, so the total
//! count never changes.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, Level};

use super::pile::{Deck, DiscardPile};
use crate::cards::{starter_deck, Card, Playable};
use crate::core::error::{EmptyDeckError, GameError};

/// Deck and discard pile of a single game.
///
/// ## Usage
///
/// ```
/// use card_sim::zones::CardStore;
///
/// let mut store = CardStore::starter();
///
/// let mut out: Vec<u8> = Vec::new();
/// store.play_next(&mut out).unwrap();
///
/// assert_eq!(store.deck_len(), 3);
/// assert_eq!(store.discard_pile().top().unwrap().name(), "Дракон");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStore {
    deck: Deck,
    discard: DiscardPile,
}

impl CardStore {
    /// Create a store whose deck holds `cards` in draw order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            deck: cards.into_iter().collect(),
            discard: DiscardPile::new(),
        }
    }

    /// Create a store holding the starter deck.
    #[must_use]
    pub fn starter() -> Self {
        Self::new(starter_deck())
    }

    /// Remove and return the front card of the deck.
    ///
    /// Fails with `EmptyDeckError` when the deck is empty, leaving both
    /// piles untouched.
    pub fn draw_next(&mut self) -> Result<Card, EmptyDeckError> {
        match self.deck.draw() {
            Some(card) => {
                debug!(card = card.name(), kind = %card.kind(), remaining = self.deck.len(), "drew card");
                Ok(card)
            }
            None => {
                debug!(discarded = self.discard.len(), "draw attempted on empty deck");
                Err(EmptyDeckError)
            }
        }
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        debug!(card = card.name(), "discarded card");
        self.discard.push(card);
    }

    /// Draw the next card, play it to `out`, and discard it.
    ///
    /// If writing the announcement fails the card is still discarded
    /// before the I/O error is returned.
    #[instrument(level = Level::DEBUG, skip(self, out))]
    pub fn play_next(&mut self, out: &mut dyn Write) -> Result<(), GameError> {
        let card = self.draw_next()?;
        let played = card.play(out);
        self.discard(card);
        played?;
        Ok(())
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards across both piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    /// Check if no cards remain to draw.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty()
    }

    /// Iterate the discard pile from top to bottom.
    pub fn discard_top_down(&self) -> impl Iterator<Item = &Card> + '_ {
        self.discard.iter_top_down()
    }
}
