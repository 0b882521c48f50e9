//! Ordered card piles.
//!
//! - `Deck`: first in, first out. Insertion order is play order. Built
//!   once from an iterator; afterwards only the front card is removed.
//! - `DiscardPile`: last in, first out. The most recently played card is on top.
//!
//! Both are backed by `im::Vector`, so cloning a pile is O(1) and shares
//! structure with the original.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Cards waiting to be drawn.
///
/// Index 0 is the next card drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the next card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// The card the next draw will return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Cards already played.
///
/// The last element of the backing vector is the top of the pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vector<Card>,
}

impl DiscardPile {
    /// Create an empty discard pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// The most recently discarded card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from the top of the pile to the bottom.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }
}
