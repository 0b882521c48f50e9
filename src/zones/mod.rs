//! Card locations: the draw deck and the discard pile.
//!
//! ## Key Types
//!
//! - `Deck`: FIFO draw sequence
//! - `DiscardPile`: LIFO sequence of played cards
//! - `CardStore`: Owns both piles and moves cards between them

pub mod pile;
pub mod store;

pub use pile::{Deck, DiscardPile};
pub use store::CardStore;
