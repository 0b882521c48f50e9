//! Card system: variants, the play capability, and the starter deck.
//!
//! ## Key Types
//!
//! - `Card`: Tagged union over `Creature`, `Spell` and `Item`
//! - `CardKind`: Variant tag
//! - `Playable`: Prints a card's fixed announcement when played

pub mod definition;
pub mod playable;
pub mod starter;

pub use definition::{Card, CardKind, Creature, Item, Spell};
pub use playable::Playable;
pub use starter::{starter_deck, STARTER_DECK_SIZE};
