//! # card-sim
//!
//! A console card game simulator. A fixed deck of four cards is drawn one
//! card per input line; each card announces itself when played and moves
//! to the discard pile. The session ends on the quit token, on end of
//! input, or when a draw finds the deck empty.
//!
//! ## Design
//!
//! - **Variants, not hierarchy**: `Card` is a tagged union over `Creature`,
//!   `Spell` and `Item`, each implementing `Playable`.
//!
//! - **Single owner**: `CardStore` owns every card. Drawing moves a card
//!   out of the deck and discarding moves it onto the pile, so a card is
//!   never in both.
//!
//! - **Empty deck is a value**: `draw_next` returns `Result`, and the
//!   controller turns `EmptyDeckError` into a normal stop.
//!
//! ## Modules
//!
//! - `cards`: Card variants, `Playable`, the starter deck
//! - `zones`: Deck, discard pile, and the owning store
//! - `core`: Configuration and errors
//! - `game`: The interactive loop

pub mod core;
pub mod cards;
pub mod zones;
pub mod game;

// Re-export commonly used types
pub use crate::cards::{Card, CardKind, Creature, Item, Playable, Spell, starter_deck};
pub use crate::core::{EmptyDeckError, GameConfig, GameError, Messages};
pub use crate::zones::{CardStore, Deck, DiscardPile};
pub use crate::game::{Command, ControllerState, GameController, SessionSummary, StopReason};
