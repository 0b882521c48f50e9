//! Error types.
//!
//! An empty deck is the one routine failure and ends a session normally.
//! Console I/O failures are the only errors that escape the game loop.

use std::io;

use thiserror::Error;

/// A draw was attempted against an empty deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("Ошибка: колода пуста!")]
pub struct EmptyDeckError;

/// Errors raised while running a game step.
#[derive(Debug, Error)]
pub enum GameError {
    /// The deck has no cards left to draw.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),

    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl GameError {
    /// Check if this is the empty-deck signal.
    #[must_use]
    pub fn is_empty_deck(&self) -> bool {
        matches!(self, GameError::EmptyDeck(_))
    }
}
