//! Core types shared by the store and the controller: configuration,
//! errors and logging setup.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{GameConfig, Messages};
pub use error::{EmptyDeckError, GameError};
