//! Game configuration.
//!
//! The simulator takes no flags, environment variables or files.
//! Everything a session needs is in a `GameConfig` built in code:
//! - `Messages`: Banner, hint and discard-listing text
//! - `GameConfig`: Prompt, quit token, messages, starting deck
//!
//! `GameConfig::default()` reproduces the stock console game.

use serde::{Deserialize, Serialize};

use crate::cards::{starter_deck, Card};

/// Fixed console text printed around the game loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// First line of the session.
    pub banner: String,

    /// Usage hint printed after the banner.
    pub hint: String,

    /// Header of the final discard listing.
    pub discard_header: String,

    /// Prefix of each discard listing line.
    pub discard_item_prefix: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            banner: "=== Симулятор карточной игры ===".to_string(),
            hint: "Нажмите Enter, чтобы сыграть карту. 'q' — выход.".to_string(),
            discard_header: "Карты в сбросе:".to_string(),
            discard_item_prefix: "- ".to_string(),
        }
    }
}

/// Configuration for one game session.
///
/// ## Example
///
/// ```
/// use card_sim::cards::Card;
/// use card_sim::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_deck([Card::creature("Эльф", 2, 2, 3)])
///     .with_quit_token("exit");
///
/// assert_eq!(config.deck.len(), 1);
/// assert_eq!(config.prompt, "> ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Printed before every input read, without a newline.
    pub prompt: String,

    /// Input line that ends the session without drawing.
    /// Compared exactly, after the line terminator is removed.
    pub quit_token: String,

    pub messages: Messages,

    /// Starting deck, in draw order.
    pub deck: Vec<Card>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            quit_token: "q".to_string(),
            messages: Messages::default(),
            deck: starter_deck(),
        }
    }
}

impl GameConfig {
    /// Create the stock configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the starting deck.
    #[must_use]
    pub fn with_deck(mut self, deck: impl IntoIterator<Item = Card>) -> Self {
        self.deck = deck.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_quit_token(mut self, token: impl Into<String>) -> Self {
        self.quit_token = token.into();
        self
    }

    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
