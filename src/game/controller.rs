//! Console game loop.
//!
//! The controller is a two-state machine. While `Running`, each step
//! prints the prompt and blocks on one input line:
//! - the quit token stops the session without drawing
//! - anything else draws, plays and discards one card
//!
//! End of input is not a quit: it reads as an empty line, so a closed
//! input keeps drawing until the deck runs out.
//!
//! An empty deck is reported to the user and stops the session normally.
//! Once `Stopped`, the discard pile is listed from top to bottom.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, Level};

use crate::core::config::{GameConfig, Messages};
use crate::core::error::GameError;
use crate::zones::CardStore;

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopReason {
    /// The user entered the quit token.
    Quit,
    /// A draw was attempted against an empty deck.
    DeckExhausted,
}

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    Running,
    Stopped(StopReason),
}

impl ControllerState {
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, ControllerState::Running)
    }
}

/// What one input line asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Play,
}

impl Command {
    /// Interpret a raw input line.
    ///
    /// The trailing `\n` or `\r\n` is removed and the rest is compared
    /// with `quit_token` exactly. Every other line, empty included, plays.
    #[must_use]
    pub fn parse(line: &str, quit_token: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line == quit_token {
            Command::Quit
        } else {
            Command::Play
        }
    }
}

/// Result of a finished session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub reason: StopReason,
    /// Cards played during the session.
    pub played: usize,
    /// Final deck and discard pile.
    pub store: CardStore,
}

/// Drives one game session over a line reader and a writer.
///
/// ## Example
///
/// ```
/// use card_sim::core::GameConfig;
/// use card_sim::game::{GameController, StopReason};
///
/// let mut out: Vec<u8> = Vec::new();
/// let controller = GameController::new(GameConfig::default(), "\nq\n".as_bytes(), &mut out);
/// let summary = controller.run().unwrap();
///
/// assert_eq!(summary.reason, StopReason::Quit);
/// assert_eq!(summary.played, 1);
/// ```
pub struct GameController<R, W> {
    prompt: String,
    quit_token: String,
    messages: Messages,
    store: CardStore,
    input: R,
    output: W,
    state: ControllerState,
    played: usize,
}

impl<R: BufRead, W: Write> GameController<R, W> {
    /// Create a controller holding the configured deck.
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        let GameConfig {
            prompt,
            quit_token,
            messages,
            deck,
        } = config;

        Self {
            prompt,
            quit_token,
            messages,
            store: CardStore::new(deck),
            input,
            output,
            state: ControllerState::Running,
            played: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Cards played so far.
    #[must_use]
    pub fn played(&self) -> usize {
        self.played
    }

    /// Run one iteration of the loop.
    ///
    /// Does nothing once stopped. Only I/O failures are returned as errors;
    /// an empty deck becomes `Stopped(DeckExhausted)`.
    #[instrument(level = Level::DEBUG, skip(self))]
    pub fn step(&mut self) -> Result<ControllerState, GameError> {
        if !self.state.is_running() {
            return Ok(self.state);
        }

        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed, reading as an empty line");
        }

        match Command::parse(&line, &self.quit_token) {
            Command::Quit => Ok(self.stop(StopReason::Quit)),
            Command::Play => match self.store.play_next(&mut self.output) {
                Ok(()) => {
                    self.played += 1;
                    Ok(self.state)
                }
                Err(GameError::EmptyDeck(err)) => {
                    writeln!(self.output, "{err}")?;
                    Ok(self.stop(StopReason::DeckExhausted))
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Run the whole session: banner, loop until stopped, discard listing.
    pub fn run(mut self) -> Result<SessionSummary, GameError> {
        writeln!(self.output, "{}", self.messages.banner)?;
        writeln!(self.output, "{}", self.messages.hint)?;

        let reason = loop {
            if let ControllerState::Stopped(reason) = self.step()? {
                break reason;
            }
        };

        self.write_discard_listing()?;
        self.output.flush()?;

        info!(?reason, played = self.played, discarded = self.store.discard_len(), "session finished");

        Ok(SessionSummary {
            reason,
            played: self.played,
            store: self.store,
        })
    }

    fn stop(&mut self, reason: StopReason) -> ControllerState {
        debug!(?reason, "stopping");
        self.state = ControllerState::Stopped(reason);
        self.state
    }

    fn write_discard_listing(&mut self) -> Result<(), GameError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.messages.discard_header)?;
        for card in self.store.discard_top_down() {
            writeln!(self.output, "{}{}", self.messages.discard_item_prefix, card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn controller<'a>(
        input: &'a str,
        out: &'a mut Vec<u8>,
    ) -> GameController<&'a [u8], &'a mut Vec<u8>> {
        GameController::new(GameConfig::default(), input.as_bytes(), out)
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("q\n", "q"), Command::Quit);
        assert_eq!(Command::parse("q\r\n", "q"), Command::Quit);
        assert_eq!(Command::parse("q", "q"), Command::Quit);
        assert_eq!(Command::parse("\n", "q"), Command::Play);
        assert_eq!(Command::parse("Q\n", "q"), Command::Play);
        assert_eq!(Command::parse(" q\n", "q"), Command::Play);
        assert_eq!(Command::parse("quit\n", "q"), Command::Play);
    }

    #[test]
    fn test_step_plays_card() {
        let mut out: Vec<u8> = Vec::new();
        let mut game = controller("\n", &mut out);

        assert_eq!(game.step().unwrap(), ControllerState::Running);
        assert_eq!(game.played(), 1);
        assert_eq!(game.store().discard_len(), 1);
    }

    #[test]
    fn test_step_quit() {
        let mut out: Vec<u8> = Vec::new();
        let mut game = controller("q\n\n", &mut out);

        assert_eq!(
            game.step().unwrap(),
            ControllerState::Stopped(StopReason::Quit)
        );
        assert_eq!(game.store().deck_len(), 4);

        // Further steps are no-ops.
        assert_eq!(
            game.step().unwrap(),
            ControllerState::Stopped(StopReason::Quit)
        );
        assert_eq!(game.store().deck_len(), 4);
    }

    #[test]
    fn test_step_closed_input_plays() {
        let mut out: Vec<u8> = Vec::new();
        let mut game = controller("", &mut out);

        assert_eq!(game.step().unwrap(), ControllerState::Running);
        assert_eq!(game.played(), 1);
        assert_eq!(game.store().discard_len(), 1);
    }

    #[test]
    fn test_step_empty_deck_stops() {
        let mut out: Vec<u8> = Vec::new();
        let config = GameConfig::default().with_deck([Card::item("Меч героя", 2, "+3 к атаке")]);
        let mut game = GameController::new(config, "\n\n".as_bytes(), &mut out);

        assert!(game.step().unwrap().is_running());
        assert_eq!(
            game.step().unwrap(),
            ControllerState::Stopped(StopReason::DeckExhausted)
        );
        drop(game);

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Ошибка: колода пуста!\n"));
    }

    #[test]
    fn test_custom_prompt_and_quit_token() {
        let mut out: Vec<u8> = Vec::new();
        let config = GameConfig::default().with_prompt("$ ").with_quit_token("exit");
        let game = GameController::new(config, "q\nexit\n".as_bytes(), &mut out);

        let summary = game.run().unwrap();
        assert_eq!(summary.reason, StopReason::Quit);
        assert_eq!(summary.played, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("$ Дракон выходит на поле боя! (8/8)\n$ \n"));
    }
}
