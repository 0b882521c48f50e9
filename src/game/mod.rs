//! The interactive game loop.
//!
//! `GameController` reads one line per iteration and either stops or
//! plays the next card. `run` returns a `SessionSummary` holding the
//! final piles.

mod controller;

pub use controller::{Command, ControllerState, GameController, SessionSummary, StopReason};
