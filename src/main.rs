use std::io;

use anyhow::Context;

use card_sim::core::logging;
use card_sim::{GameConfig, GameController};

fn main() -> anyhow::Result<()> {
    logging::init().context("failed to install logging")?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    let controller = GameController::new(GameConfig::default(), stdin.lock(), stdout.lock());
    let summary = controller.run().context("card game session failed")?;

    tracing::info!(reason = ?summary.reason, played = summary.played, "exiting");
    Ok(())
}
