//! Terminal runner for the deep-sea diving board game.
//!
//! Collects the roster at the prompt, seeds the deterministic RNG from OS
//! entropy, and hands the session to the runtime. All decisions and
//! rendering flow through [`provider::PromptProvider`] and
//! [`provider::ConsoleObserver`]; the rules never touch the terminal.

mod logging;
mod prompt;
mod provider;
mod render;

use anyhow::{Context, Result};
use game_core::{GameConfig, GameState, PcgRng};
use runtime::GameSession;

use crate::provider::{ConsoleObserver, PromptProvider};

fn main() -> Result<()> {
    let _guard = logging::init()?;

    let names = collect_roster().context("collecting players")?;
    let seed: u64 = rand::random();
    tracing::info!(seed, players = names.len(), "starting game");

    let mut rng = PcgRng::new(seed);
    let state = GameState::new(names, GameConfig::default(), &mut rng)
        .context("building initial game state")?;

    let session = GameSession::new(state, Box::new(rng), PromptProvider, ConsoleObserver);
    session.run().context("running game session")?;
    Ok(())
}

fn collect_roster() -> Result<Vec<String>> {
    let counts: Vec<String> = (1..=GameConfig::MAX_PLAYERS).map(|n| n.to_string()).collect();
    let count = prompt::select("Specify the number of players", &counts)? + 1;

    let mut names = Vec::with_capacity(count);
    for index in 1..=count {
        names.push(prompt::read_line(&format!("Enter player {index}'s name"))?);
    }
    Ok(names)
}
