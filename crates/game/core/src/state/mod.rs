//! Canonical game state: the board, the players, and the active round.
mod board;
mod player;
mod round;

pub use board::Board;
pub use player::Player;
pub use round::RoundState;

use crate::config::GameConfig;
use crate::env::RngOracle;

/// Errors raised while constructing the initial game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("player count {count} exceeds the maximum of {max}")]
    TooManyPlayers { count: usize, max: usize },
}

/// Complete game state. Created once per game; the board persists across
/// rounds (compacted at round boundaries) and players persist with their
/// inventories intact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub players: Vec<Player>,
    pub round: RoundState,
}

impl GameState {
    /// Build the initial state: a freshly seeded board and one player per
    /// name, all parked at the surface, with round 1 ready to play.
    pub fn new(
        names: Vec<String>,
        config: GameConfig,
        rng: &mut dyn RngOracle,
    ) -> Result<Self, InitializationError> {
        if names.is_empty() {
            return Err(InitializationError::NoPlayers);
        }
        if names.len() > GameConfig::MAX_PLAYERS {
            return Err(InitializationError::TooManyPlayers {
                count: names.len(),
                max: GameConfig::MAX_PLAYERS,
            });
        }

        let board = Board::generate(config.slot_count, rng);
        let players = names.into_iter().map(Player::new).collect();
        let round = RoundState::new(1, config.starting_air);

        Ok(Self {
            config,
            board,
            players,
            round,
        })
    }

    /// Reinitialize the shared round state for round `number`.
    pub fn start_round(&mut self, number: u32) {
        self.round = RoundState::new(number, self.config.starting_air);
    }

    /// Total treasure in the world: board slots, carried sets, inventories.
    /// Invariant across a full round (nothing is minted after setup).
    pub fn world_treasure_count(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|p| p.carried.len() + p.inventory.len())
            .sum();
        self.board.treasure_count() + held
    }
}
