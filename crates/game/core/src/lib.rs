//! Deterministic rules for the deep-sea diving board game.
//!
//! `game-core` defines the canonical rules (board, players, turn and round
//! resolution, scoring) and exposes pure APIs with no I/O. All randomness is
//! drawn from an injected [`env::RngOracle`], and every interactive decision
//! point is surfaced to the caller instead of being resolved internally, so
//! the same engine drives human play, scripted fixtures, and tests.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod state;

pub use action::{ApplyError, TurnAction, available_actions};
pub use config::GameConfig;
pub use engine::{
    GameOutcome, MoveOptions, TurnEngine, TurnProgress, WalkReport, final_scores,
    reconcile_round, round_in_progress, settle,
};
pub use env::{PcgRng, RngOracle, SequenceRng};
pub use state::{Board, GameState, InitializationError, Player, RoundState};
