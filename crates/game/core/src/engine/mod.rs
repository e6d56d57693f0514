//! Rules engines: the per-turn state machine, round boundary resolution,
//! and final scoring. All state mutation flows through these entry points.
mod round;
mod scoring;
mod turn;

pub use round::{reconcile_round, round_in_progress};
pub use scoring::{GameOutcome, final_scores, settle};
pub use turn::{MoveOptions, TurnEngine, TurnProgress, WalkReport};
