//! Abstractions for sourcing decisions and observing play.
//!
//! Sessions plug in a [`DecisionProvider`] so the same loop runs with human
//! input, scripted fixtures, or replays, and a [`GameObserver`] so rendering
//! stays outside the rules. The observer receives semantic state only;
//! formatting belongs to the client.

use game_core::{GameOutcome, GameState, MoveOptions, TurnAction, WalkReport};

use crate::error::Result;

/// Header data for a turn's decision prompts.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    pub player_name: &'a str,
    pub depth: usize,
    pub air: u32,
}

/// Source of every interactive decision in a game.
///
/// The contract: answers must come from the offered set. Anything else is a
/// programming error in the provider and aborts the session.
pub trait DecisionProvider {
    /// Pick one action from the turn menu. `options` is never empty.
    fn choose_action(
        &mut self,
        ctx: &TurnContext<'_>,
        options: &[TurnAction],
    ) -> Result<TurnAction>;

    /// Pick one of the three movement distances by index.
    fn choose_move(&mut self, options: &MoveOptions) -> Result<usize>;

    /// Acknowledge the end of `completed` before `next` begins.
    fn confirm_round_end(&mut self, completed: u32, next: u32) -> Result<()>;
}

/// Hooks for everything worth showing. All methods default to no-ops so
/// observers implement only what they render.
pub trait GameObserver {
    fn round_started(&mut self, _state: &GameState) {}

    /// A turn began for `player` (an index into `state.players`), after the
    /// burden cost was paid.
    fn turn_started(&mut self, _state: &GameState, _player: usize) {}

    /// The raw three-dice total of a boosted move, revealed before the walk
    /// is shown.
    fn boost_rolled(&mut self, _total: u32, _distance: usize) {}

    /// A walk finished; `report.path` holds each intermediate position so
    /// the client can animate the steps.
    fn player_moved(&mut self, _state: &GameState, _player: usize, _report: &WalkReport) {}

    /// Reconciliation and compaction are done for this round.
    fn round_ended(&mut self, _state: &GameState) {}

    fn game_over(&mut self, _outcome: &GameOutcome) {}
}

/// Observer that ignores everything. Useful for tests and headless runs.
pub struct NullObserver;

impl GameObserver for NullObserver {}
