//! Turn actions and the legal-action menu.
//!
//! The menu is recomputed from scratch after every sub-action, so a turn can
//! chain several non-terminal actions (declare surfacing, then move) before
//! a terminal one (grab, drop, pass) or an empty menu ends it.

use strum::IntoEnumIterator;

use crate::state::{GameState, Player};

/// Everything a player can do on their turn. Display strings are the labels
/// shown in the action menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum TurnAction {
    /// Commit to moving upward from now on. Does not consume the move.
    #[strum(serialize = "Start surfacing")]
    StartSurfacing,

    /// Dice move: pick one of the three pair sums.
    #[strum(serialize = "Move")]
    Move,

    /// Dice move using all three dice, at the cost of one extra air.
    #[strum(serialize = "Move with boost")]
    BoostMove,

    /// Take the top treasure from the current slot. Ends the turn.
    #[strum(serialize = "Grab treasure")]
    GrabTreasure,

    /// Return the last carried treasure to the current slot. Ends the turn.
    #[strum(serialize = "Drop treasure")]
    DropTreasure,

    /// End the turn with no further effect.
    #[strum(serialize = "Pass")]
    Pass,
}

/// Errors from applying actions to a turn in progress. These indicate a
/// caller bug (choosing something the menu did not offer), not a recoverable
/// game situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("player index {0} out of range")]
    UnknownPlayer(usize),

    #[error("action \"{0}\" is not available in the current turn state")]
    NotAvailable(TurnAction),

    #[error("a dice move is awaiting resolution")]
    PendingMove,

    #[error("no dice move is awaiting resolution")]
    NoPendingMove,

    #[error("movement option {index} is out of range")]
    InvalidMoveChoice { index: usize },
}

/// Compute the action menu for `player`, given whether they already moved
/// this turn. Menu order is the declaration order of [`TurnAction`].
pub fn available_actions(state: &GameState, player: usize, moved: bool) -> Vec<TurnAction> {
    let Some(p) = state.players.get(player) else {
        return Vec::new();
    };
    TurnAction::iter()
        .filter(|&action| is_available(action, p, state, moved))
        .collect()
}

fn is_available(action: TurnAction, player: &Player, state: &GameState, moved: bool) -> bool {
    let submerged = player.position > 0;
    match action {
        TurnAction::StartSurfacing => submerged && !moved && !player.surfacing,
        TurnAction::Move => !moved,
        TurnAction::BoostMove => !moved && state.round.air() > 0 && !player.boosting,
        TurnAction::GrabTreasure => {
            submerged && moved && !state.board.slot(player.position - 1).is_empty()
        }
        TurnAction::DropTreasure => submerged && moved && !player.carried.is_empty(),
        TurnAction::Pass => submerged && moved,
    }
}
