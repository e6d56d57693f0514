//! Round boundary rules: the sweep predicate and end-of-round
//! reconciliation.

use crate::state::GameState;

/// Whether another full sweep of player turns should run. Checked once per
/// sweep, not per turn: a sweep that starts with air left runs to completion
/// even if air hits zero partway through.
pub fn round_in_progress(state: &GameState) -> bool {
    state.round.air() > 0 && !state.players.iter().all(|p| p.passed)
}

/// Settle the round and prepare everyone for the next one.
///
/// Players who made it back to the surface bank their carried treasures into
/// their permanent inventory. Anyone still underwater forfeits theirs: the
/// batch is appended to the board as a brand-new slot at the deep end. All
/// players are then reset, and only then is the board compacted — compaction
/// renumbers depths, which is safe only while every position is 0.
pub fn reconcile_round(state: &mut GameState) {
    let GameState { board, players, .. } = state;

    for player in players.iter_mut() {
        let carried = std::mem::take(&mut player.carried);
        if player.position == 0 {
            player.inventory.extend(carried);
        } else if !carried.is_empty() {
            board.push_slot(carried);
        }
        player.reset();
    }

    debug_assert!(
        players.iter().all(|p| p.position == 0),
        "board compaction requires every player at the surface"
    );
    board.compact();
}
