//! Board rendering.
//!
//! One line per frame: the submarine with surfaced players' initials in its
//! portholes, then one cell per depth slot showing either the occupying
//! player's initial, the slot's treasure count, or `X` for an empty slot.

use game_core::GameState;

const SUBMARINE: &str = "( _ o _ o _ o _ )";

/// Render the board with every player at their recorded position.
pub fn board_line(state: &GameState) -> String {
    board_line_with(state, None)
}

/// Render the board with one player's position overridden; used to animate
/// the intermediate steps of a walk.
pub fn board_line_with(state: &GameState, override_pos: Option<(usize, usize)>) -> String {
    let position = |index: usize| match override_pos {
        Some((player, pos)) if player == index => pos,
        _ => state.players[index].position,
    };

    let mut sub = SUBMARINE.to_string();
    for (index, player) in state.players.iter().enumerate() {
        if position(index) == 0 {
            sub = sub.replacen('_', &player.initial().to_string(), 1);
        }
    }

    let mut line = sub;
    for (slot_index, slot) in state.board.slots().iter().enumerate() {
        let occupant = state
            .players
            .iter()
            .enumerate()
            .find(|&(index, _)| position(index) == slot_index + 1)
            .map(|(_, player)| player.initial());

        let cell = match occupant {
            Some(initial) => format!("[{initial}]"),
            None if slot.is_empty() => "[X]".to_string(),
            None => format!("[{}]", slot.len()),
        };
        line.push_str(&cell);
    }
    line
}
