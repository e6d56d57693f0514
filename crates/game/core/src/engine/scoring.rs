//! Final scoring after the last round.

use crate::state::Player;

/// Terminal result of a full game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every inventory summed to zero: the depths win.
    EveryoneDrowned,
    /// Highest inventory sum. Ties go to the earlier player in seating
    /// order.
    Winner { name: String, score: u32 },
}

/// Each player's final score: the sum of their banked inventory.
pub fn final_scores(players: &[Player]) -> Vec<(String, u32)> {
    players
        .iter()
        .map(|p| (p.name.clone(), p.inventory.iter().sum()))
        .collect()
}

/// Decide the game outcome from the players' banked inventories.
pub fn settle(players: &[Player]) -> GameOutcome {
    let mut scores = final_scores(players);
    // Stable sort: seating order breaks ties.
    scores.sort_by(|a, b| b.1.cmp(&a.1));
    match scores.into_iter().next() {
        Some((name, score)) if score > 0 => GameOutcome::Winner { name, score },
        _ => GameOutcome::EveryoneDrowned,
    }
}
