/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of depth slots the board starts with.
    pub slot_count: usize,

    /// Shared air every round starts with.
    pub starting_air: u32,

    /// Number of rounds in a full game.
    pub rounds: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Maximum number of players in a game.
    pub const MAX_PLAYERS: usize = 6;
    /// Dice rolled per movement.
    pub const DICE_COUNT: usize = 3;
    /// Each die rolls uniformly in `0..=DIE_MAX`.
    pub const DIE_MAX: u32 = 3;
    /// Extra air paid for a boosted move.
    pub const BOOST_AIR_COST: u32 = 1;

    /// Treasure value bands by 0-based slot index: `(first_index, lo, hi)`.
    /// A slot uses the band with the largest `first_index` not above it.
    pub const TREASURE_BANDS: [(usize, u32, u32); 4] =
        [(0, 0, 10), (8, 10, 20), (16, 15, 30), (24, 25, 40)];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SLOT_COUNT: usize = 32;
    pub const DEFAULT_STARTING_AIR: u32 = 25;
    pub const DEFAULT_ROUNDS: u32 = 3;

    pub fn new() -> Self {
        Self {
            slot_count: Self::DEFAULT_SLOT_COUNT,
            starting_air: Self::DEFAULT_STARTING_AIR,
            rounds: Self::DEFAULT_ROUNDS,
        }
    }

    /// Treasure value range for the slot at `index`.
    pub fn treasure_band(index: usize) -> (u32, u32) {
        let mut band = Self::TREASURE_BANDS[0];
        for candidate in Self::TREASURE_BANDS {
            if candidate.0 <= index {
                band = candidate;
            }
        }
        (band.1, band.2)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
