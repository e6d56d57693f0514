//! Per-participant state.

/// One participant. The name is stable for the whole game; inventory only
/// grows. Everything else is round-scoped and cleared by [`Player::reset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,

    /// Depth position: 0 is the surface, `p > 0` is board slot `p - 1`.
    pub position: usize,

    /// Treasures held this round. Lost unless the player surfaces.
    pub carried: Vec<u32>,

    /// Banked treasures. Persists across rounds, never reset.
    pub inventory: Vec<u32>,

    /// The player has committed to moving upward.
    pub surfacing: bool,

    /// The high-risk boosted move was used this turn.
    pub boosting: bool,

    /// Finished this round; takes no more turns until the next one.
    pub passed: bool,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            position: 0,
            carried: Vec::new(),
            inventory: Vec::new(),
            surfacing: false,
            boosting: false,
            passed: false,
        }
    }

    /// Clear all round-scoped state. Inventory and name persist.
    ///
    /// `boosting` is turn-scoped and already cleared at every turn entry,
    /// but it is cleared here as well so a reset player is fully clean.
    pub fn reset(&mut self) {
        self.position = 0;
        self.carried.clear();
        self.surfacing = false;
        self.boosting = false;
        self.passed = false;
    }

    /// Whether this player still acts this round. A player parked at the
    /// surface with `surfacing` set has banked out and is skipped; anyone
    /// underwater, or waiting at the surface to dive, takes a turn.
    pub fn is_eligible(&self) -> bool {
        self.position > 0 || !self.surfacing
    }

    /// Air paid at every turn start: one per carried treasure.
    pub fn burden(&self) -> u32 {
        self.carried.len() as u32
    }

    /// Uppercased first letter of the name, for rendering.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}
