//! Shared per-round resources.

/// Round-scoped shared state. Air is the single depletable resource racing
/// the players; it never increases within a round and never goes below 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundState {
    number: u32,
    air: u32,
}

impl RoundState {
    pub fn new(number: u32, starting_air: u32) -> Self {
        Self {
            number,
            air: starting_air,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn air(&self) -> u32 {
        self.air
    }

    /// The only mutation path for air. Floors at zero.
    pub fn reduce_air(&mut self, amount: u32) {
        self.air = self.air.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_air_floors_at_zero() {
        let mut round = RoundState::new(1, 25);
        round.reduce_air(10);
        assert_eq!(round.air(), 15);
        round.reduce_air(20);
        assert_eq!(round.air(), 0);
        round.reduce_air(1);
        assert_eq!(round.air(), 0);
    }
}
