//! The depth track: an ordered sequence of treasure slots.

use crate::config::GameConfig;
use crate::env::RngOracle;

/// Ordered sequence of depth slots, each holding zero or more treasure
/// values. Slot index 0 is the shallowest; player position `p > 0` refers to
/// slot `p - 1`. Treasure only ever leaves the board after setup, except for
/// values dropped back by players and batches abandoned at round end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Vec<u32>>,
}

impl Board {
    /// Build a board of `slot_count` slots, each seeded with exactly one
    /// treasure value drawn from the depth band of its index.
    pub fn generate(slot_count: usize, rng: &mut dyn RngOracle) -> Self {
        let slots = (0..slot_count)
            .map(|index| {
                let (lo, hi) = GameConfig::treasure_band(index);
                vec![rng.range_inclusive(lo, hi)]
            })
            .collect();
        Self { slots }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> &[u32] {
        &self.slots[index]
    }

    pub fn slots(&self) -> &[Vec<u32>] {
        &self.slots
    }

    /// Take the top treasure value from the slot at `index`.
    pub fn grab(&mut self, index: usize) -> Option<u32> {
        self.slots.get_mut(index)?.pop()
    }

    /// Put a treasure value back on top of the slot at `index`.
    pub fn drop_at(&mut self, index: usize, value: u32) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.push(value);
        }
    }

    /// Append a brand-new slot at the deep end of the track. Used for
    /// treasure batches abandoned by players who failed to surface.
    pub fn push_slot(&mut self, values: Vec<u32>) {
        self.slots.push(values);
    }

    /// Remove all empty slots, preserving the relative order of the rest.
    ///
    /// Renumbers the depths of every surviving slot, so this must only run
    /// while every player is parked at the surface.
    pub fn compact(&mut self) {
        self.slots.retain(|slot| !slot.is_empty());
    }

    /// Total number of treasure values currently on the board.
    pub fn treasure_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};

    #[test]
    fn generate_seeds_one_treasure_per_slot_within_band() {
        let mut rng = PcgRng::new(99);
        let board = Board::generate(32, &mut rng);

        assert_eq!(board.slot_count(), 32);
        for index in 0..32 {
            let slot = board.slot(index);
            assert_eq!(slot.len(), 1);
            let (lo, hi) = GameConfig::treasure_band(index);
            assert!((lo..=hi).contains(&slot[0]), "slot {index} out of band");
        }
    }

    #[test]
    fn grab_takes_top_value_and_empties_slot() {
        let mut rng = SequenceRng::new(vec![0]);
        let mut board = Board::generate(4, &mut rng);
        board.drop_at(2, 12);

        assert_eq!(board.grab(2), Some(12));
        assert_eq!(board.grab(2), Some(0));
        assert_eq!(board.grab(2), None);
        assert!(board.slot(2).is_empty());
    }

    #[test]
    fn compact_removes_only_empty_slots_in_order() {
        let mut board = Board { slots: vec![vec![5], vec![], vec![7, 8], vec![], vec![9]] };
        board.compact();
        assert_eq!(board.slots(), &[vec![5], vec![7, 8], vec![9]]);
    }

    #[test]
    fn compact_on_full_board_removes_nothing() {
        let mut rng = PcgRng::new(1);
        let mut board = Board::generate(32, &mut rng);
        let before = board.treasure_count();
        board.compact();
        assert_eq!(board.slot_count(), 32);
        assert_eq!(board.treasure_count(), before);
    }

    #[test]
    fn push_slot_appends_at_deep_end() {
        let mut rng = PcgRng::new(1);
        let mut board = Board::generate(4, &mut rng);
        board.push_slot(vec![3, 7]);
        assert_eq!(board.slot_count(), 5);
        assert_eq!(board.slot(4), &[3, 7]);
    }
}
