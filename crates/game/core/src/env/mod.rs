//! Environment seams injected into the rules engine.
mod rng;

pub use rng::{PcgRng, RngOracle, SequenceRng};
