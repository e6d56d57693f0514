//! Session orchestration for the deep-sea diving board game.
//!
//! The rules live in `game-core`; this crate drives them. A [`GameSession`]
//! owns the state and loops rounds, sweeps, and turns, pulling every
//! interactive decision from a [`DecisionProvider`] (human input, scripted
//! fixtures) and reporting observable moments to a [`GameObserver`]
//! (rendering, logging, test probes). Everything is synchronous: the game is
//! one sequential control flow that blocks at each decision point.
mod error;
mod providers;
mod session;

pub use error::{Result, RuntimeError};
pub use providers::{DecisionProvider, GameObserver, NullObserver, TurnContext};
pub use session::GameSession;
