//! Unified error type surfaced by the session API.
//!
//! There is no recoverable-error taxonomy in normal play: every input is a
//! choice among offered options. What can fail is the plumbing (I/O in a
//! provider) or a collaborator breaking its contract by answering outside
//! the offered set — both are fatal to the session.

use thiserror::Error;

use game_core::{ApplyError, InitializationError, TurnAction};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("decision provider chose \"{chosen}\", which was not offered")]
    ChoiceOutsideMenu { chosen: TurnAction },

    #[error("rules rejected an action")]
    Apply(#[from] ApplyError),

    #[error("invalid initial game state")]
    InitialState(#[from] InitializationError),

    #[error("input/output failure while collecting a decision")]
    Io(#[from] std::io::Error),
}
