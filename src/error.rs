//! Engine errors
//!
//! Only load-time and transition calls can fail. The per-tick path is total.

use thiserror::Error;

use crate::game_state::{Action, GamePhase};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("level index {index} is out of range (campaign has {count} levels)")]
    InvalidLevelIndex { index: usize, count: usize },

    #[error("level {level}: row {row} has {found} columns, expected {expected}")]
    MalformedLevelGrid {
        level: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("level {level} has no rows")]
    EmptyLevel { level: usize },

    #[error("campaign contains no levels")]
    EmptyCampaign,

    #[error("cannot {action:?} while in phase {phase:?}")]
    IllegalTransition { phase: GamePhase, action: Action },

    #[error("invalid RON document: {0}")]
    Config(#[from] ron::error::SpannedError),
}
