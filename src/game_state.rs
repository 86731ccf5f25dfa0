//! Game state management
//!
//! Contains the session phase machine and the events a tick can emit.

use serde::Serialize;

use crate::collision::DeathCause;

/// Represents the current phase of the session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    SelectCharacter, // Initial phase, waiting for a character
    Playing,         // Active gameplay
    LevelCleared,    // Goal reached, more levels remain
    Dead,            // Frozen until retry
    CampaignCleared, // Final goal reached, terminal until exit
}

/// Host requests that move the phase machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ConfirmCharacter,
    Retry,
    NextLevel,
    Exit,
}

impl GamePhase {
    /// Phase reached by `action`, or `None` if the request is not valid here.
    /// Gameplay outcomes (death, goal) are driven by the tick, not by actions.
    pub fn after(self, action: Action) -> Option<GamePhase> {
        match (self, action) {
            (GamePhase::SelectCharacter, Action::ConfirmCharacter) => Some(GamePhase::Playing),
            (GamePhase::Dead, Action::Retry) => Some(GamePhase::Playing),
            (GamePhase::LevelCleared, Action::NextLevel) => Some(GamePhase::Playing),
            (GamePhase::SelectCharacter, Action::Exit) => None,
            (_, Action::Exit) => Some(GamePhase::SelectCharacter),
            _ => None,
        }
    }

    pub fn is_playing(self) -> bool {
        self == GamePhase::Playing
    }
}

/// Things that happened during a tick, for audio and persistence hosts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    CoinCollected,
    EnemyDefeated { boss: bool },
    Died { cause: DeathCause },
    LevelCleared { level: usize },
    /// Emitted once when the final goal is reached
    RunCompleted { final_score: u32 },
}
