//! RELIC RUN - Platformer engine for the museum reward mini-game
//!
//! A single-player tile platformer: coyote time, jump buffering, stompable
//! enemies, a patrolling boss, and a three-level campaign. The engine is
//! headless. Hosts drive [`Session::tick`] once per frame, paint the returned
//! [`WorldSnapshot`], and forward [`GameEvent::RunCompleted`] to whatever
//! stores scores.

pub mod camera;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod error;
pub mod game_state;
pub mod level;
pub mod particles;
pub mod player;
pub mod session;
pub mod snapshot;

pub use camera::Camera;
pub use collision::{Contact, DeathCause, Effect};
pub use config::Tuning;
pub use error::EngineError;
pub use game_state::{Action, GameEvent, GamePhase};
pub use level::{default_levels, Level, LevelDef, LevelSet, Tile, TileKind};
pub use particles::{Particle, ParticleColor};
pub use player::{InputIntent, Player};
pub use session::Session;
pub use snapshot::WorldSnapshot;
