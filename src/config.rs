//! Engine tuning
//!
//! Every gameplay constant lives in [`Tuning`] so hosts can retune feel
//! without touching the engine. Defaults are tuned for a 40px tile at 60
//! ticks per second.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Fixed simulation rate the defaults are tuned for
pub const TICKS_PER_SECOND: u32 = 60;

/// Default tile edge in pixels
pub const TILE_SIZE: f32 = 40.0;

// =============================================================================
// TUNING
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // Grid
    pub tile_size: f32,

    // Physics (per tick)
    pub gravity: f32,
    pub friction: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    pub jump_force: f32,       // Negative = upward
    pub jump_cut: f32,         // vy multiplier while rising with jump released
    pub min_speed: f32,        // |vx| below this snaps to 0
    pub coyote_ticks: i32,
    pub jump_buffer_ticks: i32,
    pub squash_relax: f32,     // Fraction of remaining distance to 1.0 per tick

    // Player body
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub stomp_bounce: f32,

    // Scoring
    pub coin_score: u32,
    pub enemy_score: u32,
    pub boss_score: u32,
    pub completion_bonus: u32,

    // Camera
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub camera_lead: f32,
    pub camera_look_ahead: f32,
    pub camera_easing: f32,
    pub shake_decay: f32,
    pub shake_threshold: f32,
    pub shake_px: f32,
    pub death_shake: f32,
    pub stomp_shake: f32,
    pub boss_shake: f32,

    // Enemies
    pub enemy_speed: f32,
    pub enemy_range: f32,
    pub boss_speed: f32,
    pub boss_range: f32,
    pub boss_hop_chance: f64,
    pub boss_hop_force: f32,

    // Particles
    pub particle_decay: f32,
    pub particle_drift: f32,
    pub max_particles: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,

            gravity: 0.6,
            friction: 0.82,
            acceleration: 0.8,
            max_speed: 7.0,
            jump_force: -14.0,
            jump_cut: 0.5,
            min_speed: 0.1,
            coyote_ticks: 6,
            jump_buffer_ticks: 5,
            squash_relax: 0.15,

            player_width: 30.0,
            player_height: 40.0,
            spawn_x: 50.0,
            spawn_y: 50.0,
            stomp_bounce: -8.0,

            coin_score: 100,
            enemy_score: 200,
            boss_score: 1000,
            completion_bonus: 500,

            viewport_width: 800.0,
            viewport_height: 600.0,
            camera_lead: 350.0,
            camera_look_ahead: 60.0,
            camera_easing: 0.1,
            shake_decay: 0.9,
            shake_threshold: 0.01,
            shake_px: 8.0,
            death_shake: 0.8,
            stomp_shake: 0.2,
            boss_shake: 0.5,

            enemy_speed: 1.0,
            enemy_range: 60.0,
            boss_speed: 1.5,
            boss_range: 100.0,
            boss_hop_chance: 0.02,
            boss_hop_force: -6.0,

            particle_decay: 0.03,
            particle_drift: 0.15,
            max_particles: 256,
        }
    }
}

impl Tuning {
    /// Parse a RON document. Missing fields keep their defaults.
    pub fn from_ron(source: &str) -> Result<Self, EngineError> {
        Ok(ron::from_str(source)?)
    }
}
