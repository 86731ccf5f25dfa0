//! Player state and movement
//!
//! Contains the controllable Player, the per-tick input intent, and the
//! physics integrator (acceleration, friction, gravity, coyote time, jump
//! buffering, variable jump height, squash/stretch relaxation).

use serde::{Deserialize, Serialize};

use crate::config::Tuning;

// =============================================================================
// CONSTANTS
// =============================================================================

// Squash/stretch targets (1.0 = neutral)
pub const JUMP_STRETCH_Y: f32 = 1.3;
pub const JUMP_STRETCH_X: f32 = 0.75;
pub const LAND_SQUASH_Y: f32 = 0.7;
pub const LAND_SQUASH_X: f32 = 1.3;

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Normalized input sampled once at the start of a tick. Serializable so
/// hosts can record a run and feed it back tick for tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    // Position (top-left corner) and velocity
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,

    // State
    pub grounded: bool,
    pub dead: bool,
    pub facing_right: bool,

    // Grace windows, in ticks (<= 0 means closed)
    pub coyote_timer: i32,
    pub jump_buffer_timer: i32,

    // Effects only, never read by physics
    pub squash_y: f32,
    pub scale_x: f32,
}

impl Player {
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            x: tuning.spawn_x,
            y: tuning.spawn_y,
            vx: 0.0,
            vy: 0.0,
            width: tuning.player_width,
            height: tuning.player_height,
            grounded: false,
            dead: false,
            facing_right: true,
            coyote_timer: 0,
            jump_buffer_timer: 0,
            squash_y: 1.0,
            scale_x: 1.0,
        }
    }

    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Squash on touching down
    pub fn land(&mut self) {
        self.squash_y = LAND_SQUASH_Y;
        self.scale_x = LAND_SQUASH_X;
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Strict overlap of two `(x, y, w, h)` boxes. Touching edges do not overlap.
pub fn aabb_overlap(a: (f32, f32, f32, f32), b: (f32, f32, f32, f32)) -> bool {
    let (x1, y1, w1, h1) = a;
    let (x2, y2, w2, h2) = b;
    x1 < x2 + w2 && x1 + w1 > x2 && y1 < y2 + h2 && y1 + h1 > y2
}

// =============================================================================
// PHYSICS
// =============================================================================

/// Advance velocities and grace timers by one tick. Position is left to the
/// collision resolver. Returns true if a jump fired this tick.
pub fn integrate(p: &mut Player, input: InputIntent, tuning: &Tuning) -> bool {
    // Horizontal acceleration. Both directions apply when both are held.
    if input.right {
        p.vx += tuning.acceleration;
    }
    if input.left {
        p.vx -= tuning.acceleration;
    }
    if input.right != input.left {
        p.facing_right = input.right;
    }

    // Friction, clamp, snap
    p.vx *= tuning.friction;
    p.vx = p.vx.clamp(-tuning.max_speed, tuning.max_speed);
    if p.vx.abs() < tuning.min_speed {
        p.vx = 0.0;
    }

    // Gravity
    p.vy += tuning.gravity;

    // Coyote window refreshes while grounded
    if p.grounded {
        p.coyote_timer = tuning.coyote_ticks;
    } else {
        p.coyote_timer = p.coyote_timer.saturating_sub(1);
    }

    // Jump buffer refreshes while jump is held
    if input.jump {
        p.jump_buffer_timer = tuning.jump_buffer_ticks;
    } else {
        p.jump_buffer_timer = p.jump_buffer_timer.saturating_sub(1);
    }

    let jumped = p.jump_buffer_timer > 0 && p.coyote_timer > 0;
    if jumped {
        p.vy = tuning.jump_force;
        p.jump_buffer_timer = 0;
        p.coyote_timer = 0;
        p.grounded = false;
        p.squash_y = JUMP_STRETCH_Y;
        p.scale_x = JUMP_STRETCH_X;
    }

    // Variable jump height
    if !input.jump && p.vy < 0.0 {
        p.vy *= tuning.jump_cut;
    }

    // Relax squash/stretch toward neutral
    p.squash_y += (1.0 - p.squash_y) * tuning.squash_relax;
    p.scale_x += (1.0 - p.scale_x) * tuning.squash_relax;

    jumped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_player(tuning: &Tuning) -> Player {
        let mut p = Player::spawn(tuning);
        p.grounded = true;
        p
    }

    #[test]
    fn friction_snaps_small_speeds_to_zero() {
        let tuning = Tuning::default();
        let mut p = grounded_player(&tuning);
        p.vx = 0.11;
        integrate(&mut p, InputIntent::default(), &tuning);
        assert_eq!(p.vx, 0.0);
    }

    #[test]
    fn holding_right_saturates_below_max_speed() {
        let tuning = Tuning::default();
        let mut p = grounded_player(&tuning);
        let right = InputIntent { right: true, ..Default::default() };
        for _ in 0..200 {
            integrate(&mut p, right, &tuning);
            p.vy = 0.0;
            assert!(p.vx <= tuning.max_speed);
        }
        assert!(p.vx > 0.0);
        assert!(p.facing_right);
    }

    #[test]
    fn opposite_inputs_cancel() {
        let tuning = Tuning::default();
        let mut p = grounded_player(&tuning);
        let both = InputIntent { left: true, right: true, jump: false };
        integrate(&mut p, both, &tuning);
        assert_eq!(p.vx, 0.0);
    }

    #[test]
    fn squash_relaxes_toward_neutral() {
        let tuning = Tuning::default();
        let mut p = grounded_player(&tuning);
        p.land();
        let before = (1.0 - p.squash_y).abs();
        integrate(&mut p, InputIntent::default(), &tuning);
        let after = (1.0 - p.squash_y).abs();
        assert!((after - before * 0.85).abs() < 1e-5);
    }

    #[test]
    fn recorded_input_reads_back_from_ron() {
        let recorded = "[(left: false, right: true, jump: false), (right: true, jump: true)]";
        let inputs: Vec<InputIntent> = ron::from_str(recorded).unwrap();
        assert_eq!(
            inputs,
            vec![
                InputIntent { left: false, right: true, jump: false },
                InputIntent { left: false, right: true, jump: true },
            ]
        );
    }

    #[test]
    fn overlap_is_strict() {
        assert!(aabb_overlap((0.0, 0.0, 10.0, 10.0), (5.0, 5.0, 10.0, 10.0)));
        assert!(!aabb_overlap((0.0, 0.0, 10.0, 10.0), (10.0, 0.0, 10.0, 10.0)));
    }
}
