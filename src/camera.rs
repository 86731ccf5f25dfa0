//! Camera controller
//!
//! Horizontal follow with a look-ahead in the facing direction, eased with a
//! single-pole filter and clamped to the level. Also owns screen shake.

use rand::Rng;

use crate::config::Tuning;
use crate::player::Player;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
    /// Shake intensity (0.0 - 1.0)
    pub shake: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest valid scroll offset for a level
    pub fn max_x(level_width: f32, viewport_width: f32) -> f32 {
        (level_width - viewport_width).max(0.0)
    }

    /// Trigger screen shake. A weaker shake never overrides a stronger one.
    pub fn trigger_shake(&mut self, intensity: f32) {
        self.shake = self.shake.max(intensity.min(1.0));
    }

    pub fn update(&mut self, player: &Player, level_width: f32, tuning: &Tuning) {
        let look_ahead = if player.facing_right {
            tuning.camera_look_ahead
        } else {
            -tuning.camera_look_ahead
        };
        let target = player.x - tuning.camera_lead + look_ahead;

        self.x += (target - self.x) * tuning.camera_easing;
        self.x = self.x.clamp(0.0, Self::max_x(level_width, tuning.viewport_width));

        self.shake *= tuning.shake_decay;
        if self.shake < tuning.shake_threshold {
            self.shake = 0.0;
        }
    }

    /// Jitter for the renderer, bounded by `max_px * shake` on each axis
    pub fn shake_offset(&self, max_px: f32, rng: &mut impl Rng) -> (f32, f32) {
        if self.shake <= 0.0 {
            return (0.0, 0.0);
        }
        let amount = self.shake * max_px;
        (
            rng.gen_range(-1.0f32..=1.0) * amount,
            rng.gen_range(-1.0f32..=1.0) * amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player_at(x: f32, facing_right: bool) -> Player {
        let mut p = Player::spawn(&Tuning::default());
        p.x = x;
        p.facing_right = facing_right;
        p
    }

    #[test]
    fn camera_stays_inside_level() {
        let tuning = Tuning::default();
        let mut cam = Camera::new();
        for (x, facing) in [(0.0, false), (1990.0, true), (1000.0, true), (-500.0, false), (5000.0, true)] {
            let p = player_at(x, facing);
            for _ in 0..300 {
                cam.update(&p, 2000.0, &tuning);
                assert!(cam.x >= 0.0 && cam.x <= 1200.0, "camera at {}", cam.x);
            }
        }
    }

    #[test]
    fn camera_eases_ten_percent() {
        let tuning = Tuning::default();
        let mut cam = Camera::new();
        let p = player_at(1000.0, true);
        cam.update(&p, 4000.0, &tuning);
        let target = 1000.0 - tuning.camera_lead + tuning.camera_look_ahead;
        assert!((cam.x - target * 0.1).abs() < 1e-3);
    }

    #[test]
    fn narrow_level_pins_camera_to_zero() {
        let tuning = Tuning::default();
        let mut cam = Camera::new();
        cam.update(&player_at(600.0, true), 400.0, &tuning);
        assert_eq!(cam.x, 0.0);
    }

    #[test]
    fn shake_decays_and_snaps() {
        let tuning = Tuning::default();
        let mut cam = Camera::new();
        cam.trigger_shake(0.8);
        let p = player_at(0.0, true);
        cam.update(&p, 2000.0, &tuning);
        assert!((cam.shake - 0.72).abs() < 1e-5);
        for _ in 0..100 {
            cam.update(&p, 2000.0, &tuning);
        }
        assert_eq!(cam.shake, 0.0);
    }

    #[test]
    fn shake_offset_is_bounded() {
        let mut rng = StdRng::seed_from_u64(4);
        let cam = Camera { x: 0.0, shake: 0.5 };
        for _ in 0..100 {
            let (dx, dy) = cam.shake_offset(8.0, &mut rng);
            assert!(dx.abs() <= 4.0 && dy.abs() <= 4.0);
        }
        assert_eq!(Camera::new().shake_offset(8.0, &mut rng), (0.0, 0.0));
    }
}
