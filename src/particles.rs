//! Particle system for visual effects
//!
//! Particles are cosmetic. Spawn counts per effect are fixed so runs stay
//! reproducible; only directions and speeds are random.

use core::f32::consts::{FRAC_PI_2, TAU};

use rand::Rng;
use serde::Serialize;

// =============================================================================
// CONSTANTS
// =============================================================================

pub const COIN_PARTICLES: usize = 8;
pub const JUMP_PARTICLES: usize = 5;
pub const LANDING_PARTICLES: usize = 4;
pub const STOMP_PARTICLES: usize = 10;
pub const BOSS_STOMP_PARTICLES: usize = 20;
pub const DEATH_PARTICLES: usize = 12;

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// What spawned the particle; the renderer picks colors from it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ParticleColor {
    Gold,  // Coin pickup
    Dust,  // Jump and landing
    Spark, // Enemy stomp
    Flare, // Boss stomp
    Blood, // Death
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: f32, // 1.0 at spawn, removed at <= 0
    pub color: ParticleColor,
}

/// Launch cone: center angle and half-width in radians. Screen space, so
/// `-FRAC_PI_2` points up.
#[derive(Clone, Copy, Debug)]
struct Cone {
    center: f32,
    spread: f32,
    min_speed: f32,
    max_speed: f32,
}

const UP_CONE: Cone = Cone {
    center: -FRAC_PI_2,
    spread: 1.0,
    min_speed: 1.5,
    max_speed: 4.0,
};

const DUST_CONE: Cone = Cone {
    center: -FRAC_PI_2,
    spread: 1.4,
    min_speed: 0.5,
    max_speed: 1.5,
};

const BURST: Cone = Cone {
    center: 0.0,
    spread: TAU / 2.0,
    min_speed: 2.0,
    max_speed: 5.0,
};

// =============================================================================
// SYSTEM
// =============================================================================

#[derive(Clone, Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    capacity: usize,
}

impl ParticleSystem {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn spawn(&mut self, x: f32, y: f32, count: usize, cone: Cone, color: ParticleColor, rng: &mut impl Rng) {
        for _ in 0..count {
            if self.particles.len() >= self.capacity {
                return;
            }
            let angle = cone.center + rng.gen_range(-cone.spread..=cone.spread);
            let speed = rng.gen_range(cone.min_speed..=cone.max_speed);
            self.particles.push(Particle {
                x,
                y,
                vx: libm::cosf(angle) * speed,
                vy: libm::sinf(angle) * speed,
                life: 1.0,
                color,
            });
        }
    }

    pub fn spawn_coin_sparkle(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.spawn(x, y, COIN_PARTICLES, UP_CONE, ParticleColor::Gold, rng);
    }

    pub fn spawn_jump_puff(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.spawn(x, y, JUMP_PARTICLES, DUST_CONE, ParticleColor::Dust, rng);
    }

    pub fn spawn_landing_dust(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.spawn(x, y, LANDING_PARTICLES, DUST_CONE, ParticleColor::Dust, rng);
    }

    pub fn spawn_stomp_burst(&mut self, x: f32, y: f32, boss: bool, rng: &mut impl Rng) {
        if boss {
            self.spawn(x, y, BOSS_STOMP_PARTICLES, BURST, ParticleColor::Flare, rng);
        } else {
            self.spawn(x, y, STOMP_PARTICLES, UP_CONE, ParticleColor::Spark, rng);
        }
    }

    pub fn spawn_death_burst(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.spawn(x, y, DEATH_PARTICLES, BURST, ParticleColor::Blood, rng);
    }

    /// Move, drift and age every particle; drop the expired ones
    pub fn update(&mut self, drift: f32, decay: f32) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += drift;
            p.life -= decay;
        }
        self.particles.retain(|p| p.life > 0.0);
    }
}
