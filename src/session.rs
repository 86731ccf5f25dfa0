//! Simulation loop
//!
//! [`Session`] owns all mutable game state and advances it one tick per host
//! frame callback. The host feeds an [`InputIntent`], gets back a
//! [`WorldSnapshot`], and drains [`GameEvent`]s for audio and persistence.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::Camera;
use crate::collision::{self, Contact, DeathCause, Effect};
use crate::config::Tuning;
use crate::enemy::update_enemies;
use crate::error::EngineError;
use crate::game_state::{Action, GameEvent, GamePhase};
use crate::level::{Level, LevelSet};
use crate::particles::ParticleSystem;
use crate::player::{self, InputIntent, Player};
use crate::snapshot::{CameraView, PlayerView, TileView, WorldSnapshot};

pub struct Session {
    levels: LevelSet,
    tuning: Tuning,
    rng: StdRng,

    phase: GamePhase,
    character: Option<u32>,
    level_index: usize,
    level: Level,
    score: u32,
    coins: u32,

    player: Player,
    camera: Camera,
    particles: ParticleSystem,

    events: Vec<GameEvent>,
    effects: Vec<Effect>, // Scratch buffer reused across ticks
    frame: u64,
}

impl Session {
    /// New session in character select. Level 0 is preloaded so snapshots
    /// always have a world to show.
    pub fn new(levels: LevelSet, tuning: Tuning, seed: u64) -> Result<Self, EngineError> {
        let level = levels.load(0, tuning.tile_size)?;
        Ok(Self {
            player: Player::spawn(&tuning),
            particles: ParticleSystem::new(tuning.max_particles),
            camera: Camera::new(),
            rng: StdRng::seed_from_u64(seed),
            phase: GamePhase::SelectCharacter,
            character: None,
            level_index: 0,
            level,
            score: 0,
            coins: 0,
            events: Vec::new(),
            effects: Vec::new(),
            frame: 0,
            levels,
            tuning,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn character(&self) -> Option<u32> {
        self.character
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // LEVEL LOADING
    // =========================================================================

    /// Load (or reload) a level and respawn the player. Level 0 restarts the
    /// campaign totals; later levels keep them. Nothing changes on error.
    pub fn load_level(&mut self, index: usize) -> Result<(), EngineError> {
        let level = self.levels.load(index, self.tuning.tile_size)?;
        self.level = level;
        self.level_index = index;
        self.player = Player::spawn(&self.tuning);
        self.camera.x = 0.0;
        self.particles.clear();
        if index == 0 {
            self.score = 0;
            self.coins = 0;
        }
        Ok(())
    }

    // =========================================================================
    // PHASE TRANSITIONS
    // =========================================================================

    fn check(&self, action: Action) -> Result<GamePhase, EngineError> {
        self.phase.after(action).ok_or_else(|| {
            warn!("Rejected {:?} in phase {:?}", action, self.phase);
            EngineError::IllegalTransition {
                phase: self.phase,
                action,
            }
        })
    }

    fn enter(&mut self, phase: GamePhase) {
        info!("Phase {:?} -> {:?} (level {})", self.phase, phase, self.level_index);
        self.phase = phase;
    }

    /// Start a campaign with the chosen character
    pub fn confirm_character(&mut self, character: u32) -> Result<(), EngineError> {
        let next = self.check(Action::ConfirmCharacter)?;
        self.load_level(0)?;
        self.character = Some(character);
        self.enter(next);
        Ok(())
    }

    /// Reload the current level after a death
    pub fn retry(&mut self) -> Result<(), EngineError> {
        let next = self.check(Action::Retry)?;
        self.load_level(self.level_index)?;
        self.enter(next);
        Ok(())
    }

    /// Advance to the following level, keeping score and coins
    pub fn next_level(&mut self) -> Result<(), EngineError> {
        let next = self.check(Action::NextLevel)?;
        self.load_level(self.level_index + 1)?;
        self.enter(next);
        Ok(())
    }

    /// Back to character select with everything reset
    pub fn exit(&mut self) -> Result<(), EngineError> {
        let next = self.check(Action::Exit)?;
        self.load_level(0)?;
        self.camera = Camera::new();
        self.character = None;
        self.enter(next);
        Ok(())
    }

    // =========================================================================
    // TICK
    // =========================================================================

    /// Advance one tick. Outside `Playing` only cosmetic state moves.
    pub fn tick(&mut self, input: InputIntent) -> WorldSnapshot {
        self.frame += 1;

        if self.phase.is_playing() {
            self.step(input);
        }

        self.particles
            .update(self.tuning.particle_drift, self.tuning.particle_decay);
        self.camera
            .update(&self.player, self.level.width_px, &self.tuning);

        self.snapshot()
    }

    fn step(&mut self, input: InputIntent) {
        if player::integrate(&mut self.player, input, &self.tuning) {
            let (cx, _) = self.player.center();
            let feet = self.player.bottom();
            self.particles.spawn_jump_puff(cx, feet, &mut self.rng);
            self.events.push(GameEvent::Jumped);
            debug!("Jump at ({:.1}, {:.1})", self.player.x, self.player.y);
        }

        let mut effects = std::mem::take(&mut self.effects);
        effects.clear();
        let contact = collision::step(
            &mut self.player,
            &mut self.level.tiles,
            self.level.height_px,
            self.tuning.stomp_bounce,
            &mut effects,
        );
        for effect in effects.drain(..) {
            self.apply_effect(effect);
        }
        self.effects = effects;

        match contact {
            Some(Contact::Killed(cause)) => self.die(cause),
            Some(Contact::ReachedGoal) => self.reach_goal(),
            None => update_enemies(&mut self.level.tiles, &self.tuning, &mut self.rng),
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Collected { x, y } => {
                self.coins += 1;
                self.score += self.tuning.coin_score;
                self.particles.spawn_coin_sparkle(x, y, &mut self.rng);
                self.events.push(GameEvent::CoinCollected);
            }
            Effect::Stomped { boss, x, y } => {
                let (points, shake) = if boss {
                    (self.tuning.boss_score, self.tuning.boss_shake)
                } else {
                    (self.tuning.enemy_score, self.tuning.stomp_shake)
                };
                self.score += points;
                self.camera.trigger_shake(shake);
                self.particles.spawn_stomp_burst(x, y, boss, &mut self.rng);
                self.events.push(GameEvent::EnemyDefeated { boss });
            }
            Effect::Landed => {
                self.player.land();
                let (cx, _) = self.player.center();
                let feet = self.player.bottom();
                self.particles.spawn_landing_dust(cx, feet, &mut self.rng);
                self.events.push(GameEvent::Landed);
            }
        }
    }

    fn die(&mut self, cause: DeathCause) {
        info!("Player died ({:?}) on level {}", cause, self.level_index);
        self.player.dead = true;
        self.camera.trigger_shake(self.tuning.death_shake);
        let (cx, cy) = self.player.center();
        self.particles.spawn_death_burst(cx, cy, &mut self.rng);
        self.events.push(GameEvent::Died { cause });
        self.enter(GamePhase::Dead);
    }

    fn reach_goal(&mut self) {
        if self.level_index < self.levels.last_index() {
            self.events.push(GameEvent::LevelCleared {
                level: self.level_index,
            });
            self.enter(GamePhase::LevelCleared);
        } else {
            self.score += self.tuning.completion_bonus;
            info!("Campaign cleared, final score {}", self.score);
            self.events.push(GameEvent::RunCompleted {
                final_score: self.score,
            });
            self.enter(GamePhase::CampaignCleared);
        }
    }

    // =========================================================================
    // SNAPSHOT
    // =========================================================================

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame: self.frame,
            phase: self.phase,
            level_index: self.level_index,
            character: self.character,
            score: self.score,
            coins: self.coins,
            level_width: self.level.width_px,
            level_height: self.level.height_px,
            camera: CameraView::from(&self.camera),
            player: PlayerView::from(&self.player),
            tiles: self.level.live_tiles().map(TileView::from).collect(),
            particles: self.particles.particles().to_vec(),
        }
    }
}
