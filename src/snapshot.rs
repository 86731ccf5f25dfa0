//! Read-only world snapshot handed to the renderer after each tick

use serde::Serialize;

use crate::camera::Camera;
use crate::game_state::GamePhase;
use crate::level::{Tile, TileKind};
use crate::particles::Particle;
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraView {
    pub x: f32,
    pub shake: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub facing_right: bool,
    pub squash_y: f32,
    pub scale_x: f32,
    pub grounded: bool,
    pub dead: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TileView {
    pub kind: TileKind,
    pub x: f32,
    pub y: f32,
    pub phase: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub level_index: usize,
    pub character: Option<u32>,
    pub score: u32,
    pub coins: u32,
    pub level_width: f32,
    pub level_height: f32,
    pub camera: CameraView,
    pub player: PlayerView,
    /// Live tiles only, in level order
    pub tiles: Vec<TileView>,
    pub particles: Vec<Particle>,
}

impl From<&Camera> for CameraView {
    fn from(c: &Camera) -> Self {
        Self { x: c.x, shake: c.shake }
    }
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            x: p.x,
            y: p.y,
            vx: p.vx,
            vy: p.vy,
            width: p.width,
            height: p.height,
            facing_right: p.facing_right,
            squash_y: p.squash_y,
            scale_x: p.scale_x,
            grounded: p.grounded,
            dead: p.dead,
        }
    }
}

impl From<&Tile> for TileView {
    fn from(t: &Tile) -> Self {
        Self {
            kind: t.kind,
            x: t.x,
            y: t.y,
            phase: t.patrol.map(|p| p.phase).unwrap_or(0),
        }
    }
}
