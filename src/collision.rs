//! Collision resolver
//!
//! Moves the player along X then Y and resolves each axis against the live
//! tiles in level order. Side effects on score, particles and phase are not
//! applied here; they are reported as [`Effect`]s and a terminal [`Contact`]
//! for the session to act on.

use log::debug;
use serde::Serialize;

use crate::level::{Tile, TileKind};
use crate::player::{aabb_overlap, Player};

// =============================================================================
// DATA STRUCTURES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DeathCause {
    Spike,
    Enemy,
    Boss,
    Fell,
}

/// Outcome that ends collision processing for the tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    Killed(DeathCause),
    ReachedGoal,
}

/// Non-terminal interactions, in the order they happened
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    Collected { x: f32, y: f32 },
    Stomped { boss: bool, x: f32, y: f32 },
    Landed,
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Run both axis passes and the fall-through check for one tick.
///
/// Grounded state is recomputed by the Y pass.
pub fn step(
    p: &mut Player,
    tiles: &mut [Tile],
    level_height: f32,
    stomp_bounce: f32,
    effects: &mut Vec<Effect>,
) -> Option<Contact> {
    let was_grounded = p.grounded;
    let start_bottom = p.bottom();

    p.x += p.vx;
    if let Some(contact) = resolve_axis(p, tiles, Axis::X, start_bottom, stomp_bounce, effects) {
        return Some(contact);
    }

    p.y += p.vy;
    p.grounded = false;
    if let Some(contact) = resolve_axis(p, tiles, Axis::Y, start_bottom, stomp_bounce, effects) {
        return Some(contact);
    }

    if !was_grounded && p.grounded {
        effects.push(Effect::Landed);
    }

    if p.y > level_height {
        return Some(Contact::Killed(DeathCause::Fell));
    }
    None
}

/// Resolve one axis against every live tile in level order. The first
/// lethal or goal contact wins and stops the pass.
///
/// A stomp bounce is applied only once the pass is done, so solids later in
/// the pass still see the player falling and clamp to their top.
pub fn resolve_axis(
    p: &mut Player,
    tiles: &mut [Tile],
    axis: Axis,
    start_bottom: f32,
    stomp_bounce: f32,
    effects: &mut Vec<Effect>,
) -> Option<Contact> {
    let mut stomped = false;

    for tile in tiles.iter_mut() {
        if !tile.is_live() || !aabb_overlap(p.bounds(), tile.bounds()) {
            continue;
        }

        match tile.kind {
            TileKind::Collectible => {
                tile.cleared = true;
                effects.push(Effect::Collected {
                    x: tile.x + tile.size / 2.0,
                    y: tile.y + tile.size / 2.0,
                });
                debug!("Collected coin at ({}, {})", tile.col, tile.row);
            }

            TileKind::HazardEnemy | TileKind::HazardBoss => {
                let boss = tile.kind == TileKind::HazardBoss;
                let stomp_line = tile.y + tile.size / 3.0;
                if p.vy > 0.0 && start_bottom <= stomp_line {
                    tile.cleared = true;
                    stomped = true;
                    effects.push(Effect::Stomped {
                        boss,
                        x: tile.x + tile.size / 2.0,
                        y: tile.y,
                    });
                    debug!("Stomped {} at ({}, {})", if boss { "boss" } else { "enemy" }, tile.x, tile.y);
                } else {
                    let cause = if boss { DeathCause::Boss } else { DeathCause::Enemy };
                    return Some(Contact::Killed(cause));
                }
            }

            TileKind::Goal => return Some(Contact::ReachedGoal),

            TileKind::HazardSpike => return Some(Contact::Killed(DeathCause::Spike)),

            TileKind::Solid => match axis {
                Axis::X => {
                    if p.vx > 0.0 {
                        p.x = tile.x - p.width;
                    } else if p.vx < 0.0 {
                        p.x = tile.x + tile.size;
                    }
                    p.vx = 0.0;
                }
                Axis::Y => {
                    if p.vy > 0.0 {
                        p.y = tile.y - p.height;
                        p.grounded = true;
                    } else if p.vy < 0.0 {
                        // Head bump
                        p.y = tile.y + tile.size;
                    }
                    p.vy = 0.0;
                }
            },

            TileKind::Empty => {}
        }
    }

    if stomped {
        p.vy = stomp_bounce;
        p.grounded = false;
    }
    None
}
