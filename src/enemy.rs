//! Enemy behavior
//!
//! Enemies and bosses walk a bounded patrol around their spawn anchor. Bosses
//! also hop now and then and fall back to their spawn height.

use rand::Rng;

use crate::config::Tuning;
use crate::level::{Tile, TileKind};

/// Advance every live creature tile by one tick. Defeated ones stay put.
pub fn update_enemies(tiles: &mut [Tile], tuning: &Tuning, rng: &mut impl Rng) {
    for tile in tiles.iter_mut() {
        if !tile.is_live() {
            continue;
        }
        let boss = tile.kind == TileKind::HazardBoss;
        let Some(patrol) = tile.patrol.as_mut() else {
            continue;
        };

        let (speed, range) = if boss {
            (tuning.boss_speed, tuning.boss_range)
        } else {
            (tuning.enemy_speed, tuning.enemy_range)
        };

        // First tick: start walking
        if patrol.vx == 0.0 {
            patrol.vx = speed;
        }

        tile.x += patrol.vx;
        let offset = tile.x - patrol.origin_x;
        if offset.abs() >= range {
            tile.x = patrol.origin_x + range * offset.signum();
            patrol.vx = -patrol.vx;
        }

        if boss {
            let on_floor = tile.y >= patrol.origin_y;
            if on_floor && rng.gen_bool(tuning.boss_hop_chance.clamp(0.0, 1.0)) {
                patrol.vy = tuning.boss_hop_force;
            }
            patrol.vy += tuning.gravity;
            tile.y += patrol.vy;
            if tile.y >= patrol.origin_y {
                tile.y = patrol.origin_y;
                patrol.vy = 0.0;
            }
        }

        patrol.phase = patrol.phase.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn enemy_stays_within_patrol_range() {
        let tuning = Tuning::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut tiles = vec![Tile::new(5, 5, TileKind::HazardEnemy, 40.0)];
        let origin = tiles[0].x;
        let mut reversed = false;
        for _ in 0..500 {
            let before = tiles[0].patrol.unwrap().vx;
            update_enemies(&mut tiles, &tuning, &mut rng);
            assert!((tiles[0].x - origin).abs() <= tuning.enemy_range + 1e-3);
            if before != 0.0 && tiles[0].patrol.unwrap().vx != before {
                reversed = true;
            }
        }
        assert!(reversed);
    }

    #[test]
    fn boss_never_sinks_below_spawn_height() {
        let tuning = Tuning {
            boss_hop_chance: 0.5,
            ..Tuning::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut tiles = vec![Tile::new(10, 4, TileKind::HazardBoss, 40.0)];
        let origin_y = tiles[0].y;
        let mut hopped = false;
        for _ in 0..300 {
            update_enemies(&mut tiles, &tuning, &mut rng);
            assert!(tiles[0].y <= origin_y);
            if tiles[0].y < origin_y {
                hopped = true;
            }
        }
        assert!(hopped);
    }

    #[test]
    fn defeated_enemies_do_not_move() {
        let tuning = Tuning::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut tiles = vec![Tile::new(2, 2, TileKind::HazardEnemy, 40.0)];
        tiles[0].cleared = true;
        let before = tiles[0].clone();
        update_enemies(&mut tiles, &tuning, &mut rng);
        assert_eq!(tiles[0], before);
    }
}
