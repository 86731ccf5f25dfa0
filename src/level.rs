//! Level model
//!
//! Levels are authored as rectangular character grids. Loading a level turns
//! the grid into a flat list of tiles in row-major order; that order is also
//! the order the collision resolver tests them in.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// =============================================================================
// DATA STRUCTURES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Solid,
    Collectible,
    HazardSpike,
    HazardEnemy,
    HazardBoss,
    Goal,
    Empty,
}

impl TileKind {
    /// Map a grid character to a tile kind. Unknown characters are empty.
    pub fn from_char(c: char) -> Self {
        match c {
            '#' => TileKind::Solid,
            'o' => TileKind::Collectible,
            '^' => TileKind::HazardSpike,
            'E' => TileKind::HazardEnemy,
            'B' => TileKind::HazardBoss,
            'G' => TileKind::Goal,
            _ => TileKind::Empty,
        }
    }

    /// Enemies and bosses move and can be stomped
    pub fn is_creature(self) -> bool {
        matches!(self, TileKind::HazardEnemy | TileKind::HazardBoss)
    }
}

/// Patrol state for enemy and boss tiles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Patrol {
    pub origin_x: f32,
    pub origin_y: f32,
    pub vx: f32,
    pub vy: f32,
    pub phase: u32, // Animation phase, advanced once per tick
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub col: usize,
    pub row: usize,
    pub kind: TileKind,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Collected (coins) or defeated (enemies, bosses). Only ever goes false -> true.
    pub cleared: bool,
    pub patrol: Option<Patrol>,
}

impl Tile {
    pub fn new(col: usize, row: usize, kind: TileKind, size: f32) -> Self {
        let x = col as f32 * size;
        let y = row as f32 * size;
        let patrol = kind.is_creature().then_some(Patrol {
            origin_x: x,
            origin_y: y,
            vx: 0.0,
            vy: 0.0,
            phase: 0,
        });
        Self {
            col,
            row,
            kind,
            x,
            y,
            size,
            cleared: false,
            patrol,
        }
    }

    /// Still present in the world (not collected or defeated)
    pub fn is_live(&self) -> bool {
        !self.cleared
    }

    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.size, self.size)
    }
}

/// One authored level: a name and its character rows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub rows: Vec<String>,
}

impl LevelDef {
    pub fn new(name: &str, rows: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn validate(&self, level: usize) -> Result<(), EngineError> {
        let expected = match self.rows.first() {
            Some(first) => first.chars().count(),
            None => return Err(EngineError::EmptyLevel { level }),
        };
        for (row, line) in self.rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(EngineError::MalformedLevelGrid {
                    level,
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

/// A level loaded for play. Owns its tiles for the lifetime of the attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub index: usize,
    pub name: String,
    pub tiles: Vec<Tile>,
    pub width_px: f32,
    pub height_px: f32,
}

impl Level {
    pub fn live_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_live())
    }

    /// Tile at a grid coordinate, if one was emitted there
    pub fn tile_at(&self, col: usize, row: usize) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.col == col && t.row == row)
    }
}

// =============================================================================
// CAMPAIGN
// =============================================================================

/// Ordered, validated list of level definitions.
///
/// Definitions are immutable; every load parses a fresh [`Level`], so a
/// reload restores all tile flags and never touches other levels.
#[derive(Clone, Debug)]
pub struct LevelSet {
    defs: Vec<LevelDef>,
}

impl LevelSet {
    pub fn new(defs: Vec<LevelDef>) -> Result<Self, EngineError> {
        if defs.is_empty() {
            return Err(EngineError::EmptyCampaign);
        }
        for (i, def) in defs.iter().enumerate() {
            def.validate(i)?;
        }
        Ok(Self { defs })
    }

    /// Parse a RON list of `(name: .., rows: [..])` entries and validate it
    pub fn from_ron(source: &str) -> Result<Self, EngineError> {
        let defs: Vec<LevelDef> = ron::from_str(source)?;
        Self::new(defs)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.defs.len() - 1
    }

    pub fn def(&self, index: usize) -> Option<&LevelDef> {
        self.defs.get(index)
    }

    pub fn load(&self, index: usize, tile_size: f32) -> Result<Level, EngineError> {
        let def = self.defs.get(index).ok_or(EngineError::InvalidLevelIndex {
            index,
            count: self.defs.len(),
        })?;

        let mut tiles = Vec::new();
        for (row, line) in def.rows.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                let kind = TileKind::from_char(c);
                if kind != TileKind::Empty {
                    tiles.push(Tile::new(col, row, kind, tile_size));
                }
            }
        }

        let cols = def.rows[0].chars().count();
        let level = Level {
            index,
            name: def.name.clone(),
            tiles,
            width_px: cols as f32 * tile_size,
            height_px: def.rows.len() as f32 * tile_size,
        };
        info!(
            "Loaded level {} \"{}\" ({} tiles, {}x{} px)",
            index,
            level.name,
            level.tiles.len(),
            level.width_px,
            level.height_px
        );
        Ok(level)
    }
}

// =============================================================================
// BUILT-IN LEVELS
// =============================================================================

fn level_entrance_hall() -> LevelDef {
    LevelDef::new(
        "Entrance Hall",
        &[
            ".......................................#",
            ".......................................#",
            ".......................................#",
            "......................ooo.....^^^......#",
            ".....................#####...#####.....#",
            "...............................ooo.....#",
            "...............ooo.............###.....#",
            "..............#####....................#",
            ".......................................#",
            "......o.o.o.........#..........o.o.o..G#",
            "########################################",
            "########################################",
        ],
    )
}

fn level_sculpture_gallery() -> LevelDef {
    LevelDef::new(
        "Sculpture Gallery",
        &[
            ".................................................#",
            ".................................................#",
            "...........ooo...................ooo.............#",
            "............E.....................E..............#",
            "..........#####.......ooo......#####.............#",
            "......................###........................#",
            ".....ooo......................ooo................#",
            "....#####.........ooo........#####...............#",
            ".................................................#",
            "...o.o.o......#.........o.o.o.........#.........G#",
            "##################################################",
            "##################################################",
        ],
    )
}

fn level_vault() -> LevelDef {
    LevelDef::new(
        "The Vault",
        &[
            ".......................................#",
            ".......................................#",
            "..........ooo.......ooo.........ooo....#",
            "...........E........B..................#",
            ".........#####.###########......#####..#",
            ".......................................#",
            "....ooo....................ooo.........#",
            "...#####..................####.........#",
            ".......................................#",
            "..o.o.o.......o.o.o.........o.o.o.....G#",
            "########################################",
            "########################################",
        ],
    )
}

/// The campaign shipped with the game
pub fn default_levels() -> Vec<LevelDef> {
    vec![
        level_entrance_hall(),
        level_sculpture_gallery(),
        level_vault(),
    ]
}
