//! Brick layouts
//!
//! A level file is a grid of small integers, one row per line:
//! - `0`: empty cell
//! - `1`: solid brick (indestructible, ignored for completion)
//! - `2+`: destructible brick, tinted by code
//!
//! The grid is kept after parsing so a level can be rebuilt in place when the
//! player loses or wins.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Sprite};
use crate::WHITE;
use crate::error::{Error, Result};

pub const SOLID_COLOR: Vec3 = Vec3::new(0.8, 0.8, 0.7);

/// Tint for a destructible tile code
pub fn tile_color(code: u32) -> Vec3 {
    match code {
        2 => Vec3::new(0.2, 0.6, 1.0),
        3 => Vec3::new(0.0, 0.7, 0.0),
        4 => Vec3::new(0.8, 0.8, 0.4),
        5 => Vec3::new(1.0, 0.5, 0.0),
        _ => WHITE,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    tiles: Vec<Vec<u32>>,
    width: f32,
    height: f32,
    pub bricks: Vec<Entity>,
}

impl Level {
    /// Parse a tile grid and lay it out over a `width` x `height` area
    pub fn parse(source: &str, width: f32, height: f32) -> Result<Self> {
        let tiles = parse_tiles(source)?;
        let mut level = Self {
            tiles,
            width,
            height,
            bricks: Vec::new(),
        };
        level.reset();
        Ok(level)
    }

    /// Read and parse a level file
    pub fn load(path: &Path, width: f32, height: f32) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::parse(&source, width, height)?;
        log::info!(
            "Loaded level {} ({}x{} tiles, {} bricks)",
            path.display(),
            level.columns(),
            level.rows(),
            level.bricks.len()
        );
        Ok(level)
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn columns(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    /// Rebuild every brick from the stored grid, undoing all destruction
    pub fn reset(&mut self) {
        let unit = Vec2::new(
            self.width / self.columns() as f32,
            self.height / self.rows() as f32,
        );

        self.bricks.clear();
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let position = Vec2::new(unit.x * x as f32, unit.y * y as f32);
                match code {
                    0 => {}
                    1 => self.bricks.push(
                        Entity::new(position, unit, Sprite::BlockSolid)
                            .with_color(SOLID_COLOR)
                            .solid(),
                    ),
                    _ => self.bricks.push(
                        Entity::new(position, unit, Sprite::Block).with_color(tile_color(code)),
                    ),
                }
            }
        }
    }

    /// True once every destructible brick is gone. Solid bricks never count.
    pub fn is_completed(&self) -> bool {
        self.bricks.iter().all(|b| b.is_solid || b.destroyed)
    }

    /// Destructible bricks still standing
    pub fn remaining(&self) -> usize {
        self.bricks
            .iter()
            .filter(|b| !b.is_solid && !b.destroyed)
            .count()
    }
}

fn parse_tiles(source: &str) -> Result<Vec<Vec<u32>>> {
    let mut tiles: Vec<Vec<u32>> = Vec::new();
    for line in source.lines().filter(|l| !l.trim().is_empty()) {
        let row_index = tiles.len();
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(column, token)| {
                token.parse::<u32>().map_err(|_| Error::InvalidTile {
                    row: row_index,
                    column,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(first) = tiles.first()
            && row.len() != first.len()
        {
            return Err(Error::RaggedRow {
                row: row_index,
                expected: first.len(),
                found: row.len(),
            });
        }
        tiles.push(row);
    }

    if tiles.is_empty() {
        return Err(Error::EmptyLevel);
    }
    Ok(tiles)
}
