//! Movable entity shared by the paddle, bricks, powerups and ball

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::powerup::PowerUpKind;
use crate::WHITE;

/// Handle to a drawable owned by the host's resource cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Background,
    Block,
    BlockSolid,
    Paddle,
    Ball,
    PowerUp(PowerUpKind),
}

impl Sprite {
    /// Conventional texture name for the host's resource cache
    pub fn name(&self) -> &'static str {
        match self {
            Sprite::Background => "background",
            Sprite::Block => "block",
            Sprite::BlockSolid => "block_solid",
            Sprite::Paddle => "paddle",
            Sprite::Ball => "face",
            Sprite::PowerUp(kind) => kind.texture_name(),
        }
    }
}

/// Axis-aligned game object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner in screen space (y grows downward)
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub color: Vec3,
    pub rotation: f32,
    /// Solid bricks cannot be destroyed
    pub is_solid: bool,
    pub destroyed: bool,
    pub sprite: Sprite,
}

impl Entity {
    pub fn new(position: Vec2, size: Vec2, sprite: Sprite) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            color: WHITE,
            rotation: 0.0,
            is_solid: false,
            destroyed: false,
            sprite,
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn solid(mut self) -> Self {
        self.is_solid = true;
        self
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_names() {
        assert_eq!(Sprite::BlockSolid.name(), "block_solid");
        assert_eq!(Sprite::Ball.name(), "face");
        assert_eq!(
            Sprite::PowerUp(PowerUpKind::PassThrough).name(),
            "powerup_passthrough"
        );
    }
}
