//! Data-driven gameplay balance
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! settings file only needs to name the values it overrides.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_size: Vec2,
    /// Paddle speed in pixels per second
    pub player_velocity: f32,
    pub ball_radius: f32,
    pub initial_ball_velocity: Vec2,
    pub paddle_strength: f32,
    pub lives: u32,
    pub powerup_size: Vec2,
    pub powerup_velocity: Vec2,
    /// Multiplier applied by the speed powerup
    pub speed_factor: f32,
    /// Width added by the pad-size-increase powerup
    pub pad_growth: f32,
    pub shake_duration: f32,
    pub level_height_fraction: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_velocity: PLAYER_VELOCITY,
            ball_radius: BALL_RADIUS,
            initial_ball_velocity: INITIAL_BALL_VELOCITY,
            paddle_strength: PADDLE_STRENGTH,
            lives: STARTING_LIVES,
            powerup_size: POWERUP_SIZE,
            powerup_velocity: POWERUP_VELOCITY,
            speed_factor: SPEED_FACTOR,
            pad_growth: PAD_GROWTH,
            shake_duration: SHAKE_DURATION,
            level_height_fraction: LEVEL_HEIGHT_FRACTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{ "player_velocity": 650.0, "lives": 5 }"#).unwrap();
        assert_eq!(tuning.player_velocity, 650.0);
        assert_eq!(tuning.lives, 5);
        assert_eq!(tuning.ball_radius, BALL_RADIUS);
        assert_eq!(tuning.player_size, PLAYER_SIZE);
    }
}
