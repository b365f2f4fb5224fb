//! Breakout - brick-breaking arcade simulation core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, collisions, powerups, game state)
//! - `renderer`: Sprite/text collaborator traits and frame drawing
//! - `audio`: Audio trigger trait and event-to-clip mapping
//! - `platform`: Keyboard input state
//! - `settings` / `tuning`: Runtime configuration

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep used by the headless runner
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default screen dimensions
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    /// Bricks occupy the top half of the screen
    pub const LEVEL_HEIGHT_FRACTION: f32 = 0.5;

    /// Paddle defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(100.0, 20.0);
    pub const PLAYER_VELOCITY: f32 = 500.0;

    /// Ball defaults
    pub const INITIAL_BALL_VELOCITY: Vec2 = Vec2::new(100.0, -350.0);
    pub const BALL_RADIUS: f32 = 12.5;
    /// Horizontal influence of the paddle contact point
    pub const PADDLE_STRENGTH: f32 = 2.0;

    pub const STARTING_LIVES: u32 = 3;

    /// Powerup defaults
    pub const POWERUP_SIZE: Vec2 = Vec2::new(60.0, 20.0);
    pub const POWERUP_VELOCITY: Vec2 = Vec2::new(0.0, 150.0);
    pub const SPEED_FACTOR: f32 = 1.2;
    pub const PAD_GROWTH: f32 = 50.0;

    /// Seconds the screen shakes after a solid brick hit
    pub const SHAKE_DURATION: f32 = 0.05;
}

/// Opaque white, the default tint for every entity
pub const WHITE: Vec3 = Vec3::ONE;
