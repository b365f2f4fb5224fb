//! Game state and session context
//!
//! Everything the per-frame update reads or writes lives here. Behavior is in
//! the tick module.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::entity::{Entity, Sprite};
use super::level::Level;
use super::powerup::{PowerUpKind, PowerUps};
use crate::WHITE;
use crate::error::{Error, Result};
use crate::platform::input::Keys;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title splash
    Start,
    /// Level select
    Menu,
    /// Gameplay
    Active,
    /// Victory splash
    Win,
}

/// Something that happened during an update, for audio and other observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed,
    SolidHit,
    PaddleHit,
    PowerUpCollected(PowerUpKind),
    LifeLost,
    GameOver,
    LevelWon,
}

/// Post-processing flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    pub shake: bool,
    pub confuse: bool,
    pub chaos: bool,
}

/// The objects collision and powerup routines act on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub paddle: Entity,
    pub ball: Ball,
    pub effects: Effects,
}

impl Session {
    /// Paddle centered at the bottom edge with the ball stuck on top
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        let paddle = Entity::new(
            paddle_home(width, height, tuning.player_size),
            tuning.player_size,
            Sprite::Paddle,
        );
        let ball = Ball::new(
            ball_home(&paddle, tuning.ball_radius),
            tuning.ball_radius,
            tuning.initial_ball_velocity,
        );
        Self {
            paddle,
            ball,
            effects: Effects::default(),
        }
    }
}

fn paddle_home(width: f32, height: f32, size: Vec2) -> Vec2 {
    Vec2::new((width - size.x) / 2.0, height - size.y)
}

fn ball_home(paddle: &Entity, radius: f32) -> Vec2 {
    paddle.position + Vec2::new(paddle.size.x / 2.0 - radius, -radius * 2.0)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    pub phase: GamePhase,
    pub width: f32,
    pub height: f32,
    pub keys: Keys,
    pub levels: Vec<Level>,
    /// Index into `levels`
    pub level: usize,
    pub lives: u32,
    pub powerups: PowerUps,
    pub session: Session,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
    /// Seconds of screen shake remaining
    pub(crate) shake_time: f32,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a game on the title splash. Fails when `levels` is empty.
    pub fn new(
        width: f32,
        height: f32,
        levels: Vec<Level>,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self> {
        if levels.is_empty() {
            return Err(Error::NoLevels);
        }
        let session = {
            let mut session = Session::new(width, height, &tuning);
            // The splash screen runs with the chaos effect on
            session.effects.chaos = true;
            session
        };
        log::info!(
            "Game created: {}x{}, {} levels, seed {}",
            width,
            height,
            levels.len(),
            seed
        );
        Ok(Self {
            phase: GamePhase::Start,
            width,
            height,
            keys: Keys::default(),
            levels,
            level: 0,
            lives: tuning.lives,
            powerups: PowerUps::new(),
            session,
            rng: Pcg32::seed_from_u64(seed),
            shake_time: 0.0,
            events: Vec::new(),
            tuning,
        })
    }

    /// Load every configured level and create the game
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let (width, height) = settings.dimensions();
        let level_height = height * settings.tuning.level_height_fraction;
        let levels = settings
            .levels
            .iter()
            .map(|path| Level::load(path, width, level_height))
            .collect::<Result<Vec<_>>>()?;
        Self::new(width, height, levels, settings.tuning.clone(), settings.seed)
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.level]
    }

    pub fn effects(&self) -> Effects {
        self.session.effects
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Rebuild the current level, drop all powerups and restore lives
    pub fn reset_level(&mut self) {
        self.levels[self.level].reset();
        self.powerups.clear();
        self.lives = self.tuning.lives;
        log::info!("Level {} reset", self.level + 1);
    }

    /// Put the paddle and ball back home and clear every running effect
    pub fn reset_player(&mut self) {
        let tuning = &self.tuning;
        let session = &mut self.session;

        session.paddle.size = tuning.player_size;
        session.paddle.position = paddle_home(self.width, self.height, tuning.player_size);
        session.paddle.color = WHITE;

        let home = ball_home(&session.paddle, session.ball.radius());
        session.ball.reset(home, tuning.initial_ball_velocity);
        session.ball.body.color = WHITE;

        session.effects.chaos = false;
        session.effects.confuse = false;
    }
}
