//! Breakout headless runner
//!
//! Loads settings and levels, then plays an autopiloted session at a fixed
//! timestep with logging collaborators standing in for the renderer, text
//! display and audio device.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{Vec2, Vec3};

use breakout::Settings;
use breakout::audio::{self, AudioTrigger, Clip};
use breakout::consts::{MAX_SUBSTEPS, SIM_DT};
use breakout::platform::Key;
use breakout::renderer::{self, Renderer, TextDisplay};
use breakout::sim::{Effects, Game, GamePhase, Sprite, tick};

#[derive(Parser, Debug)]
#[command(name = "breakout", about = "Run an autopiloted Breakout session")]
struct Args {
    /// Settings JSON file; defaults are used when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Frames to simulate
    #[arg(short, long, default_value_t = 36_000)]
    frames: u32,
    /// Level to select in the menu (1-based)
    #[arg(short, long, default_value_t = 1)]
    level: usize,
    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Counts draw calls instead of drawing
#[derive(Default)]
struct FrameStats {
    sprites: usize,
    last_effects: Effects,
}

impl Renderer for FrameStats {
    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        position: Vec2,
        _size: Vec2,
        _rotation: f32,
        _color: Vec3,
    ) {
        log::trace!("draw {} at {}", sprite.name(), position);
        self.sprites += 1;
    }

    fn apply_effects(&mut self, effects: &Effects) {
        self.last_effects = *effects;
    }
}

/// Logs text that changed since the previous frame
#[derive(Default)]
struct TextLog {
    frame: Vec<String>,
    previous: Vec<String>,
}

impl TextLog {
    fn flush(&mut self) {
        if self.frame != self.previous {
            for line in &self.frame {
                log::debug!("text: {}", line);
            }
        }
        self.previous = std::mem::take(&mut self.frame);
    }
}

impl TextDisplay for TextLog {
    fn render_text(&mut self, text: &str, _x: f32, _y: f32, _scale: f32, _color: Vec3) {
        self.frame.push(text.to_string());
    }
}

#[derive(Default)]
struct AudioLog {
    played: usize,
}

impl AudioTrigger for AudioLog {
    fn play(&mut self, clip: Clip, looping: bool) {
        self.played += 1;
        log::trace!("play {} (loop: {})", clip.path(), looping);
    }
}

/// Menu navigation script: which key to tap on this frame, if any
fn menu_key(game: &Game, wanted_level: usize) -> Option<Key> {
    match game.phase {
        GamePhase::Start | GamePhase::Win => Some(Key::Confirm),
        GamePhase::Menu if game.level != wanted_level => Some(Key::Next),
        GamePhase::Menu => Some(Key::Confirm),
        GamePhase::Active => None,
    }
}

/// Steer the paddle under the ball, or toward a falling good powerup when the
/// ball is still high up
fn autopilot(game: &mut Game) {
    let ball = &game.session.ball;
    let paddle = &game.session.paddle;
    let ball_is_safe = ball.body.velocity.y < 0.0 && ball.center().y < game.height * 0.5;

    let target_x = game
        .powerups
        .iter()
        .filter(|p| p.is_live() && p.kind.is_good() && ball_is_safe)
        .max_by(|a, b| {
            a.body
                .position
                .y
                .partial_cmp(&b.body.position.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.body.center().x)
        .unwrap_or(ball.center().x);

    // Aim slightly off-center so the ball does not loop vertically
    let target_x = target_x + paddle.size.x * 0.2;
    let center = paddle.center().x;

    game.keys.release_all();
    if target_x < center - 5.0 {
        game.keys.press(Key::Left);
    } else if target_x > center + 5.0 {
        game.keys.press(Key::Right);
    }
    if ball.stuck {
        game.keys.press(Key::Launch);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    let mut game = Game::from_settings(&settings).context("loading levels")?;
    let wanted_level = args.level.clamp(1, game.levels.len()) - 1;

    let mut stats = FrameStats::default();
    let mut text = TextLog::default();
    let mut sound = AudioLog::default();
    if settings.music {
        audio::start_music(&mut sound);
    }

    log::info!("Breakout (headless) starting, {} frames", args.frames);

    let mut wins = 0;
    let mut accumulator = 0.0;
    for frame in 0..args.frames {
        // A host would measure this; the runner feeds exactly one timestep
        accumulator += SIM_DT;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            match menu_key(&game, wanted_level) {
                // Tap on even frames, release on odd, so each press is fresh
                Some(key) if frame % 2 == 0 => {
                    game.keys.release_all();
                    game.keys.press(key);
                }
                Some(_) => game.keys.release_all(),
                None => autopilot(&mut game),
            }

            let before = game.phase;
            tick(&mut game, SIM_DT);
            if before == GamePhase::Active && game.phase == GamePhase::Win {
                wins += 1;
            }

            audio::dispatch(game.drain_events(), &mut sound);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        stats.sprites = 0;
        renderer::draw_frame(&game, &mut stats, &mut text);
        text.flush();
    }

    log::info!(
        "Finished: {:?} on level {}, {} lives, {} bricks left, {} wins",
        game.phase,
        game.level + 1,
        game.lives,
        game.current_level().remaining(),
        wins
    );
    log::info!(
        "{} sounds played, {} sprites last frame, effects {:?}",
        sound.played,
        stats.sprites,
        stats.last_effects
    );
    Ok(())
}
