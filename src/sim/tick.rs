//! Per-frame simulation tick
//!
//! Input handling first, then the update: ball motion, collisions, life and
//! level bookkeeping, powerup countdown.

use glam::Vec2;

use super::ball::Ball;
use super::collision::{Collision, Contact, Direction, check_ball_box};
use super::entity::Entity;
use super::state::{Game, GameEvent, GamePhase};
use crate::platform::input::Key;
use crate::tuning::Tuning;

/// Advance the game by one frame
pub fn tick(game: &mut Game, dt: f32) {
    process_input(game, dt);
    update(game, dt);
}

/// Interpret the current key state for this frame
pub fn process_input(game: &mut Game, dt: f32) {
    match game.phase {
        GamePhase::Start => {
            if game.keys.take_press(Key::Confirm) {
                game.session.effects.chaos = false;
                enter(game, GamePhase::Menu);
            }
        }
        GamePhase::Menu => {
            let count = game.levels.len();
            if game.keys.take_press(Key::Confirm) {
                game.lives = game.tuning.lives;
                enter(game, GamePhase::Active);
            }
            if game.keys.take_press(Key::Next) {
                game.level = (game.level + 1) % count;
                log::info!("Selected level {}", game.level + 1);
            }
            if game.keys.take_press(Key::Previous) {
                game.level = (game.level + count - 1) % count;
                log::info!("Selected level {}", game.level + 1);
            }
        }
        GamePhase::Active => move_paddle(game, dt),
        GamePhase::Win => {
            if game.keys.take_press(Key::Confirm) {
                game.session.effects.chaos = false;
                enter(game, GamePhase::Menu);
            }
        }
    }
}

fn enter(game: &mut Game, phase: GamePhase) {
    log::info!("{:?} -> {:?}", game.phase, phase);
    game.phase = phase;
}

fn move_paddle(game: &mut Game, dt: f32) {
    let step = game.tuning.player_velocity * dt;
    let max_x = game.width - game.session.paddle.size.x;
    let paddle = &mut game.session.paddle;
    let ball = &mut game.session.ball;

    let mut target = paddle.position.x;
    if game.keys.is_down(Key::Left) {
        target -= step;
    }
    if game.keys.is_down(Key::Right) {
        target += step;
    }
    let target = target.min(max_x).max(0.0);

    let delta = target - paddle.position.x;
    paddle.position.x = target;
    if ball.stuck {
        ball.body.position.x += delta;
    }

    if game.keys.is_down(Key::Launch) {
        ball.stuck = false;
    }
}

/// Advance gameplay. Does nothing outside the active phase.
pub fn update(game: &mut Game, dt: f32) {
    if game.phase != GamePhase::Active {
        return;
    }

    game.session.ball.advance(dt, game.width);
    do_collisions(game);

    if game.session.ball.body.position.y >= game.height {
        game.lives = game.lives.saturating_sub(1);
        log::debug!("Ball lost, {} lives left", game.lives);
        game.emit(GameEvent::LifeLost);
        if game.lives == 0 {
            game.reset_level();
            game.emit(GameEvent::GameOver);
            enter(game, GamePhase::Menu);
        }
        game.reset_player();
    }

    if game.shake_time > 0.0 {
        game.shake_time -= dt;
        if game.shake_time <= 0.0 {
            game.session.effects.shake = false;
        }
    }

    game.powerups.tick(dt, &mut game.session);
    game.powerups.prune();

    if game.phase == GamePhase::Active && game.current_level().is_completed() {
        game.reset_level();
        game.reset_player();
        game.session.effects.chaos = true;
        game.emit(GameEvent::LevelWon);
        enter(game, GamePhase::Win);
    }
}

/// Resolve the ball against bricks and paddle, and powerups against the paddle
pub fn do_collisions(game: &mut Game) {
    let mut events = Vec::new();

    let level = &mut game.levels[game.level];
    let session = &mut game.session;
    for brick in level.bricks.iter_mut().filter(|b| !b.destroyed) {
        let Collision::Hit(contact) = check_ball_box(&session.ball, brick) else {
            continue;
        };

        if brick.is_solid {
            game.shake_time = game.tuning.shake_duration;
            session.effects.shake = true;
            events.push(GameEvent::SolidHit);
        } else {
            brick.destroyed = true;
            game.powerups.spawn(brick.position, &mut game.rng, &game.tuning);
            events.push(GameEvent::BrickDestroyed);
        }

        if !session.ball.pass_through || brick.is_solid {
            resolve_brick_contact(&mut session.ball, &contact);
        }
    }

    if !session.ball.stuck && check_ball_box(&session.ball, &session.paddle).is_hit() {
        bounce_off_paddle(&mut session.ball, &session.paddle, &game.tuning);
        events.push(GameEvent::PaddleHit);
    }

    let caught = game.powerups.collect(session, &game.tuning, game.height);
    events.extend(caught.into_iter().map(GameEvent::PowerUpCollected));

    for event in events {
        game.emit(event);
    }
}

/// Reflect the ball off the struck face and push it clear of the brick
pub fn resolve_brick_contact(ball: &mut Ball, contact: &Contact) {
    let body = &mut ball.body;
    match contact.face {
        Direction::Left => {
            body.velocity.x = -body.velocity.x;
            body.position.x += contact.depth;
        }
        Direction::Right => {
            body.velocity.x = -body.velocity.x;
            body.position.x -= contact.depth;
        }
        Direction::Up => {
            body.velocity.y = -body.velocity.y;
            body.position.y -= contact.depth;
        }
        Direction::Down => {
            body.velocity.y = -body.velocity.y;
            body.position.y += contact.depth;
        }
    }
}

/// Send the ball back up, angled by where it struck the paddle.
///
/// The speed is unchanged; a sticky ball glues itself to the paddle.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Entity, tuning: &Tuning) {
    let center_board = paddle.position.x + paddle.size.x / 2.0;
    let distance = ball.center().x - center_board;
    let percentage = distance / (paddle.size.x / 2.0);

    let velocity = &mut ball.body.velocity;
    let speed = velocity.length();
    let bounced = Vec2::new(
        tuning.initial_ball_velocity.x * percentage * tuning.paddle_strength,
        -velocity.y.abs(),
    );
    *velocity = bounced.try_normalize().unwrap_or(Vec2::NEG_Y) * speed;

    ball.stuck = ball.sticky;
}
