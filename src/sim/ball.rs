//! The ball: an entity with a radius and paddle-related flags

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Sprite};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Entity,
    radius: f32,
    /// Glued to the paddle; the host moves it along with the paddle
    pub stuck: bool,
    /// Next paddle contact re-glues the ball
    pub sticky: bool,
    /// Breaks non-solid bricks without bouncing off them
    pub pass_through: bool,
}

impl Ball {
    /// New ball, stuck to the paddle
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        Self {
            body: Entity::new(position, Vec2::splat(radius * 2.0), Sprite::Ball)
                .with_velocity(velocity),
            radius,
            stuck: true,
            sticky: false,
            pass_through: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.position + self.radius
    }

    /// Integrate one step and bounce off the left, right and top edges.
    ///
    /// There is no bottom edge: leaving the screen downward is a miss, which
    /// the caller detects.
    pub fn advance(&mut self, dt: f32, boundary_width: f32) -> Vec2 {
        if self.stuck {
            return self.body.position;
        }

        let diameter = self.radius * 2.0;
        let body = &mut self.body;
        body.position += body.velocity * dt;

        if body.position.x < 0.0 {
            body.velocity.x = -body.velocity.x;
            body.position.x = 0.0;
        } else if body.position.x + diameter > boundary_width {
            body.velocity.x = -body.velocity.x;
            body.position.x = boundary_width - diameter;
        }
        if body.position.y < 0.0 {
            body.velocity.y = -body.velocity.y;
            body.position.y = 0.0;
        }

        body.position
    }

    /// Put the ball back on the paddle with its powerup flags cleared
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.body.position = position;
        self.body.velocity = velocity;
        self.stuck = true;
        self.sticky = false;
        self.pass_through = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_ball(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(pos, 10.0, vel);
        ball.stuck = false;
        ball
    }

    #[test]
    fn test_stuck_ball_does_not_move() {
        let mut ball = Ball::new(Vec2::new(50.0, 50.0), 10.0, Vec2::new(100.0, -100.0));
        let pos = ball.advance(0.5, 800.0);
        assert_eq!(pos, Vec2::new(50.0, 50.0));
        assert_eq!(ball.body.velocity, Vec2::new(100.0, -100.0));
    }

    #[test]
    fn test_integrates_velocity() {
        let mut ball = free_ball(Vec2::new(100.0, 100.0), Vec2::new(20.0, 40.0));
        let pos = ball.advance(0.5, 800.0);
        assert_eq!(pos, Vec2::new(110.0, 120.0));
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = free_ball(Vec2::new(2.0, 100.0), Vec2::new(-100.0, 0.0));
        ball.advance(0.1, 800.0);
        assert_eq!(ball.body.position.x, 0.0);
        assert_eq!(ball.body.velocity.x, 100.0);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut ball = free_ball(Vec2::new(775.0, 100.0), Vec2::new(100.0, 0.0));
        ball.advance(0.1, 800.0);
        assert_eq!(ball.body.position.x, 780.0);
        assert_eq!(ball.body.velocity.x, -100.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut ball = free_ball(Vec2::new(100.0, 3.0), Vec2::new(0.0, -100.0));
        ball.advance(0.1, 800.0);
        assert_eq!(ball.body.position.y, 0.0);
        assert_eq!(ball.body.velocity.y, 100.0);
    }

    #[test]
    fn test_no_bottom_clamp() {
        let mut ball = free_ball(Vec2::new(100.0, 590.0), Vec2::new(0.0, 200.0));
        ball.advance(0.5, 800.0);
        assert_eq!(ball.body.position.y, 690.0);
        assert_eq!(ball.body.velocity.y, 200.0);
    }

    #[test]
    fn test_reset_sticks_and_clears_flags() {
        let mut ball = free_ball(Vec2::new(1.0, 1.0), Vec2::ZERO);
        ball.sticky = true;
        ball.pass_through = true;
        ball.reset(Vec2::new(5.0, 6.0), Vec2::new(100.0, -350.0));
        assert!(ball.stuck);
        assert!(!ball.sticky);
        assert!(!ball.pass_through);
        assert_eq!(ball.body.position, Vec2::new(5.0, 6.0));
        assert_eq!(ball.body.velocity, Vec2::new(100.0, -350.0));
        assert_eq!(ball.radius(), 10.0);
        assert_eq!(ball.center(), Vec2::new(15.0, 16.0));
    }
}
