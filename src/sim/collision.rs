//! Collision detection between axis-aligned boxes and the ball
//!
//! Both tests are pure. Responses (bouncing, destroying bricks) live in the
//! tick module.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::entity::Entity;

/// Compass direction of a penetration vector.
///
/// Screen space grows downward, so `Up` is +y: a penetration pointing `Up`
/// means the box sits below the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Search order; earlier entries win ties
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn compass(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Contact details for a ball overlapping a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub face: Direction,
    /// Closest point on the box minus the ball center
    pub penetration: Vec2,
    /// Distance to move the ball along the face normal to clear the box
    pub depth: f32,
}

/// Result of a ball/box test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    Miss,
    Hit(Contact),
}

impl Collision {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Collision::Hit(_))
    }
}

/// Best-aligned compass direction for `target`.
///
/// Returns `None` for a zero or non-finite vector, which has no direction.
pub fn vector_direction(target: Vec2) -> Option<Direction> {
    let normal = target.try_normalize()?;
    let mut max = 0.0;
    let mut best = None;
    for dir in Direction::ALL {
        let dot = normal.dot(dir.compass());
        if dot > max {
            max = dot;
            best = Some(dir);
        }
    }
    best
}

/// Box/box overlap; touching edges count
pub fn check_aabb(one: &Entity, two: &Entity) -> bool {
    let collision_x = one.position.x + one.size.x >= two.position.x
        && two.position.x + two.size.x >= one.position.x;
    let collision_y = one.position.y + one.size.y >= two.position.y
        && two.position.y + two.size.y >= one.position.y;
    collision_x && collision_y
}

/// Circle/box test for the ball against a brick or the paddle
pub fn check_ball_box(ball: &Ball, target: &Entity) -> Collision {
    let radius = ball.radius();
    let center = ball.center();
    let half = target.half_extents();
    let box_center = target.center();

    // Closest point on the box to the circle center
    let offset = center - box_center;
    let closest = box_center + offset.clamp(-half, half);
    let penetration = closest - center;

    if penetration.length() > radius {
        return Collision::Miss;
    }

    match vector_direction(penetration) {
        Some(face) => {
            let axis = if face.is_horizontal() {
                penetration.x
            } else {
                penetration.y
            };
            Collision::Hit(Contact {
                face,
                penetration,
                depth: radius - axis.abs(),
            })
        }
        None => {
            log::warn!("Ball center {} inside box at {}", center, target.position);
            Collision::Hit(embedded_contact(offset, half, radius))
        }
    }
}

/// Contact for a ball whose center is already inside the box.
///
/// The face comes from the axis with the least remaining overlap, and the depth
/// covers the distance to that face plus the radius.
fn embedded_contact(offset: Vec2, half: Vec2, radius: f32) -> Contact {
    let overlap_x = half.x - offset.x.abs();
    let overlap_y = half.y - offset.y.abs();

    let (face, overlap) = if overlap_y <= overlap_x {
        // Ball center below the box center: the box lies toward -y
        let face = if offset.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };
        (face, overlap_y)
    } else {
        let face = if offset.x < 0.0 {
            Direction::Right
        } else {
            Direction::Left
        };
        (face, overlap_x)
    };

    Contact {
        face,
        penetration: Vec2::ZERO,
        depth: radius + overlap,
    }
}
