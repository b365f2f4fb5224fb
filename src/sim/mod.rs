//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module stays free of I/O during play:
//! - One tick per frame, strictly input -> update
//! - Seeded RNG only
//! - Audio and rendering observe state and events, never drive them

pub mod ball;
pub mod collision;
pub mod entity;
pub mod level;
pub mod powerup;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{Collision, Contact, Direction, check_aabb, check_ball_box, vector_direction};
pub use entity::{Entity, Sprite};
pub use level::Level;
pub use powerup::{PowerUp, PowerUpKind, PowerUps};
pub use state::{Effects, Game, GameEvent, GamePhase, Session};
pub use tick::{do_collisions, process_input, tick, update};
