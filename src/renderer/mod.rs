//! Rendering collaborators
//!
//! The host owns the graphics pipeline, textures and fonts. The simulation
//! only describes what to draw through these traits.

pub mod scene;

pub use scene::draw_frame;

use glam::{Vec2, Vec3};

use crate::sim::{Effects, Sprite};

/// Draws textured quads
pub trait Renderer {
    /// Stateless per-call draw request, in screen space
    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        position: Vec2,
        size: Vec2,
        rotation: f32,
        color: Vec3,
    );

    /// Called once per frame after every sprite is submitted, so a
    /// post-processor can apply shake/confuse/chaos
    fn apply_effects(&mut self, _effects: &Effects) {}
}

/// Draws a line of text
pub trait TextDisplay {
    fn render_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Vec3);
}
