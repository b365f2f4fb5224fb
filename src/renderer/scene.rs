//! Frame composition: which sprites and text each phase shows

use glam::{Vec2, Vec3};

use super::{Renderer, TextDisplay};
use crate::WHITE;
use crate::sim::{Entity, Game, GamePhase, Sprite};

const BANNER: Vec3 = Vec3::new(1.0, 1.0, 0.0);

fn draw_entity<R: Renderer + ?Sized>(renderer: &mut R, entity: &Entity) {
    renderer.draw_sprite(
        entity.sprite,
        entity.position,
        entity.size,
        entity.rotation,
        entity.color,
    );
}

/// Draw the playfield and the overlay text for the current phase.
///
/// Only reads the game; call after the frame's update.
pub fn draw_frame<R, T>(game: &Game, renderer: &mut R, text: &mut T)
where
    R: Renderer + ?Sized,
    T: TextDisplay + ?Sized,
{
    let (width, height) = (game.width, game.height);

    if game.phase != GamePhase::Win {
        renderer.draw_sprite(
            Sprite::Background,
            Vec2::ZERO,
            Vec2::new(width, height),
            0.0,
            WHITE,
        );
        for brick in game.current_level().bricks.iter().filter(|b| !b.destroyed) {
            draw_entity(renderer, brick);
        }
        draw_entity(renderer, &game.session.paddle);
        for powerup in game.powerups.iter().filter(|p| p.is_live()) {
            draw_entity(renderer, &powerup.body);
        }
        draw_entity(renderer, &game.session.ball.body);
        renderer.apply_effects(&game.session.effects);

        text.render_text(&format!("Lives:{}", game.lives), 5.0, 5.0, 1.0, WHITE);
    }

    match game.phase {
        GamePhase::Menu => {
            text.render_text("Press ENTER to start", 250.0, height / 2.0, 1.0, WHITE);
            text.render_text(
                "Press W or S to select level",
                245.0,
                height / 2.0 + 20.0,
                0.75,
                WHITE,
            );
            text.render_text(
                &format!("Level:{}", game.level + 1),
                5.0,
                height - 20.0,
                1.0,
                WHITE,
            );
        }
        GamePhase::Win => {
            text.render_text("You WON!!!", 320.0, height / 2.0 - 20.0, 1.0, BANNER);
            text.render_text(
                "Press ENTER to retry or ESC to quit",
                130.0,
                height / 2.0,
                1.0,
                BANNER,
            );
        }
        GamePhase::Start => {
            text.render_text("BREAKOUT", 210.0, height * 2.0 / 5.0, 3.0, BANNER);
            text.render_text(
                "Press ENTER to start or ESC to quit",
                130.0,
                height * 2.0 / 3.0,
                1.0,
                BANNER,
            );
        }
        GamePhase::Active => {}
    }
}
