//! Arena renderer
//!
//! Draws a `RenderSnapshot` and the title screen with macroquad. Shapes are
//! filled rectangles taken straight from each entity's bounds; the
//! crosshair and the title are textures.

use macroquad::prelude::*;
use super::world::{RenderSnapshot, Shape};

const BG_COLOR: Color = BLACK;
const PLAYER_COLOR: Color = WHITE;
const BULLET_COLOR: Color = WHITE;
const ENEMY_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const HINT_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);

fn draw_shape(shape: &Shape, color: Color) {
    let b = shape.bounds;
    draw_rectangle(b.min.x, b.min.y, b.width(), b.height(), color);
}

/// Draw a texture with its center at `center`
fn draw_texture_centered(texture: &Texture2D, center: Vec2) {
    draw_texture(
        texture,
        center.x - texture.width() * 0.5,
        center.y - texture.height() * 0.5,
        WHITE,
    );
}

/// Draw one gameplay frame: player, bullets, enemies, then the crosshair on top
pub fn draw_arena(snapshot: &RenderSnapshot, crosshair: &Texture2D) {
    clear_background(BG_COLOR);

    draw_shape(&snapshot.player, PLAYER_COLOR);
    for bullet in &snapshot.bullets {
        draw_shape(bullet, BULLET_COLOR);
    }
    for enemy in &snapshot.enemies {
        draw_shape(enemy, ENEMY_COLOR);
    }

    draw_texture_centered(crosshair, snapshot.crosshair);
}

/// Draw the title screen
pub fn draw_title(title: &Texture2D) {
    clear_background(BG_COLOR);
    draw_texture(title, 0.0, 0.0, WHITE);

    let hint = "press ENTER to start";
    let font_size = 24.0;
    let dims = measure_text(hint, None, font_size as u16, 1.0);
    draw_text(
        hint,
        (screen_width() - dims.width) * 0.5,
        screen_height() * 0.8,
        font_size,
        HINT_COLOR,
    );
}
