use macroquad::color::{Color, WHITE};
use macroquad::math::vec2;
use macroquad::shapes::draw_rectangle;
use macroquad::text::{TextParams, draw_text_ex, measure_text};
use macroquad::texture::{DrawTextureParams, draw_texture_ex};

use crate::assets::Assets;
use crate::config::*;
use crate::world::World;

/// Draws the world. Owns nothing but the background scroll offset.
pub struct Renderer {
    scroll: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Self { scroll: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.scroll = (self.scroll + BACKGROUND_SCROLL_SPEED * dt) % SCREEN_WIDTH;
    }

    pub fn draw(&self, world: &World, assets: &Assets) {
        self.draw_background(assets);

        world.player.sprite.draw();
        for bullet in &world.player_bullets {
            bullet.sprite.draw();
        }
        for bullet in &world.enemy_bullets {
            bullet.sprite.draw();
        }
        for enemy in &world.enemies {
            enemy.sprite.draw();
        }

        self.draw_hud(world, assets);
    }

    /// Two screen-sized copies of the background, offset by the scroll
    /// position, wrapping at the screen width.
    fn draw_background(&self, assets: &Assets) {
        let Some(background) = &assets.background else {
            return;
        };
        for x in [-self.scroll, SCREEN_WIDTH - self.scroll] {
            draw_texture_ex(
                background,
                x,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(SCREEN_WIDTH, SCREEN_HEIGHT)),
                    ..Default::default()
                },
            );
        }
    }

    fn draw_hud(&self, world: &World, assets: &Assets) {
        let text = format!(
            "Score: {}   Best: {}",
            world.player.score, world.high_score
        );
        draw_text_ex(
            &text,
            20.0,
            SCREEN_HEIGHT - 20.0,
            TextParams {
                font: assets.font.as_ref(),
                font_size: 30,
                color: WHITE,
                ..Default::default()
            },
        );

        // One heart per remaining life, top-left.
        if let Some(heart) = &assets.heart {
            for i in 0..world.player.lives.max(0) {
                draw_texture_ex(
                    heart,
                    20.0 + i as f32 * (HEART_SIZE + 8.0),
                    20.0,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(HEART_SIZE, HEART_SIZE)),
                        ..Default::default()
                    },
                );
            }
        } else {
            draw_text_ex(
                &format!("Lives: {}", world.player.lives.max(0)),
                20.0,
                40.0,
                TextParams {
                    font: assets.font.as_ref(),
                    font_size: 30,
                    color: WHITE,
                    ..Default::default()
                },
            );
        }
    }

    pub fn draw_game_over(&self, world: &World, assets: &Assets) {
        self.draw_background(assets);
        draw_rectangle(
            0.0,
            0.0,
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            Color::new(0.0, 0.0, 0.0, 0.7),
        );

        let font = assets.font.as_ref();
        centered_text("GAME OVER", SCREEN_HEIGHT / 2.0 - 40.0, 80, font);
        centered_text(
            &format!("Final Score: {}", world.player.score),
            SCREEN_HEIGHT / 2.0 + 40.0,
            40,
            font,
        );
        centered_text(
            "ENTER: play again    ESC: quit",
            SCREEN_HEIGHT / 2.0 + 80.0,
            20,
            font,
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn centered_text(text: &str, y: f32, font_size: u16, font: Option<&macroquad::text::Font>) {
    let dims = measure_text(text, font, font_size, 1.0);
    draw_text_ex(
        text,
        SCREEN_WIDTH / 2.0 - dims.width / 2.0,
        y,
        TextParams {
            font,
            font_size,
            color: WHITE,
            ..Default::default()
        },
    );
}
