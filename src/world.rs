use macroquad::math::{Rect, Vec2, vec2};
use macroquad::texture::Texture2D;
use rand::Rng;

use crate::assets::Assets;
use crate::bullet::Bullet;
use crate::character::Character;
use crate::collision::overlaps;
use crate::config::*;
use crate::input::Intents;
use crate::sprite::Sprite;

/// Discrete events one update tick produced. The world never touches the
/// audio device itself; the audio player consumes these after the tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameEvents {
    pub player_fired: bool,
    pub enemy_fired: bool,
    pub player_hit: bool,
    pub enemy_destroyed: bool,
    pub game_over: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The whole simulation: player, enemies, both bullet collections, the spawn
/// timer, and the Playing/GameOver state machine. All randomness comes in
/// through the `rng` parameter so tests can seed it.
pub struct World {
    pub player: Character,
    pub enemies: Vec<Character>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub spawn_timer: f32,
    pub status: GameStatus,
    /// Accumulates round scores across restarts; lives only for the process.
    pub high_score: u32,
    player_bullet_template: Sprite,
    enemy_bullet_template: Sprite,
    enemy_sheet: Option<Texture2D>,
}

impl World {
    pub fn new(assets: &Assets) -> Self {
        let player_sprite = Sprite::new(
            assets.player_sheet.clone(),
            vec2(PLAYER_FRAME_W, PLAYER_FRAME_H),
            vec2(PLAYER_DEST_W, PLAYER_DEST_H),
            vec2(PLAYER_START_X, PLAYER_START_Y),
            PLAYER_FRAME_COUNT,
        );
        let mut player = Character::new(
            player_sprite,
            PLAYER_SPEED,
            PLAYER_FIRE_DELAY,
            PLAYER_MAX_HIT_POINTS,
        );
        player.lives = PLAYER_START_LIVES;

        Self {
            player,
            enemies: Vec::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            spawn_timer: ENEMY_SPAWN_DELAY,
            status: GameStatus::Playing,
            high_score: 0,
            player_bullet_template: Sprite::single(
                assets.player_bullet.clone(),
                vec2(BULLET_W, BULLET_H),
                Vec2::ZERO,
            ),
            enemy_bullet_template: Sprite::single(
                assets.enemy_bullet.clone(),
                vec2(BULLET_W, BULLET_H),
                Vec2::ZERO,
            ),
            enemy_sheet: assets.enemy_sheet.clone(),
        }
    }

    /// Advance the simulation by one frame. No-op outside `Playing`.
    pub fn update(&mut self, intents: &Intents, dt: f32, rng: &mut impl Rng) -> FrameEvents {
        let mut events = FrameEvents::default();
        if self.status != GameStatus::Playing {
            return events;
        }

        self.reap_offscreen();
        self.update_player(intents, dt, &mut events);

        for bullet in &mut self.player_bullets {
            bullet.update(dt);
        }
        for bullet in &mut self.enemy_bullets {
            bullet.update(dt);
        }

        self.update_enemies(dt, &mut events);
        self.tick_spawner(dt, rng);
        self.resolve_collisions(&mut events);

        events
    }

    fn update_player(&mut self, intents: &Intents, dt: f32, events: &mut FrameEvents) {
        let mut direction = Vec2::ZERO;
        if intents.up {
            direction.y -= 1.0;
        }
        if intents.down {
            direction.y += 1.0;
        }
        if intents.left {
            direction.x -= 1.0;
        }
        if intents.right {
            direction.x += 1.0;
        }

        // Diagonals stay unnormalized, matching the shipped feel.
        if direction != Vec2::ZERO {
            self.player.sprite.add_frame_time(dt * WALK_ANIM_FPS);
        }
        self.player.move_by(direction, dt);

        // Full screen width horizontally, the road lane vertically.
        let size = self.player.sprite.size();
        let pos = self.player.sprite.position;
        self.player.sprite.set_position(vec2(
            pos.x.clamp(0.0, SCREEN_WIDTH - size.x),
            pos.y.clamp(LANE_TOP, LANE_BOTTOM - size.y),
        ));

        self.player.update(dt);
        if intents.fire && self.player.can_shoot() {
            self.player.shoot(
                true,
                &mut self.player_bullets,
                vec2(PLAYER_BULLET_SPEED, 0.0),
                &self.player_bullet_template,
            );
            events.player_fired = true;
        }
    }

    fn update_enemies(&mut self, dt: f32, events: &mut FrameEvents) {
        for enemy in &mut self.enemies {
            enemy.move_by(vec2(-1.0, 0.0), dt);
            enemy.sprite.add_frame_time(dt * WALK_ANIM_FPS);
            enemy.update(dt);
            if enemy.can_shoot() {
                enemy.shoot(
                    false,
                    &mut self.enemy_bullets,
                    vec2(-ENEMY_BULLET_SPEED, 0.0),
                    &self.enemy_bullet_template,
                );
                events.enemy_fired = true;
            }
        }
    }

    fn tick_spawner(&mut self, dt: f32, rng: &mut impl Rng) {
        if self.spawn_timer <= 0.0 {
            self.spawn_enemy(rng);
            self.spawn_timer = ENEMY_SPAWN_DELAY;
        } else {
            self.spawn_timer -= dt;
        }
    }

    /// Push a fresh enemy at the right screen edge with a randomized speed.
    fn spawn_enemy(&mut self, rng: &mut impl Rng) {
        let mut sprite = Sprite::new(
            self.enemy_sheet.clone(),
            vec2(ENEMY_FRAME_W, ENEMY_FRAME_H),
            vec2(ENEMY_DEST_W, ENEMY_DEST_H),
            vec2(ENEMY_SPAWN_X, ENEMY_SPAWN_Y),
            ENEMY_FRAME_COUNT,
        );
        sprite.flip_x = true;
        let speed = rng.gen_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX);
        self.enemies
            .push(Character::new(sprite, speed, ENEMY_FIRE_DELAY, 1));
    }

    fn resolve_collisions(&mut self, events: &mut FrameEvents) {
        // Enemy bullets against the player first.
        let player_rect = self.player.sprite.rect();
        let mut i = 0;
        while i < self.enemy_bullets.len() {
            if overlaps(&self.enemy_bullets[i].sprite.rect(), &player_rect) {
                self.enemy_bullets.swap_remove(i);
                self.player.hit_points = 0;
                self.player.lives -= 1;
                events.player_hit = true;
                if self.player.lives <= 0 {
                    events.game_over = true;
                    self.status = GameStatus::GameOver;
                } else {
                    self.player.hit_points = PLAYER_MAX_HIT_POINTS;
                }
            } else {
                i += 1;
            }
        }

        // Player bullets against enemies; each bullet kills at most one.
        let mut bi = 0;
        while bi < self.player_bullets.len() {
            let bullet_rect = self.player_bullets[bi].sprite.rect();
            let hit = self
                .enemies
                .iter()
                .position(|enemy| overlaps(&bullet_rect, &enemy.sprite.rect()));
            if let Some(ei) = hit {
                self.enemies.swap_remove(ei);
                self.player_bullets.swap_remove(bi);
                self.player.score += SCORE_PER_KILL;
                events.enemy_destroyed = true;
            } else {
                bi += 1;
            }
        }
    }

    /// Drop every bullet and enemy whose rectangle is fully outside the
    /// screen. Idempotent: a second pass with no movement removes nothing.
    pub fn reap_offscreen(&mut self) {
        self.player_bullets
            .retain(|b| !fully_offscreen(&b.sprite.rect()));
        self.enemy_bullets
            .retain(|b| !fully_offscreen(&b.sprite.rect()));
        self.enemies
            .retain(|e| !fully_offscreen(&e.sprite.rect()));
    }

    /// Back to a fresh round. The round score folds into the running
    /// high score, which persists only for this process.
    pub fn restart(&mut self) {
        self.enemies.clear();
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.high_score += self.player.score;
        self.player.score = 0;
        self.player.lives = PLAYER_START_LIVES;
        self.player.hit_points = PLAYER_MAX_HIT_POINTS;
        self.player.fire_timer = 0.0;
        self.player
            .sprite
            .set_position(vec2(PLAYER_START_X, PLAYER_START_Y));
        self.spawn_timer = ENEMY_SPAWN_DELAY;
        self.status = GameStatus::Playing;
    }
}

fn fully_offscreen(rect: &Rect) -> bool {
    rect.right() < 0.0
        || rect.left() > SCREEN_WIDTH
        || rect.bottom() < 0.0
        || rect.top() > SCREEN_HEIGHT
}
