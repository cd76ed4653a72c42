use macroquad::math::{Vec2, vec2};

use crate::bullet::Bullet;
use crate::sprite::Sprite;

/// A sprite that can move and fire. Used for both the player and enemies;
/// only the control source (input vs. leftward drift) and the tuning differ.
#[derive(Clone, Debug)]
pub struct Character {
    pub sprite: Sprite,
    pub move_speed: f32,
    pub fire_delay: f32,
    /// Counts down; firing is allowed at `<= 0`. Deliberately not floored,
    /// `can_shoot` only tests the sign.
    pub fire_timer: f32,
    pub hit_points: i32,
    pub lives: i32,
    pub score: u32,
}

impl Character {
    pub fn new(sprite: Sprite, move_speed: f32, fire_delay: f32, hit_points: i32) -> Self {
        Self {
            sprite,
            move_speed,
            fire_delay,
            fire_timer: 0.0,
            hit_points,
            lives: 0,
            score: 0,
        }
    }

    /// Displace by `direction * move_speed * dt`. Direction components are
    /// expected in {-1, 0, 1}; diagonals are not normalized, so simultaneous
    /// axis input moves √2 faster than a single axis.
    pub fn move_by(&mut self, direction: Vec2, dt: f32) {
        self.sprite.position += direction * self.move_speed * dt;
    }

    /// Tick the fire cooldown.
    pub fn update(&mut self, dt: f32) {
        self.fire_timer -= dt;
    }

    pub fn can_shoot(&self) -> bool {
        self.fire_timer <= 0.0
    }

    /// Spawn a bullet from `template` into `out` and reset the cooldown.
    ///
    /// Does not self-gate: the caller must check `can_shoot()` first.
    /// Right-facing bullets leave from the shooter's leading edge; left-facing
    /// ones sit lower on the sprite (the enemy's tail position).
    pub fn shoot(&mut self, facing_right: bool, out: &mut Vec<Bullet>, velocity: Vec2, template: &Sprite) {
        let rect = self.sprite.rect();
        let mut sprite = template.clone();
        let spawn = if facing_right {
            vec2(rect.x + rect.w * 0.9, rect.y + rect.h * 0.35)
        } else {
            vec2(rect.x - sprite.size().x * 0.5, rect.y + rect.h * 0.55)
        };
        sprite.set_position(spawn);
        sprite.flip_x = !facing_right;
        out.push(Bullet::new(sprite, velocity));
        self.fire_timer = self.fire_delay;
    }
}
