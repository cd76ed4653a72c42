use macroquad::math::Vec2;

use crate::sprite::Sprite;

/// A projectile with a velocity fixed at creation time (px/s).
#[derive(Clone, Debug)]
pub struct Bullet {
    pub sprite: Sprite,
    pub velocity: Vec2,
}

impl Bullet {
    pub fn new(sprite: Sprite, velocity: Vec2) -> Self {
        Self { sprite, velocity }
    }

    /// Pure linear integration. Bounds checks and collisions are the
    /// simulation step's job, not the bullet's.
    pub fn update(&mut self, dt: f32) {
        self.sprite.position += self.velocity * dt;
    }
}
