use macroquad::color::WHITE;
use macroquad::math::{Rect, Vec2};
use macroquad::texture::{DrawTextureParams, Texture2D, draw_texture_ex};

/// A positioned, sized, animatable visual entity backed by a shared texture.
///
/// The texture is a cheap cloneable handle into GPU memory; many sprites can
/// point at the same loaded sheet. `None` means the asset failed to load —
/// the sprite still moves and collides, it just draws nothing.
#[derive(Clone, Debug)]
pub struct Sprite {
    texture: Option<Texture2D>,
    /// Size of one animation frame within the sheet. Frames are laid out in
    /// a single horizontal strip.
    frame_size: Vec2,
    dest_size: Vec2,
    pub position: Vec2,
    frame_count: u32,
    /// Fractional frame accumulator, always in `0.0..frame_count`.
    frame: f32,
    pub rotation_degrees: f32,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Sprite {
    pub fn new(
        texture: Option<Texture2D>,
        frame_size: Vec2,
        dest_size: Vec2,
        position: Vec2,
        frame_count: u32,
    ) -> Self {
        Self {
            texture,
            frame_size,
            dest_size,
            position,
            frame_count: frame_count.max(1),
            frame: 0.0,
            rotation_degrees: 0.0,
            flip_x: false,
            flip_y: false,
        }
    }

    /// Single-frame sprite whose source frame and on-screen size match.
    pub fn single(texture: Option<Texture2D>, size: Vec2, position: Vec2) -> Self {
        Self::new(texture, size, size, position, 1)
    }

    /// The sprite's current screen-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.dest_size.x,
            self.dest_size.y,
        )
    }

    pub fn size(&self) -> Vec2 {
        self.dest_size
    }

    /// Negative sizes are not rejected; what they render is undefined.
    pub fn set_size(&mut self, size: Vec2) {
        self.dest_size = size;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_texture(&mut self, texture: Option<Texture2D>) {
        self.texture = texture;
    }

    pub fn current_frame(&self) -> f32 {
        self.frame
    }

    /// Advance the animation accumulator by `frames` (fractional), wrapping
    /// back to the start of the cycle on reaching the frame count.
    pub fn add_frame_time(&mut self, frames: f32) {
        self.frame = (self.frame + frames).rem_euclid(self.frame_count as f32);
    }

    fn source_rect(&self) -> Rect {
        let index = self.frame.floor().min((self.frame_count - 1) as f32);
        Rect::new(
            index * self.frame_size.x,
            0.0,
            self.frame_size.x,
            self.frame_size.y,
        )
    }

    pub fn draw(&self) {
        let Some(texture) = &self.texture else {
            return;
        };
        draw_texture_ex(
            texture,
            self.position.x,
            self.position.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.dest_size),
                source: Some(self.source_rect()),
                rotation: self.rotation_degrees.to_radians(),
                flip_x: self.flip_x,
                flip_y: self.flip_y,
                ..Default::default()
            },
        );
    }
}
