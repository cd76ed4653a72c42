//! All tuning constants for the game in one place.

pub const SCREEN_WIDTH: f32 = 1200.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const WINDOW_TITLE: &str = "Road Raider";

/// Vertical band the player walks along. Narrower than the full screen —
/// the sprite stays on the road, not the sky.
pub const LANE_TOP: f32 = 300.0;
pub const LANE_BOTTOM: f32 = SCREEN_HEIGHT;

pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = 420.0;
pub const PLAYER_SPEED: f32 = 300.0;
pub const PLAYER_FIRE_DELAY: f32 = 0.4;
pub const PLAYER_BULLET_SPEED: f32 = 600.0;
pub const PLAYER_START_LIVES: i32 = 3;
pub const PLAYER_MAX_HIT_POINTS: i32 = 100;

pub const ENEMY_SPEED_MIN: f32 = 80.0;
pub const ENEMY_SPEED_MAX: f32 = 200.0;
pub const ENEMY_FIRE_DELAY: f32 = 2.0;
pub const ENEMY_BULLET_SPEED: f32 = 400.0;
pub const ENEMY_SPAWN_DELAY: f32 = 1.5;
/// Enemies enter at the right screen edge, at a fixed height on the road.
pub const ENEMY_SPAWN_X: f32 = SCREEN_WIDTH;
pub const ENEMY_SPAWN_Y: f32 = 365.0;

pub const SCORE_PER_KILL: u32 = 10;

/// Walk-cycle playback rate, in animation frames per second.
/// Driven from elapsed time so playback speed is frame-rate independent.
pub const WALK_ANIM_FPS: f32 = 12.0;

/// How fast the background scrolls leftward, in px/s.
pub const BACKGROUND_SCROLL_SPEED: f32 = 60.0;

/// Music volume step applied per volume-up/volume-down press.
pub const VOLUME_STEP: f32 = 0.1;

// Sprite-sheet geometry (source frame size within the sheet, on-screen size,
// frame count). Fixed per asset, matching the shipped textures.
pub const PLAYER_FRAME_W: f32 = 128.0;
pub const PLAYER_FRAME_H: f32 = 128.0;
pub const PLAYER_DEST_W: f32 = 120.0;
pub const PLAYER_DEST_H: f32 = 120.0;
pub const PLAYER_FRAME_COUNT: u32 = 4;

pub const ENEMY_FRAME_W: f32 = 144.0;
pub const ENEMY_FRAME_H: f32 = 133.0;
pub const ENEMY_DEST_W: f32 = 180.0;
pub const ENEMY_DEST_H: f32 = 166.0;
pub const ENEMY_FRAME_COUNT: u32 = 4;

pub const BULLET_W: f32 = 47.0;
pub const BULLET_H: f32 = 37.0;

pub const HEART_SIZE: f32 = 32.0;
