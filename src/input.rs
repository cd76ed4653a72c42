use macroquad::input::{KeyCode, is_key_down, is_key_pressed};

/// One frame's worth of player intent.
///
/// Movement and fire are level-triggered (held keys); everything else is
/// edge-triggered one-shots, so holding M does not re-toggle the music every
/// frame and holding Enter does not restart twice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Intents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub toggle_sound: bool,
    pub restart: bool,
    pub quit: bool,
    pub volume_up: bool,
    pub volume_down: bool,
}

impl Intents {
    /// Snapshot the keyboard. WASD and the arrow keys map to the same four
    /// movement intents; there is no remapping.
    pub fn poll() -> Self {
        Self {
            up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            fire: is_key_down(KeyCode::Space),
            toggle_sound: is_key_pressed(KeyCode::M),
            restart: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::R),
            quit: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
            volume_up: is_key_pressed(KeyCode::Equal),
            volume_down: is_key_pressed(KeyCode::Minus),
        }
    }
}
