use macroquad::audio::{Sound, load_sound};
use macroquad::logging::{info, warn};
use macroquad::text::{Font, load_ttf_font};
use macroquad::texture::{Texture2D, load_texture};

use crate::error::GameError;

/// Everything is loaded once at startup and looked up from here afterwards —
/// firing a bullet never touches the filesystem.
///
/// A missing file is recoverable: the slot stays `None`, the failure is
/// logged, and drawing/playing that asset becomes a no-op.
#[derive(Default)]
pub struct Assets {
    pub background: Option<Texture2D>,
    pub player_sheet: Option<Texture2D>,
    pub enemy_sheet: Option<Texture2D>,
    pub player_bullet: Option<Texture2D>,
    pub enemy_bullet: Option<Texture2D>,
    pub heart: Option<Texture2D>,
    pub font: Option<Font>,
    pub music: Option<Sound>,
    pub sfx_player_fire: Option<Sound>,
    pub sfx_enemy_fire: Option<Sound>,
    pub sfx_player_hit: Option<Sound>,
    pub sfx_enemy_destroyed: Option<Sound>,
    pub sfx_game_over: Option<Sound>,
}

impl Assets {
    pub async fn load() -> Self {
        let assets = Self {
            background: texture("Assets/textures/background.png").await,
            player_sheet: texture("Assets/textures/Player_walk_sheet.png").await,
            enemy_sheet: texture("Assets/textures/Scorpion_walk_sheet.png").await,
            player_bullet: texture("Assets/textures/PlayerProjectile.png").await,
            enemy_bullet: texture("Assets/textures/PoisonProjectile.png").await,
            heart: texture("Assets/textures/Heart.png").await,
            font: font("Assets/fonts/joystix.ttf").await,
            music: sound("Assets/audio/music.ogg").await,
            sfx_player_fire: sound("Assets/audio/player_fire.wav").await,
            sfx_enemy_fire: sound("Assets/audio/enemy_fire.wav").await,
            sfx_player_hit: sound("Assets/audio/player_hit.wav").await,
            sfx_enemy_destroyed: sound("Assets/audio/enemy_explode.wav").await,
            sfx_game_over: sound("Assets/audio/game_over.wav").await,
        };
        info!("asset loading finished");
        assets
    }
}

async fn texture(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => Some(tex),
        Err(err) => {
            warn!(
                "{}",
                GameError::AssetLoad {
                    path: path.to_string(),
                    message: err.to_string(),
                }
            );
            None
        }
    }
}

async fn sound(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!(
                "{}",
                GameError::AssetLoad {
                    path: path.to_string(),
                    message: err.to_string(),
                }
            );
            None
        }
    }
}

async fn font(path: &str) -> Option<Font> {
    match load_ttf_font(path).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!(
                "{}",
                GameError::AssetLoad {
                    path: path.to_string(),
                    message: err.to_string(),
                }
            );
            None
        }
    }
}
