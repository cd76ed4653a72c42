use macroquad::audio::{PlaySoundParams, Sound, play_sound, play_sound_once, set_sound_volume, stop_sound};

use crate::assets::Assets;
use crate::config::VOLUME_STEP;
use crate::world::FrameEvents;

/// Fire-and-forget sound effects plus one looping music track, driven
/// entirely by the events the simulation emits. Every missing sound is a
/// silent no-op.
pub struct AudioPlayer {
    music: Option<Sound>,
    sfx_player_fire: Option<Sound>,
    sfx_enemy_fire: Option<Sound>,
    sfx_player_hit: Option<Sound>,
    sfx_enemy_destroyed: Option<Sound>,
    sfx_game_over: Option<Sound>,
    music_playing: bool,
    music_volume: f32,
}

impl AudioPlayer {
    pub fn new(assets: &Assets) -> Self {
        Self {
            music: assets.music.clone(),
            sfx_player_fire: assets.sfx_player_fire.clone(),
            sfx_enemy_fire: assets.sfx_enemy_fire.clone(),
            sfx_player_hit: assets.sfx_player_hit.clone(),
            sfx_enemy_destroyed: assets.sfx_enemy_destroyed.clone(),
            sfx_game_over: assets.sfx_game_over.clone(),
            music_playing: false,
            music_volume: 0.5,
        }
    }

    pub fn apply(&mut self, events: FrameEvents) {
        if events.player_fired {
            play(&self.sfx_player_fire);
        }
        if events.enemy_fired {
            play(&self.sfx_enemy_fire);
        }
        if events.player_hit {
            play(&self.sfx_player_hit);
        }
        if events.enemy_destroyed {
            play(&self.sfx_enemy_destroyed);
        }
        if events.game_over {
            self.pause_music();
            play(&self.sfx_game_over);
        }
    }

    pub fn start_music(&mut self) {
        let Some(music) = &self.music else {
            return;
        };
        play_sound(
            music,
            PlaySoundParams {
                looped: true,
                volume: self.music_volume,
            },
        );
        self.music_playing = true;
    }

    /// macroquad has no pause primitive; the loop is stopped and restarted.
    pub fn pause_music(&mut self) {
        if let Some(music) = &self.music {
            stop_sound(music);
        }
        self.music_playing = false;
    }

    pub fn resume_music(&mut self) {
        if !self.music_playing {
            self.start_music();
        }
    }

    /// One-shot toggle: expects an edge-triggered intent, not a held key.
    pub fn toggle_music(&mut self) {
        if self.music_playing {
            self.pause_music();
        } else {
            self.start_music();
        }
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.music_volume + VOLUME_STEP);
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.music_volume - VOLUME_STEP);
    }

    fn set_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
        if let Some(music) = &self.music {
            set_sound_volume(music, self.music_volume);
        }
    }
}

fn play(sound: &Option<Sound>) {
    if let Some(sound) = sound {
        play_sound_once(sound);
    }
}
