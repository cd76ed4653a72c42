use macroquad::prelude::*;

use road_raider::assets::Assets;
use road_raider::audio::AudioPlayer;
use road_raider::config::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use road_raider::input::Intents;
use road_raider::render::Renderer;
use road_raider::world::{GameStatus, World};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Load all assets once at the start; everything downstream works off
    // handles from this cache.
    let assets = Assets::load().await;
    let mut world = World::new(&assets);
    let mut audio = AudioPlayer::new(&assets);
    let mut renderer = Renderer::new();
    let mut rng = ::rand::thread_rng();

    audio.start_music();

    loop {
        let dt = get_frame_time();
        let intents = Intents::poll();

        match world.status {
            GameStatus::Playing => {
                if intents.toggle_sound {
                    audio.toggle_music();
                }
                if intents.volume_up {
                    audio.volume_up();
                }
                if intents.volume_down {
                    audio.volume_down();
                }

                let events = world.update(&intents, dt, &mut rng);
                audio.apply(events);

                renderer.update(dt);
                clear_background(Color::from_rgba(5, 5, 15, 255));
                renderer.draw(&world, &assets);
            }
            GameStatus::GameOver => {
                // Quit is only honored from this screen.
                if intents.quit {
                    break;
                }
                if intents.restart {
                    world.restart();
                    audio.resume_music();
                }

                clear_background(Color::from_rgba(5, 5, 15, 255));
                renderer.draw_game_over(&world, &assets);
            }
        }

        next_frame().await
    }
}
