use macroquad::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

mod config;
mod error;
mod game;
mod geom;
mod input;
mod render;

use config::GameConfig;
use game::Session;
use input::InputHandler;
use render::Renderer;

fn window_conf() -> Conf {
    let config = GameConfig::load();
    Conf {
        window_title: "Bear and berries".to_string(),
        window_width: config.window_width,
        window_height: config.window_height,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = GameConfig::load();
    let renderer = Renderer::new().await;
    let mut input_handler = InputHandler::new();

    let mut rng = ::rand::thread_rng();
    let mut session = match Session::new(&config, get_time(), &mut rng) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return;
        }
    };
    log::info!(
        "Session started: {} berries in a {}x{} tile world",
        config.berry_count,
        config.world_columns,
        config.world_rows
    );

    loop {
        #[cfg(not(target_arch = "wasm32"))]
        let frame_start = Instant::now();

        // 1. Drain input and apply state changes
        if input_handler.process(&mut session) {
            log::info!(
                "Quit with {} collected, {} remaining",
                session.score(),
                session.remaining()
            );
            break;
        }

        // 2. Advance the simulation on the shared monotonic clock
        session.update(get_time());

        // 3. Produce the frame
        renderer.render(&session);

        // Hold the loop to the configured cadence (default 30 steps/second)
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(cap) = config.fps_cap {
            let target_frame_time = Duration::from_secs_f64(1.0 / cap as f64);
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        next_frame().await;
    }
}
