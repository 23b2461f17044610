//! shmup: a minimal top-down shooter
//!
//! A square player moves with WASD and shoots toward the mouse. Enemies
//! spawn on a ring around the player and walk straight at it.
//! - Title screen until Return is held
//! - Fixed 60 FPS; one simulation tick per frame
//! - Fixed 800x600 window, default camera (screen pixels are world units)

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod game;
mod input;
mod logging;

use std::path::{Path, PathBuf};
use macroquad::prelude::*;
use app::{AppState, GameMode};
use game::renderer::{draw_arena, draw_title};
use game::{GameConfig, World};
use input::InputState;

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;
const TARGET_FPS: f64 = 60.0;

const CONFIG_PATH: &str = "assets/shmup.ron";
const TITLE_TEXTURE: &str = "assets/title.png";
const CROSSHAIR_TEXTURE: &str = "assets/crosshair.png";

/// Command line flags (native only)
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "A minimal top-down shooter")]
struct Args {
    /// Log per-tick gameplay events
    #[arg(short, long)]
    verbose: bool,

    /// Tuning file to load instead of assets/shmup.ron
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the enemy spawner for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_args() -> Args {
    use clap::Parser;
    Args::parse()
}

#[cfg(target_arch = "wasm32")]
fn parse_args() -> Args {
    Args::default()
}

fn window_conf() -> Conf {
    Conf {
        window_title: "shmup".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Report an unrecoverable startup error and quit
fn die(message: &str) -> ! {
    log::error!("Fatal error: \"{}\" quitting...", message);
    std::process::exit(1);
}

async fn load_required_texture(path: &str) -> Texture2D {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Nearest);
            log::info!("Loaded {}", path);
            tex
        }
        Err(e) => die(&format!("could not load {}: {}", path, e)),
    }
}

/// Debug-log what happened during the last tick
fn log_events(world: &World) {
    let events = &world.events;
    if events.is_empty() {
        return;
    }

    for e in events.spawned.iter() {
        log::debug!("enemy {} spawned at ({:.1}, {:.1})", e.enemy, e.position.x, e.position.y);
    }
    for e in events.fired.iter() {
        log::debug!("bullet {} fired by {} with velocity ({:.2}, {:.2})", e.bullet, e.owner, e.velocity.x, e.velocity.y);
    }
    for e in events.hit.iter() {
        log::debug!("enemy {} hit by bullet {}, health {}", e.enemy, e.bullet, e.remaining);
    }
    for e in events.killed.iter() {
        log::debug!("enemy {} killed by {} at ({:.1}, {:.1})", e.enemy, e.killer, e.position.x, e.position.y);
    }
    log::debug!(
        "tick {}: {} entities, {} enemies, {} hits, {} kills",
        world.tick_count,
        world.entity_count(),
        world.director.enemy_count(),
        events.hit.len(),
        events.killed.len(),
    );
}

/// Sleep off whatever is left of this frame's time slice
fn limit_frame_rate(frame_start: f64, target_frame_time: f64) {
    let remaining = target_frame_time - (get_time() - frame_start);
    if remaining <= 0.0 {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: just spin-wait (no thread::sleep available)
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {
            // Busy wait - browser will handle frame pacing
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let args = parse_args();
    logging::init(args.verbose);
    log::info!("=== shmup v{} ===", VERSION);

    let config = match &args.config {
        // An explicit file must exist and parse
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => die(&format!("{}: {}", path.display(), e)),
        },
        None => GameConfig::load_or_default(Path::new(CONFIG_PATH)),
    };

    show_mouse(false);

    let title = load_required_texture(TITLE_TEXTURE).await;
    let crosshair = load_required_texture(CROSSHAIR_TEXTURE).await;

    let seed = args
        .seed
        .unwrap_or_else(|| (miniquad::date::now() * 1000.0) as u64);
    log::info!("Spawn seed: {}", seed);

    let spawn = vec2(WINDOW_WIDTH as f32 * 0.5, WINDOW_HEIGHT as f32 * 0.5);
    let mut app = AppState::new(config, spawn, seed);
    let mut input = InputState::new();
    let target_frame_time = 1.0 / TARGET_FPS;

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        let snapshot = input.poll();
        app.frame(&snapshot, frame_start);

        match app.mode {
            GameMode::Title => draw_title(&title),
            GameMode::Playing => {
                if let Some(world) = app.world.as_ref() {
                    log_events(world);
                    draw_arena(&world.snapshot(), &crosshair);
                }
            }
        }

        limit_frame_rate(frame_start, target_frame_time);
        next_frame().await;
    }
}
