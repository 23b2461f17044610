//! Application state and mode management
//!
//! Two modes: the title screen, and the game. Holding confirm on the title
//! screen starts a fresh `World`; there is no way back.

use macroquad::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::game::{GameConfig, InputSnapshot, World};

/// Which screen the frame loop should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Title,
    Playing,
}

impl GameMode {
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Title => "Title",
            GameMode::Playing => "Playing",
        }
    }
}

/// Main application state
pub struct AppState {
    pub mode: GameMode,
    pub config: GameConfig,
    /// Where the player starts (center of the arena)
    pub spawn: Vec2,
    /// Seed for the session's spawn RNG
    pub seed: u64,
    /// Present once the game has started
    pub world: Option<World>,
}

impl AppState {
    pub fn new(config: GameConfig, spawn: Vec2, seed: u64) -> Self {
        Self {
            mode: GameMode::Title,
            config,
            spawn,
            seed,
            world: None,
        }
    }

    /// Run one frame of whichever mode is active.
    ///
    /// On the title screen this only watches for confirm. The frame that
    /// starts the game does not tick it; the first tick is the next frame.
    pub fn frame(&mut self, input: &InputSnapshot, now: f64) {
        match self.mode {
            GameMode::Title => {
                if input.confirm {
                    self.start_game(now);
                }
            }
            GameMode::Playing => {
                if let Some(world) = self.world.as_mut() {
                    world.tick(input, now);
                }
            }
        }
    }

    /// Switch to `Playing` with a new world whose timers arm at `now`
    fn start_game(&mut self, now: f64) {
        let rng = StdRng::seed_from_u64(self.seed);
        self.world = Some(World::new(&self.config, self.spawn, now, rng));
        self.set_mode(GameMode::Playing);
    }

    fn set_mode(&mut self, mode: GameMode) {
        log::info!("Mode: {} -> {}", self.mode.label(), mode.label());
        self.mode = mode;
    }
}
