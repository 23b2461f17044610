//! Gameplay core
//!
//! Everything that decides what happens in the arena, with no window, input
//! device or drawing code. The frame loop hands `World::tick` an
//! `InputSnapshot` and the current time, then draws `World::snapshot`.
//!
//! Key concepts:
//! - Entity: generational handle for players, enemies and bullets
//! - Body: the position/velocity/box capability every entity shares
//! - TimedGate: elapsed-time check behind fire rate, spawns and bullet expiry
//! - Events: what happened during the last tick

pub mod entity;
pub mod components;
pub mod config;
pub mod director;
pub mod event;
pub mod input;
pub mod math;
pub mod movement;
pub mod player;
pub mod timer;
pub mod world;
pub mod renderer;

pub use config::GameConfig;
pub use input::{InputSnapshot, MoveFlags};
pub use world::World;
