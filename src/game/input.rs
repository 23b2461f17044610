//! Per-frame input as the simulation sees it
//!
//! The frame loop polls the keyboard and mouse and hands the core one of
//! these per tick. Nothing in `game` reads devices directly.

use macroquad::math::Vec2;

/// Held directional keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

/// Everything the core needs from the devices for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub movement: MoveFlags,
    /// Start the game from the title screen
    pub confirm: bool,
    /// Fire button held
    pub fire: bool,
    /// Pointer position in world coordinates
    pub aim: Vec2,
}
