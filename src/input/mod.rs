//! Keyboard and mouse input
//!
//! Polls macroquad once per frame and turns the device state into the
//! `InputSnapshot` the gameplay core consumes.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
