//! Input state management
//!
//! Reads the keyboard and mouse through macroquad and combines them into an
//! action-based API, then packs the result into an `InputSnapshot`.

use macroquad::prelude::*;
use crate::game::{InputSnapshot, MoveFlags};
use super::{Action, Binding};

/// Polls devices for the frame loop
pub struct InputState {
    /// Last known pointer position; kept when the pointer leaves the window
    aim: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self { aim: Vec2::ZERO }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        match action.binding() {
            Binding::Key(key) => is_key_down(key),
            Binding::Mouse(button) => is_mouse_button_down(button),
        }
    }

    /// Call once per frame, before ticking the game
    pub fn poll(&mut self) -> InputSnapshot {
        let (x, y) = mouse_position();
        if x.is_finite() && y.is_finite() {
            // Default camera: screen pixels are world units
            self.aim = vec2(x, y);
        }

        InputSnapshot {
            movement: MoveFlags {
                up: self.action_down(Action::MoveUp),
                left: self.action_down(Action::MoveLeft),
                down: self.action_down(Action::MoveDown),
                right: self.action_down(Action::MoveRight),
            },
            confirm: self.action_down(Action::Confirm),
            fire: self.action_down(Action::Fire),
            aim: self.aim,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
