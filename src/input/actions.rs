//! Game action definitions

use macroquad::prelude::{KeyCode, MouseButton};

/// Everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (WASD)
    MoveUp,
    MoveLeft,
    MoveDown,
    MoveRight,

    // Title screen
    Confirm,        // Return

    // Combat
    Fire,           // Left mouse button
}

/// Physical input an action is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl Action {
    pub fn binding(self) -> Binding {
        match self {
            Action::MoveUp => Binding::Key(KeyCode::W),
            Action::MoveLeft => Binding::Key(KeyCode::A),
            Action::MoveDown => Binding::Key(KeyCode::S),
            Action::MoveRight => Binding::Key(KeyCode::D),
            Action::Confirm => Binding::Key(KeyCode::Enter),
            Action::Fire => Binding::Mouse(MouseButton::Left),
        }
    }
}
