//! Keyboard to tick-input mapping
//!
//! Browsers deliver key events; the simulation wants key-down state sampled
//! once per frame. [`KeyboardState`] tracks which logical actions are held.

use crate::sim::TickInput;

/// Logical digital inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::TurnLeft,
        Action::TurnRight,
        Action::MoveForward,
        Action::MoveBackward,
    ];

    /// Map a `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "q" | "Q" | "ArrowLeft" => Some(Action::TurnLeft),
            "e" | "E" | "ArrowRight" => Some(Action::TurnRight),
            "w" | "W" | "ArrowUp" => Some(Action::MoveForward),
            "s" | "S" | "ArrowDown" => Some(Action::MoveBackward),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        match self {
            Action::TurnLeft => 0,
            Action::TurnRight => 1,
            Action::MoveForward => 2,
            Action::MoveBackward => 3,
        }
    }
}

/// Anything that can answer "is this action held right now"
pub trait KeyState {
    fn is_down(&self, action: Action) -> bool;

    /// Sample all actions into a tick input
    fn tick_input(&self) -> TickInput {
        TickInput {
            turn_left: self.is_down(Action::TurnLeft),
            turn_right: self.is_down(Action::TurnRight),
            forward: self.is_down(Action::MoveForward),
            backward: self.is_down(Action::MoveBackward),
        }
    }
}

/// Held-key tracker fed by keydown/keyup events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: [bool; 4],
}

impl KeyboardState {
    pub fn press(&mut self, action: Action) {
        self.held[action.slot()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.slot()] = false;
    }

    /// Apply a key event by name; returns whether the key was recognised
    pub fn handle_key(&mut self, key: &str, down: bool) -> bool {
        match Action::from_key(key) {
            Some(action) if down => {
                self.press(action);
                true
            }
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }
}

impl KeyState for KeyboardState {
    fn is_down(&self, action: Action) -> bool {
        self.held[action.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key("q"), Some(Action::TurnLeft));
        assert_eq!(Action::from_key("ArrowRight"), Some(Action::TurnRight));
        assert_eq!(Action::from_key("W"), Some(Action::MoveForward));
        assert_eq!(Action::from_key("s"), Some(Action::MoveBackward));
        assert_eq!(Action::from_key("x"), None);
    }

    #[test]
    fn test_press_release() {
        let mut keys = KeyboardState::default();
        assert_eq!(keys.tick_input(), TickInput::default());

        assert!(keys.handle_key("w", true));
        assert!(keys.handle_key("e", true));
        let input = keys.tick_input();
        assert!(input.forward && input.turn_right);
        assert!(!input.backward && !input.turn_left);

        assert!(keys.handle_key("w", false));
        assert!(!keys.is_down(Action::MoveForward));
        assert!(keys.is_down(Action::TurnRight));

        assert!(!keys.handle_key("Shift", true));
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyboardState::default();
        for action in Action::ALL {
            keys.press(action);
        }
        assert!(Action::ALL.iter().all(|&a| keys.is_down(a)));
        keys.release_all();
        assert_eq!(keys.tick_input(), TickInput::default());
    }
}
