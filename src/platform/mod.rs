//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard state (key names to logical actions)

pub mod input;

pub use input::{Action, KeyState, KeyboardState};
