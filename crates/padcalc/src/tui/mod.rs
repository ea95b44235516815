//! TUI frontend: keypad grid, keyboard mapping, and ratatui rendering.
//!
//! This layer only does two things with the engine: deliver discrete
//! [`crate::core::Input`] events and render the display text verbatim.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, Layout};
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUi};
