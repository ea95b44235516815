//! Keyboard mapping for the TUI frontend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Input, Operation, SciFn};

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a keypad event to the engine
    Press(Input),
    /// Switch between the basic and scientific layouts
    ToggleLayout,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(ch) => Self::map_char(ch),
            KeyCode::Enter => KeyAction::Press(Input::Equals),
            KeyCode::Esc => KeyAction::Press(Input::Reset),
            KeyCode::Tab => KeyAction::ToggleLayout,
            _ => KeyAction::None,
        }
    }

    fn map_char(ch: char) -> KeyAction {
        let input = match ch {
            '0'..='9' => Input::Digit(ch.to_digit(10).unwrap_or(0) as u8),
            '.' => Input::Decimal,
            '+' => Input::Operator(Operation::Add),
            '-' => Input::Operator(Operation::Subtract),
            '*' => Input::Operator(Operation::Multiply),
            '/' => Input::Operator(Operation::Divide),
            '=' => Input::Equals,
            'c' | 'C' => Input::Reset,
            'n' => Input::ToggleSign,
            '%' => Input::Percent,
            's' => Input::Function(SciFn::Sin),
            // 'c' is taken by reset, so cosine gets its second letter
            'o' => Input::Function(SciFn::Cos),
            't' => Input::Function(SciFn::Tan),
            'g' => Input::Function(SciFn::Log10),
            'l' => Input::Function(SciFn::Ln),
            'q' => return KeyAction::Quit,
            _ => return KeyAction::None,
        };
        KeyAction::Press(input)
    }
}
