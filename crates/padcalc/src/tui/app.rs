//! TUI application state: the engine plus its keypad chrome.

use ratatui::layout::Rect;

use super::keypad::Keypad;
use crate::core::{Engine, EngineSnapshot, Input};

/// Keypad layout variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Digits, decimal point, operators, equals, reset, sign, percent
    Basic,
    /// Basic plus the five scientific function buttons
    Scientific,
}

impl Layout {
    fn keypad(self) -> Keypad {
        match self {
            Self::Basic => Keypad::basic(),
            Self::Scientific => Keypad::scientific(),
        }
    }
}

/// Calculator application wrapping the engine for terminal use
#[derive(Debug)]
pub struct CalculatorApp {
    engine: Engine,
    keypad: Keypad,
    layout: Layout,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with the basic keypad layout
    #[must_use]
    pub fn new() -> Self {
        Self::with_layout(Layout::Basic)
    }

    /// Creates an app with the given keypad layout
    #[must_use]
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            engine: Engine::new(),
            keypad: layout.keypad(),
            layout,
            should_quit: false,
        }
    }

    /// Recreates an app around a previously exported engine snapshot
    #[must_use]
    pub fn restore(layout: Layout, snapshot: EngineSnapshot) -> Self {
        Self {
            engine: Engine::from_snapshot(snapshot),
            keypad: layout.keypad(),
            layout,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Returns the active layout
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds one input event to the engine and highlights the key
    pub fn press(&mut self, input: Input) {
        self.keypad.highlight(input);
        self.engine.apply(input);
    }

    /// Routes a mouse click inside the keypad area to a button press.
    ///
    /// Returns true if a button was hit.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> bool {
        if let Some(input) = self.keypad.hit_test(keypad_area, x, y) {
            self.press(input);
            true
        } else {
            false
        }
    }

    /// Switches between the basic and scientific layouts.
    ///
    /// The engine is torn down and rebuilt from its own snapshot, the same
    /// save/restore cycle a host UI performs when its view is recreated.
    pub fn toggle_layout(&mut self) {
        let next = match self.layout {
            Layout::Basic => Layout::Scientific,
            Layout::Scientific => Layout::Basic,
        };
        *self = Self::restore(next, self.engine.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operation, SciFn};

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert_eq!(app.layout(), Layout::Basic);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_default() {
        let app = CalculatorApp::default();
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_app_with_scientific_layout() {
        let app = CalculatorApp::with_layout(Layout::Scientific);
        assert!(app.keypad().find(Input::Function(SciFn::Sin)).is_some());
    }

    // ===== Press tests =====

    #[test]
    fn test_press_updates_display() {
        let mut app = CalculatorApp::new();
        app.press(Input::Digit(4));
        app.press(Input::Digit(2));
        assert_eq!(app.display(), "42");
    }

    #[test]
    fn test_press_highlights_button() {
        let mut app = CalculatorApp::new();
        app.press(Input::Digit(7));
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].input, Input::Digit(7));
    }

    #[test]
    fn test_press_sequence_computes() {
        let mut app = CalculatorApp::new();
        for input in [
            Input::Digit(5),
            Input::Operator(Operation::Add),
            Input::Digit(3),
            Input::Equals,
        ] {
            app.press(input);
        }
        assert_eq!(app.display(), "8.000000");
    }

    // ===== Click tests =====

    #[test]
    fn test_click_inside_keypad() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 26, 12);
        // Second row starts at y=3: the 7 button
        assert!(app.click(area, 1, 3));
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_click_outside_keypad() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 26, 12);
        assert!(!app.click(area, 100, 100));
        assert_eq!(app.display(), "0");
    }

    // ===== Layout toggle tests =====

    #[test]
    fn test_toggle_layout_switches_keypad() {
        let mut app = CalculatorApp::new();
        app.toggle_layout();
        assert_eq!(app.layout(), Layout::Scientific);
        app.toggle_layout();
        assert_eq!(app.layout(), Layout::Basic);
    }

    #[test]
    fn test_toggle_layout_preserves_engine_state() {
        let mut app = CalculatorApp::new();
        app.press(Input::Digit(9));
        app.press(Input::Operator(Operation::Multiply));

        app.toggle_layout();

        assert_eq!(app.engine().stored_value(), 9.0);
        assert_eq!(app.engine().pending_op(), Some(Operation::Multiply));
        app.press(Input::Digit(3));
        app.press(Input::Equals);
        assert_eq!(app.display(), "27.000000");
    }

    #[test]
    fn test_restore_from_snapshot() {
        let mut first = CalculatorApp::new();
        first.press(Input::Digit(6));
        first.press(Input::Operator(Operation::Subtract));

        let mut second = CalculatorApp::restore(Layout::Basic, first.engine().snapshot());
        second.press(Input::Digit(2));
        second.press(Input::Equals);
        assert_eq!(second.display(), "4.000000");
    }

    // ===== Quit tests =====

    #[test]
    fn test_quit() {
        let mut app = CalculatorApp::new();
        app.quit();
        assert!(app.should_quit());
    }
}
