//! Button grid for the TUI keypad.
//!
//! Buttons translate 1:1 into engine [`Input`] events; the grid knows how
//! to render itself, highlight the last press, and map mouse clicks back
//! to buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Input, Operation, SciFn};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text on the button
    pub label: &'static str,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
    /// The engine event this button emits
    pub input: Input,
}

impl KeypadButton {
    const DIGIT_LABELS: [&'static str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

    const fn new(label: &'static str, input: Input) -> Self {
        Self {
            label,
            pressed: false,
            input,
        }
    }

    /// Creates a digit button; values above 9 clamp to 9
    #[must_use]
    pub fn digit(d: u8) -> Self {
        let d = d.min(9);
        Self::new(Self::DIGIT_LABELS[usize::from(d)], Input::Digit(d))
    }

    /// Creates the decimal point button
    #[must_use]
    pub const fn decimal() -> Self {
        Self::new(".", Input::Decimal)
    }

    /// Creates a binary operator button
    #[must_use]
    pub const fn operator(op: Operation) -> Self {
        Self::new(op.symbol(), Input::Operator(op))
    }

    /// Creates the equals button
    #[must_use]
    pub const fn equals() -> Self {
        Self::new("=", Input::Equals)
    }

    /// Creates the reset button
    #[must_use]
    pub const fn reset() -> Self {
        Self::new("C", Input::Reset)
    }

    /// Creates the sign-toggle button
    #[must_use]
    pub const fn toggle_sign() -> Self {
        Self::new("±", Input::ToggleSign)
    }

    /// Creates the percent button
    #[must_use]
    pub const fn percent() -> Self {
        Self::new("%", Input::Percent)
    }

    /// Creates a scientific function button
    #[must_use]
    pub const fn function(f: SciFn) -> Self {
        Self::new(f.label(), Input::Function(f))
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad: rows of buttons, possibly of different lengths.
///
/// Basic layout:
/// ```text
/// [ C ] [ ± ] [ % ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ = ]
/// ```
///
/// The scientific layout adds a top row with the five function buttons.
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::basic()
    }
}

impl Keypad {
    fn base_rows() -> Vec<Vec<KeypadButton>> {
        vec![
            vec![
                KeypadButton::reset(),
                KeypadButton::toggle_sign(),
                KeypadButton::percent(),
                KeypadButton::operator(Operation::Divide),
            ],
            vec![
                KeypadButton::digit(7),
                KeypadButton::digit(8),
                KeypadButton::digit(9),
                KeypadButton::operator(Operation::Multiply),
            ],
            vec![
                KeypadButton::digit(4),
                KeypadButton::digit(5),
                KeypadButton::digit(6),
                KeypadButton::operator(Operation::Subtract),
            ],
            vec![
                KeypadButton::digit(1),
                KeypadButton::digit(2),
                KeypadButton::digit(3),
                KeypadButton::operator(Operation::Add),
            ],
            vec![
                KeypadButton::digit(0),
                KeypadButton::decimal(),
                KeypadButton::equals(),
            ],
        ]
    }

    /// Creates the basic keypad layout
    #[must_use]
    pub fn basic() -> Self {
        Self {
            rows: Self::base_rows(),
        }
    }

    /// Creates the scientific keypad layout
    #[must_use]
    pub fn scientific() -> Self {
        let mut rows = vec![vec![
            KeypadButton::function(SciFn::Sin),
            KeypadButton::function(SciFn::Cos),
            KeypadButton::function(SciFn::Tan),
            KeypadButton::function(SciFn::Log10),
            KeypadButton::function(SciFn::Ln),
        ]];
        rows.extend(Self::base_rows());
        Self { rows }
    }

    /// Returns the rows of buttons
    #[must_use]
    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Finds the position of the button emitting the given event
    #[must_use]
    pub fn find(&self, input: Input) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|b| b.input == input)
                .map(|c| (r, c))
        })
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in self.rows.iter_mut().flatten() {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button emitting the given event, releasing the rest.
    ///
    /// Events with no button in this layout (e.g. a scientific function on
    /// the basic keypad) just release everything.
    pub fn highlight(&mut self, input: Input) {
        self.release_all();
        if let Some((r, c)) = self.find(input) {
            if let Some(btn) = self.rows.get_mut(r).and_then(|row| row.get_mut(c)) {
                btn.set_pressed(true);
            }
        }
    }

    /// Maps a click position inside the keypad area to a button event
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Input> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_height = (area.height - 2) / self.row_count() as u16;
        if btn_height == 0 {
            return None;
        }
        let row = usize::from((rel_y - 1) / btn_height);
        let row_buttons = self.rows.get(row)?;

        let btn_width = (area.width - 2) / row_buttons.len() as u16;
        if btn_width == 0 {
            return None;
        }
        let col = usize::from((rel_x - 1) / btn_width);

        row_buttons.get(col).map(|b| b.input)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.input {
            Input::Digit(_) => Style::default().fg(Color::White),
            Input::Operator(_) => Style::default().fg(Color::Yellow),
            Input::Equals => Style::default().fg(Color::Green),
            Input::Reset => Style::default().fg(Color::Red),
            Input::Function(_) => Style::default().fg(Color::Magenta),
            Input::Decimal | Input::ToggleSign | Input::Percent => {
                Style::default().fg(Color::Cyan)
            }
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let rows = self.keypad.row_count() as u16;
        if inner.width < 4 || inner.height < rows {
            return; // Too small to render
        }
        let btn_height = inner.height / rows;

        for (r, row) in self.keypad.rows().iter().enumerate() {
            let btn_width = inner.width / row.len() as u16;
            if btn_width < 3 {
                continue;
            }
            for (c, btn) in row.iter().enumerate() {
                let x = inner.x + c as u16 * btn_width;
                let y = inner.y + r as u16 * btn_height + btn_height / 2;

                let label = format!("[{}]", btn.label);
                let label_x = x + btn_width.saturating_sub(label.chars().count() as u16) / 2;
                if y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        y,
                        &Span::styled(label, Self::button_style(btn)),
                        btn_width,
                    );
                }
            }
        }
    }
}
