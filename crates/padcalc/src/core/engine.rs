//! The keypad input/state machine.

use tracing::{debug, warn};

use crate::core::{EngineSnapshot, Input, Operation, SciFn, ERROR_TEXT};

/// Button-press calculator engine.
///
/// Owns the display text, the stored left operand, the pending binary
/// operator, and the fresh-entry flag. Every handler runs to completion on
/// one input event; the caller reads [`Engine::display`] afterwards and
/// renders it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    /// Current textual content of the display
    display: String,
    /// Left operand of a pending binary operation
    stored_value: f64,
    /// The pending binary operator, if any
    pending_op: Option<Operation>,
    /// Whether the next digit starts a new entry rather than appending
    fresh: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial state: display `"0"`, no stored
    /// operand, no pending operator, fresh entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            stored_value: 0.0,
            pending_op: None,
            fresh: true,
        }
    }

    /// Rebuilds an engine from a previously exported snapshot.
    ///
    /// The restored engine behaves identically to the one that produced the
    /// snapshot for every subsequent input.
    #[must_use]
    pub fn from_snapshot(snapshot: EngineSnapshot) -> Self {
        Self {
            display: snapshot.display,
            stored_value: snapshot.stored_value,
            pending_op: snapshot.pending_op,
            fresh: snapshot.fresh,
        }
    }

    /// Exports the current state as a flat record.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display.clone(),
            stored_value: self.stored_value,
            pending_op: self.pending_op,
            fresh: self.fresh,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the stored left operand
    #[must_use]
    pub fn stored_value(&self) -> f64 {
        self.stored_value
    }

    /// Returns the pending binary operator, if any
    #[must_use]
    pub fn pending_op(&self) -> Option<Operation> {
        self.pending_op
    }

    /// Returns true if the next digit starts a new entry
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Dispatches one keypad event to the matching handler.
    pub fn apply(&mut self, input: Input) {
        debug!(?input, display = %self.display, "keypad input");
        match input {
            Input::Digit(d) => self.press_digit(d),
            Input::Decimal => self.press_decimal(),
            Input::Operator(op) => self.press_operator(op),
            Input::Equals => self.press_equals(),
            Input::Reset => self.reset(),
            Input::ToggleSign => self.toggle_sign(),
            Input::Percent => self.percentage(),
            Input::Function(f) => self.apply_function(f),
        }
    }

    /// Handles a digit key, 0 through 9. Values above 9 are ignored.
    pub fn press_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.fresh {
            self.display.clear();
            self.fresh = false;
        }
        self.display.push(ch);
    }

    /// Handles the decimal point key.
    ///
    /// Silently rejected if the display already contains a decimal point;
    /// otherwise behaves like a digit.
    pub fn press_decimal(&mut self) {
        if self.display.contains('.') {
            return;
        }
        if self.fresh {
            self.display.clear();
            self.fresh = false;
        }
        self.display.push('.');
    }

    /// Handles one of the four binary operator keys.
    ///
    /// A pending operation with an entered second operand resolves first,
    /// so `3 + 4 *` computes `7` before `*` becomes pending.
    pub fn press_operator(&mut self, op: Operation) {
        if self.pending_op.is_some() && !self.fresh {
            self.press_equals();
        }
        self.pending_op = Some(op);
        self.stored_value = self.parse_or_zero();
        self.fresh = true;
    }

    /// Handles the equals key, resolving the pending operation.
    ///
    /// No-op when nothing is pending or the display shows the error
    /// sentinel. Division by a zero second operand sets the sentinel and
    /// leaves the stored operand and pending operator as they were.
    pub fn press_equals(&mut self) {
        let Some(op) = self.pending_op else {
            return;
        };
        if self.display == ERROR_TEXT {
            return;
        }

        let second = self.parse_or_zero();
        if op == Operation::Divide && second == 0.0 {
            warn!(stored = self.stored_value, "division by zero");
            self.display = ERROR_TEXT.to_string();
            return;
        }

        let result = op.apply(self.stored_value, second);
        self.display = format_value(result);
        self.stored_value = result;
        self.fresh = true;
        self.pending_op = None;
    }

    /// Returns the engine to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Negates the displayed value. No-op on the error sentinel.
    pub fn toggle_sign(&mut self) {
        if self.display == ERROR_TEXT {
            return;
        }
        let value = self.parse_or_zero();
        self.display = format_value(-value);
    }

    /// Divides the displayed value by 100. No-op on the error sentinel.
    pub fn percentage(&mut self) {
        if self.display == ERROR_TEXT {
            return;
        }
        let value = self.parse_or_zero();
        self.display = format_value(value / 100.0);
    }

    /// Handles a unary scientific function key.
    ///
    /// An unparsable display or a non-positive logarithm input sets the
    /// error sentinel; on success the next digit starts a new entry.
    pub fn apply_function(&mut self, function: SciFn) {
        let Ok(value) = self.display.parse::<f64>() else {
            warn!(function = function.label(), "unparsable function input");
            self.display = ERROR_TEXT.to_string();
            return;
        };

        if function.is_logarithm() && value <= 0.0 {
            warn!(function = function.label(), value, "logarithm domain");
            self.display = ERROR_TEXT.to_string();
            return;
        }

        let result = function.apply(value);
        self.fresh = true;
        self.display = format_value(result);
    }

    /// Reads the display as a float, falling back to zero.
    ///
    /// The fallback is deliberate: a blank or non-numeric display reads as
    /// `0.0` in every non-scientific path instead of failing.
    fn parse_or_zero(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

/// Formats a computed value for the display: fixed six decimal places.
fn format_value(value: f64) -> String {
    format!("{value:.6}")
}
