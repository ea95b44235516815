//! Core calculator engine: a keypad-press state machine over a display string.
//!
//! The engine owns four fields (display text, stored left operand, pending
//! binary operator, fresh-entry flag) and mutates them in response to
//! discrete input events. Arithmetic faults surface as the [`ERROR_TEXT`]
//! display sentinel, never as panics or propagated errors.

pub mod engine;
mod operations;
pub mod snapshot;

pub use engine::Engine;
pub use operations::{Operation, SciFn};
pub use snapshot::{EngineSnapshot, SnapshotError};

/// Sentinel display text for divide-by-zero and invalid scientific input.
///
/// A terminal display state: further arithmetic is blocked until
/// [`Engine::reset`].
pub const ERROR_TEXT: &str = "Error";

/// A discrete keypad event, one per button activation.
///
/// The presentation layer maps every button 1:1 onto one of these variants
/// and feeds them to [`Engine::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// One of the four binary operator keys
    Operator(Operation),
    /// The equals key
    Equals,
    /// The reset key (C)
    Reset,
    /// The sign-toggle key (±)
    ToggleSign,
    /// The percent key
    Percent,
    /// A unary scientific function key
    Function(SciFn),
}
