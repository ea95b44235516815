//! Padcalc - a button-driven calculator engine
//!
//! The heart of this crate is [`core::Engine`], a small input/state machine
//! that interprets sequential keypad presses (digits, decimal point, binary
//! operators, equals, sign toggle, percent, reset, and a few unary
//! scientific functions) into a running computation, exposed as a display
//! string. The engine owns all arithmetic state; rendering is entirely the
//! caller's job.
//!
//! An optional TUI frontend (feature `tui`, on by default) provides a
//! keypad grid, keyboard/mouse mapping, and a ratatui renderer.
//!
//! # Example
//!
//! ```rust
//! use padcalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.press_digit(5);
//! engine.press_operator(Operation::Add);
//! engine.press_digit(3);
//! engine.press_equals();
//! assert_eq!(engine.display(), "8.000000");
//!
//! // State survives a teardown/recreate cycle via flat snapshots
//! let restored = Engine::from_snapshot(engine.snapshot());
//! assert_eq!(restored.display(), "8.000000");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        Engine, EngineSnapshot, Input, Operation, SciFn, SnapshotError, ERROR_TEXT,
    };

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction, Keypad, Layout};
}
