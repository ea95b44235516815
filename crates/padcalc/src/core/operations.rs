//! Closed operator and function enums.
//!
//! The set of keypad operations is a compile-time fact: no string tags, no
//! unreachable dispatch arms.

use serde::{Deserialize, Serialize};

/// Binary operator selected by one of the four operator keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operator to two operands.
    ///
    /// A zero divisor is rejected by the engine before this is reached;
    /// `Divide` here assumes a non-zero right operand.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// Unary scientific function keys.
///
/// Trigonometric functions interpret their input as degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SciFn {
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Base-10 logarithm
    Log10,
    /// Natural logarithm
    Ln,
}

impl SciFn {
    /// Canonical lowercase key label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log10",
            Self::Ln => "ln",
        }
    }

    /// True for the logarithms, which are undefined for input <= 0
    #[must_use]
    pub const fn is_logarithm(self) -> bool {
        matches!(self, Self::Log10 | Self::Ln)
    }

    /// Applies the function. Domain checking is the engine's job.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.to_radians().sin(),
            Self::Cos => value.to_radians().cos(),
            Self::Tan => value.to_radians().tan(),
            Self::Log10 => value.log10(),
            Self::Ln => value.ln(),
        }
    }
}
