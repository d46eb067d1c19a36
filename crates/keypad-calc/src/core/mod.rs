//! Core calculator: the operator-chaining state machine
//!
//! Error prevention: unsupported keys are a typed error that the calculator
//! recovers from locally, so no input can leave the state corrupted.

mod calculator;
pub mod numeric;
mod operations;

pub use calculator::{Calculator, CalculatorState, Operand, PendingOperation};
pub use numeric::{format_number, parse_operand};
pub use operations::{Action, InputToken, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The key maps to an action the calculator does not implement.
    ///
    /// The display text is the notice shown to the user.
    #[error("Sorry, the \"{action}\" operation is not yet supported")]
    UnsupportedOperation {
        /// Name of the rejected action
        action: String,
    },
}

impl CalcError {
    /// Creates an unsupported-operation error
    #[must_use]
    pub fn unsupported(action: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            action: action.into(),
        }
    }
}
