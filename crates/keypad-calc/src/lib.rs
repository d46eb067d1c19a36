//! Keypad Calculator
//!
//! A four-function calculator driven one key press at a time. The core is a
//! small state machine over pending operands and operators; everything it
//! shows goes through an injected [`view::CalculatorView`].
//!
//! # Principles
//!
//! - **Error prevention**: keys decode into a closed token set, unsupported
//!   keys are a typed error recovered in place
//! - **Visual feedback**: every display change is pushed to the view, never
//!   read back
//! - **Balanced testing**: the same behaviour checks run against the bare
//!   core and the mock DOM page
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Calculator::new(RecordingView::new());
//! for token in ["3", "add", "4", "multiply", "2", "calc"] {
//!     calc.press(InputToken::parse(token));
//! }
//! assert_eq!(calc.display(), "11");
//!
//! calc.press(InputToken::parse("percent"));
//! assert_eq!(
//!     calc.view().message(),
//!     Some("Sorry, the \"percent\" operation is not yet supported")
//! );
//! ```

// Allow common test patterns in this crate
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
pub mod driver;
pub mod keypad;
pub mod view;

/// Web host: mock DOM page always, browser bindings with the `wasm` feature
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_operand, Action, CalcError, CalcResult, Calculator,
        CalculatorState, InputToken, Operand, Operator, PendingOperation,
    };
    pub use crate::driver::{CalculatorDriver, RecordingDriver};
    pub use crate::keypad::{KeyDef, Keypad};
    pub use crate::view::{CalculatorView, RecordingView, ViewEvent};
    pub use crate::wasm::{DomDriver, DomElement, DomEvent, DomView, MockDom};
}
