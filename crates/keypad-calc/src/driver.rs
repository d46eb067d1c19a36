//! Unified Calculator Driver
//!
//! **Write the behaviour checks once, run them against every host.**
//!
//! Balanced testing: the same checks drive the bare calculator and the
//! mock DOM page.

use crate::core::{Action, Calculator, InputToken};
use crate::view::RecordingView;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::driver::{verify_precedence, CalculatorDriver, RecordingDriver};
///
/// let mut driver = RecordingDriver::new();
/// driver.press_all("3 add 4 multiply 2 calc");
/// assert_eq!(driver.display(), "11");
///
/// driver.clear();
/// verify_precedence(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, token: &InputToken);

    /// The text on the display
    fn display(&self) -> String;

    /// The notice currently shown, if any
    fn message(&self) -> Option<String>;

    /// Presses the clear key
    fn clear(&mut self) {
        self.press(&InputToken::Action(Action::Clear));
    }

    /// Presses every whitespace-separated token in `tokens`
    fn press_all(&mut self, tokens: &str) {
        for token in tokens.split_whitespace() {
            self.press(&InputToken::parse(token));
        }
    }
}

/// Driver over a bare calculator with a recording view
#[derive(Debug, Default)]
pub struct RecordingDriver {
    calculator: Calculator<RecordingView>,
}

impl RecordingDriver {
    /// Creates a new driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<RecordingView> {
        &self.calculator
    }
}

impl CalculatorDriver for RecordingDriver {
    fn press(&mut self, token: &InputToken) {
        self.calculator.press(token.clone());
    }

    fn display(&self) -> String {
        self.calculator.view().display().to_string()
    }

    fn message(&self) -> Option<String> {
        self.calculator.view().message().map(str::to_string)
    }
}

// ===== Unified Behaviour Checks =====
// These work with ANY CalculatorDriver implementation

/// Digits typed before an operator show exactly as typed
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("1 2 . 5");
    assert_eq!(driver.display(), "12.5");

    driver.clear();
    driver.press_all("0 0 7");
    assert_eq!(driver.display(), "007");
    driver.clear();
}

/// Multiply and divide resolve before add and subtract
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("3 add 4 multiply 2 calc");
    assert_eq!(driver.display(), "11");

    driver.clear();
    driver.press_all("2 multiply 3 add 4 calc");
    assert_eq!(driver.display(), "10");

    driver.clear();
    driver.press_all("9 subtract 6 divide 3 calc");
    assert_eq!(driver.display(), "7");
    driver.clear();
}

/// The result of `=` becomes the next first operand
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("3 add 4 calc");
    assert_eq!(driver.display(), "7");
    driver.press_all("multiply 2 calc");
    assert_eq!(driver.display(), "14");
    driver.press_all("subtract 4 calc");
    assert_eq!(driver.display(), "10");
    driver.clear();
}

/// Division by zero follows IEEE-754 without a notice
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("8 divide 0 calc");
    assert_eq!(driver.display(), "Infinity");
    assert_eq!(driver.message(), None);
    driver.clear();
}

/// Unsupported keys show a notice and leave the display alone
pub fn verify_unsupported<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("4 2 percent");
    assert_eq!(
        driver.message().as_deref(),
        Some("Sorry, the \"percent\" operation is not yet supported")
    );
    assert_eq!(driver.display(), "42");

    driver.press_all("sign");
    assert_eq!(
        driver.message().as_deref(),
        Some("Sorry, the \"sign\" operation is not yet supported")
    );
    assert_eq!(driver.display(), "42");
    driver.clear();
}

/// Clear resets the display and notice, and is idempotent
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("5 add 5 percent");
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.message(), None);

    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.message(), None);

    driver.press_all("1 add 1 calc");
    assert_eq!(driver.display(), "2");
    driver.clear();
}

/// Runs every behaviour check
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_precedence(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_unsupported(driver);
    verify_clear(driver);
}
