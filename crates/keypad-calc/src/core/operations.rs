//! Keypad operators, actions and input tokens
//!
//! Error prevention: every key press decodes into a closed set of tokens,
//! so the state machine never sees a stringly-typed action.

use std::fmt;

/// The four arithmetic operators on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the action name used by keypad buttons
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// True for multiply and divide, which resolve before add and subtract
    #[must_use]
    pub const fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Applies the operator with plain IEEE-754 semantics.
    ///
    /// Division by zero is not guarded: `8 / 0` is `inf`, `0 / 0` is `NaN`.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A named keypad action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reset all state and show "0"
    Clear,
    /// Append a decimal point to the active operand
    Decimal,
    /// Resolve every pending operator (the "calc" key)
    Equals,
    /// Commit the operand and record an operator
    Operator(Operator),
    /// Sign toggle (not supported)
    Sign,
    /// Percent (not supported)
    Percent,
    /// Any action name the calculator does not know
    Unsupported(String),
}

impl Action {
    /// Decodes a keypad action name.
    ///
    /// Only the nine keypad names are recognised. Anything else, symbols
    /// included, becomes [`Action::Unsupported`] carrying the name as given.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "clear" => Self::Clear,
            "decimal" => Self::Decimal,
            "calc" => Self::Equals,
            "add" => Self::Operator(Operator::Add),
            "subtract" => Self::Operator(Operator::Subtract),
            "multiply" => Self::Operator(Operator::Multiply),
            "divide" => Self::Operator(Operator::Divide),
            "sign" => Self::Sign,
            "percent" => Self::Percent,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Maps a typed symbol (`=`, `+`, `x`, ...) to its keypad action name
    #[must_use]
    pub fn alias_name(symbol: &str) -> Option<&'static str> {
        let name = match symbol {
            "=" => "calc",
            "c" | "C" => "clear",
            "+" => "add",
            "-" => "subtract",
            "*" | "x" => "multiply",
            "/" => "divide",
            "%" => "percent",
            _ => return None,
        };
        Some(name)
    }

    /// Returns the canonical action name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Clear => "clear",
            Self::Decimal => "decimal",
            Self::Equals => "calc",
            Self::Operator(op) => op.name(),
            Self::Sign => "sign",
            Self::Percent => "percent",
            Self::Unsupported(name) => name,
        }
    }

}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputToken {
    /// Digit characters (or a decimal point) to append to the operand
    Digit(String),
    /// A named action
    Action(Action),
}

impl InputToken {
    /// Decodes a key the way the page does: a key carrying an action
    /// attribute is an action, any other key contributes its text.
    #[must_use]
    pub fn from_key(action: Option<&str>, text: &str) -> Self {
        match action {
            Some(name) if !name.is_empty() => Self::Action(Action::from_name(name)),
            _ => Self::Digit(text.to_string()),
        }
    }

    /// Decodes a free-form typed token.
    ///
    /// A lone `.` is the decimal action, a run of digits and points is a digit
    /// token, a symbol alias maps to its action, anything else is treated as
    /// an action name.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token == "." {
            return Self::Action(Action::Decimal);
        }
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Self::Digit(token.to_string());
        }
        Self::Action(Action::from_name(Action::alias_name(token).unwrap_or(token)))
    }

    /// Shorthand for a digit token
    #[must_use]
    pub fn digit(text: &str) -> Self {
        Self::Digit(text.to_string())
    }

    /// Shorthand for an action token
    #[must_use]
    pub fn action(name: &str) -> Self {
        Self::Action(Action::from_name(name))
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(text) => f.write_str(text),
            Self::Action(action) => f.write_str(action.name()),
        }
    }
}

impl From<Action> for InputToken {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Operator> for InputToken {
    fn from(op: Operator) -> Self {
        Self::Action(Action::Operator(op))
    }
}
