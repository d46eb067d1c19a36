//! Operator-chaining state machine
//!
//! Precedence-aware chaining: add/subtract and multiply/divide each keep their
//! own running total, so a pending multiply or divide is folded into the
//! operand before the pending add or subtract sees it. `3 + 4 * 2 =` is `11`.

use tracing::debug;

use super::numeric::{format_number, parse_operand};
use super::operations::{Action, InputToken, Operator};
use super::{CalcError, CalcResult};
use crate::view::CalculatorView;

/// The operand currently held by the calculator
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Characters typed by the user
    Typed(String),
    /// Result of the last `=`, reused as the next first operand
    Carried(f64),
}

impl Operand {
    /// Numeric value of the operand
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Typed(text) => parse_operand(text),
            Self::Carried(value) => *value,
        }
    }

    /// Text shown on the display for this operand
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Typed(text) => text.clone(),
            Self::Carried(value) => format_number(*value),
        }
    }

    /// Appends typed input.
    ///
    /// A carried `0` or `NaN` is replaced rather than extended, any other
    /// carried result is extended as text (`7` then `5` gives `75`).
    #[must_use]
    pub fn append(self, input: &str) -> Self {
        match self {
            Self::Typed(mut text) => {
                text.push_str(input);
                Self::Typed(text)
            }
            Self::Carried(value) if value == 0.0 || value.is_nan() => {
                Self::Typed(input.to_string())
            }
            Self::Carried(value) => Self::Typed(format_number(value) + input),
        }
    }
}

/// An operator waiting for its second operand, with the total it applies to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    /// Running total on the left of the operator
    pub total: f64,
    /// The pending operator
    pub operator: Operator,
}

impl PendingOperation {
    /// Applies the pending operator to `rhs`
    #[must_use]
    pub fn resolve(&self, rhs: f64) -> f64 {
        self.operator.apply(self.total, rhs)
    }
}

/// Arithmetic state of the calculator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    /// Operand being typed (or carried from the last result)
    pub operand: Option<Operand>,
    /// Pending add or subtract
    pub additive: Option<PendingOperation>,
    /// Pending multiply or divide
    pub multiplicative: Option<PendingOperation>,
}

impl CalculatorState {
    /// True when an operator is waiting for a second operand
    #[must_use]
    pub fn has_pending_operator(&self) -> bool {
        self.additive.is_some() || self.multiplicative.is_some()
    }

    /// True when nothing has been entered since the last reset
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operand.is_none() && !self.has_pending_operator()
    }

    /// Consumes the operand buffer. A missing operand reads as `NaN`.
    fn take_operand(&mut self) -> f64 {
        self.operand.take().map_or(f64::NAN, |operand| operand.value())
    }

    /// Folds a pending multiply/divide into `n`
    fn fold_multiplicative(&mut self, n: f64) -> f64 {
        self.multiplicative
            .take()
            .map_or(n, |pending| pending.resolve(n))
    }

    /// Folds every pending operator into `n`, lowest tier last
    fn fold_all(&mut self, n: f64) -> f64 {
        let n = self.fold_multiplicative(n);
        self.additive.take().map_or(n, |pending| pending.resolve(n))
    }

    /// Commits the operand and records `operator` as pending
    fn push_operator(&mut self, operator: Operator) {
        let n = self.take_operand();
        let total = if operator.is_multiplicative() {
            self.fold_multiplicative(n)
        } else {
            self.fold_all(n)
        };
        let pending = Some(PendingOperation { total, operator });
        if operator.is_multiplicative() {
            self.multiplicative = pending;
        } else {
            self.additive = pending;
        }
    }

    /// Resolves everything and re-seeds the state with the result
    fn evaluate(&mut self) -> f64 {
        let n = self.take_operand();
        let result = self.fold_all(n);
        *self = Self {
            operand: Some(Operand::Carried(result)),
            ..Self::default()
        };
        result
    }
}

/// Keypad calculator driving an injected view
#[derive(Debug)]
pub struct Calculator<V> {
    view: V,
    state: CalculatorState,
    display: String,
}

impl<V: CalculatorView + Default> Default for Calculator<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: CalculatorView> Calculator<V> {
    /// Creates a calculator rendering into `view`. The display starts at "0".
    #[must_use]
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: CalculatorState::default(),
            display: "0".to_string(),
        }
    }

    /// The arithmetic state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The last string sent to `render_result`
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The injected view
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the injected view
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consumes the calculator, returning its view
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Dispatches a decoded key press
    pub fn press(&mut self, token: InputToken) {
        match token {
            InputToken::Digit(text) => self.append_digit(&text),
            InputToken::Action(action) => self.apply_action(action),
        }
    }

    /// Appends digits (or a decimal point) to the active operand.
    ///
    /// Repeated decimal points are accepted as typed.
    pub fn append_digit(&mut self, input: &str) {
        debug!(input, "append digit");
        let operand = match self.state.operand.take() {
            Some(operand) => operand.append(input),
            None => Operand::Typed(input.to_string()),
        };
        let text = operand.text();
        self.state.operand = Some(operand);
        self.render(&text);
    }

    /// Applies a named action. Unsupported actions surface a notice.
    pub fn apply_action(&mut self, action: Action) {
        debug!(action = %action, "apply action");
        if let Err(err) = self.dispatch(action) {
            self.reject(&err);
        }
    }

    /// Resets all state, shows "0" and dismisses any notice
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        self.render("0");
        self.view.show_message("");
    }

    fn dispatch(&mut self, action: Action) -> CalcResult<()> {
        match action {
            Action::Clear => self.clear(),
            Action::Decimal => self.append_digit("."),
            Action::Operator(operator) => self.state.push_operator(operator),
            Action::Equals => {
                let result = self.state.evaluate();
                debug!(result, "evaluated");
                self.render(&format_number(result));
            }
            Action::Sign | Action::Percent | Action::Unsupported(_) => {
                return Err(CalcError::unsupported(action.name()));
            }
        }
        Ok(())
    }

    /// Shows the notice for `err` and drops a half-entered operation
    fn reject(&mut self, err: &CalcError) {
        debug!(error = %err, "rejected action");
        if self.state.has_pending_operator() {
            self.state = CalculatorState::default();
        }
        self.view.show_message(&err.to_string());
    }

    fn render(&mut self, display: &str) {
        display.clone_into(&mut self.display);
        self.view.render_result(display);
    }
}
