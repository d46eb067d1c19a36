//! DOM Driver - clicks keypad buttons on the mock page
//!
//! Implements [`CalculatorDriver`] so the unified behaviour checks also run
//! through element ids, the keypad table and the DOM view.

use tracing::debug;

use super::dom::{DomEvent, MockDom};
use super::view::DomView;
use crate::core::{Action, Calculator, InputToken};
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;

/// Driver wrapping the calculator page
#[derive(Debug)]
pub struct DomDriver {
    calculator: Calculator<DomView>,
    keypad: Keypad,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a driver over the standard keypad page
    #[must_use]
    pub fn new() -> Self {
        Self::with_keypad(Keypad::standard())
    }

    /// Creates a driver over a page built from `keypad`
    #[must_use]
    pub fn with_keypad(keypad: Keypad) -> Self {
        let dom = MockDom::calculator(&keypad);
        Self {
            calculator: Calculator::new(DomView::new(dom)),
            keypad,
        }
    }

    /// The calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<DomView> {
        &self.calculator
    }

    /// The page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.calculator.view().dom()
    }

    /// The keypad table
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Clicks an element. Returns `false` if it is not a keypad button.
    pub fn click(&mut self, element_id: &str) -> bool {
        self.calculator
            .view_mut()
            .dom_mut()
            .dispatch_event(DomEvent::click(element_id));
        match self.keypad.decode(element_id) {
            Some(token) => {
                self.calculator.press(token);
                true
            }
            None => false,
        }
    }

    /// Presses a keyboard key. Returns `false` if no button matches.
    pub fn key_press(&mut self, key: &str) -> bool {
        self.calculator
            .view_mut()
            .dom_mut()
            .dispatch_event(DomEvent::key_press(key));
        match Keypad::key_to_token(key) {
            Some(token) => {
                self.calculator.press(token);
                true
            }
            None => false,
        }
    }

    /// Button ids that enter `token`, or `None` if the keypad cannot enter it
    fn key_ids_for(&self, token: &InputToken) -> Option<Vec<String>> {
        match token {
            InputToken::Digit(text) => text
                .chars()
                .map(|c| {
                    let key_token = if c == '.' {
                        InputToken::Action(Action::Decimal)
                    } else {
                        InputToken::Digit(c.to_string())
                    };
                    self.keypad.find_by_token(&key_token).map(|k| k.id.clone())
                })
                .collect(),
            InputToken::Action(_) => self
                .keypad
                .find_by_token(token)
                .map(|k| vec![k.id.clone()]),
        }
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, token: &InputToken) {
        if let Some(ids) = self.key_ids_for(token) {
            for id in ids {
                self.click(&id);
            }
        } else {
            debug!(%token, "no button for token, pressing directly");
            self.calculator.press(token.clone());
        }
    }

    fn display(&self) -> String {
        self.calculator
            .view()
            .result_text()
            .unwrap_or_default()
            .to_string()
    }

    fn message(&self) -> Option<String> {
        self.calculator.view().current_notice().map(str::to_string)
    }
}
