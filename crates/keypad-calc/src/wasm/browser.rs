//! Browser WASM bindings for the calculator
//!
//! The page keeps its own click listener and forwards each key element to
//! [`BrowserCalculator::handle_key`] or [`BrowserCalculator::handle_click`];
//! rendering goes straight to page elements through `web-sys`.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::{console, Element};

use crate::core::{Calculator, InputToken};
use crate::keypad::Keypad;
use crate::view::CalculatorView;

/// View writing into live page elements
#[derive(Debug)]
pub struct BrowserView {
    result: Element,
    notice: Option<Element>,
}

impl BrowserView {
    /// Creates a view over the result element and an optional notice element
    #[must_use]
    pub fn new(result: Element, notice: Option<Element>) -> Self {
        Self { result, notice }
    }
}

impl CalculatorView for BrowserView {
    fn render_result(&mut self, display: &str) {
        self.result.set_text_content(Some(display));
    }

    fn show_message(&mut self, text: &str) {
        if let Some(notice) = &self.notice {
            notice.set_text_content(Some(text));
        }
        if !text.is_empty() {
            console::warn_1(&text.into());
        }
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator<BrowserView>,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds a calculator to the elements matching the given selectors
    #[wasm_bindgen(constructor)]
    pub fn new(
        result_selector: &str,
        notice_selector: Option<String>,
    ) -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let result = document.query_selector(result_selector)?.ok_or_else(|| {
            JsValue::from_str(&format!("no element matches {result_selector}"))
        })?;
        let notice = match notice_selector {
            Some(selector) => document.query_selector(&selector)?,
            None => None,
        };

        Ok(Self {
            calculator: Calculator::new(BrowserView::new(result, notice)),
            keypad: Keypad::standard(),
        })
    }

    /// The text on the display
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    /// Handles a key element: its `data-action` attribute (if any) and text
    pub fn handle_key(&mut self, action: Option<String>, text: &str) {
        let token = InputToken::from_key(action.as_deref(), text);
        console::log_1(&format!("key: {token}").into());
        self.calculator.press(token);
    }

    /// Handles a click on an element id. Returns `false` for non-keys.
    pub fn handle_click(&mut self, element_id: &str) -> bool {
        match self.keypad.decode(element_id) {
            Some(token) => {
                self.calculator.press(token);
                true
            }
            None => false,
        }
    }

    /// Handles a keyboard key. Returns `false` if no button matches.
    pub fn handle_keyboard(&mut self, key: &str) -> bool {
        match Keypad::key_to_token(key) {
            Some(token) => {
                self.calculator.press(token);
                true
            }
            None => false,
        }
    }

    /// Resets the calculator
    pub fn clear(&mut self) {
        self.calculator.clear();
    }
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"keypad calculator initialized".into());
}
