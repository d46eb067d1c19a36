//! View capability consumed by the calculator
//!
//! Visual feedback: the calculator pushes every display change through this
//! trait and never reads back from it, so any sink (DOM, terminal, recorder)
//! can be swapped in.

use serde::{Deserialize, Serialize};

/// Output sink for the calculator
pub trait CalculatorView {
    /// Shows the current operand or a computed result
    fn render_result(&mut self, display: &str);

    /// Surfaces a transient notice. An empty `text` dismisses the current one.
    fn show_message(&mut self, text: &str);
}

impl<V: CalculatorView + ?Sized> CalculatorView for &mut V {
    fn render_result(&mut self, display: &str) {
        (**self).render_result(display);
    }

    fn show_message(&mut self, text: &str) {
        (**self).show_message(text);
    }
}

impl<V: CalculatorView + ?Sized> CalculatorView for Box<V> {
    fn render_result(&mut self, display: &str) {
        (**self).render_result(display);
    }

    fn show_message(&mut self, text: &str) {
        (**self).show_message(text);
    }
}

/// One call made on a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ViewEvent {
    /// `render_result` was called
    Render(String),
    /// `show_message` was called
    Message(String),
}

/// View that records every call and keeps the latest state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
    display: String,
    message: Option<String>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingView {
    /// Creates an empty recorder showing "0"
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            display: "0".to_string(),
            message: None,
        }
    }

    /// All recorded calls, oldest first
    #[must_use]
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// The last rendered display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The notice currently shown, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Every non-empty notice shown so far
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Message(text) if !text.is_empty() => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl CalculatorView for RecordingView {
    fn render_result(&mut self, display: &str) {
        self.display = display.to_string();
        self.events.push(ViewEvent::Render(display.to_string()));
    }

    fn show_message(&mut self, text: &str) {
        self.message = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self.events.push(ViewEvent::Message(text.to_string()));
    }
}
