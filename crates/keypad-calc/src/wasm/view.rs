//! View adapter writing into the mock DOM

use super::dom::{DomElement, MockDom, NOTICES_ID, RESULT_ID};
use crate::view::CalculatorView;

/// Renders the display into `calc-result` and the current notice into `calc-notices`
///
/// Only the latest notice stays on the page; a new one replaces it.
#[derive(Debug)]
pub struct DomView {
    dom: MockDom,
    notices_shown: usize,
}

impl DomView {
    /// Wraps a page built with [`MockDom::calculator`]
    #[must_use]
    pub fn new(dom: MockDom) -> Self {
        Self {
            dom,
            notices_shown: 0,
        }
    }

    /// The underlying DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Mutable access to the underlying DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Text of the result element
    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        self.dom.get_element_text(RESULT_ID)
    }

    /// The notice on screen, if any
    #[must_use]
    pub fn current_notice(&self) -> Option<&str> {
        self.dom
            .get_element(NOTICES_ID)
            .and_then(|list| list.children.last())
            .map(|n| n.text_content.as_str())
    }
}

impl CalculatorView for DomView {
    fn render_result(&mut self, display: &str) {
        self.dom.set_element_text(RESULT_ID, display);
    }

    fn show_message(&mut self, text: &str) {
        self.dom.clear_children(NOTICES_ID);
        if text.is_empty() {
            return;
        }
        self.notices_shown += 1;
        let notice = DomElement::new("li")
            .with_id(&format!("notice-{}", self.notices_shown))
            .with_class("notice")
            .with_text(text);
        self.dom.append_child(NOTICES_ID, notice);
    }
}
