//! Mock DOM for the calculator page
//!
//! Lets the click → token → calculator → view loop run without a browser.
//!
//! Visual feedback: page state is observable element by element.

use std::collections::HashMap;

use crate::keypad::Keypad;

/// Element id of the result display
pub const RESULT_ID: &str = "calc-result";
/// Element id of the notification list
pub const NOTICES_ID: &str = "calc-notices";
/// Element id of the keypad container
pub const KEYPAD_ID: &str = "calc-keypad";
/// Events kept in the history; older ones are dropped first
pub const MAX_EVENT_HISTORY: usize = 256;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press on the page
    KeyPress {
        /// The key that was pressed
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }
}

/// Mock DOM holding the calculator page
#[derive(Debug)]
pub struct MockDom {
    /// Elements by ID, the single source of page state
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Builds the calculator page: display, notices and one button per key
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        let result = DomElement::new("span")
            .with_id(RESULT_ID)
            .with_class("calc-result")
            .with_text("0");
        let notices = DomElement::new("ul")
            .with_id(NOTICES_ID)
            .with_class("notices");

        let buttons: Vec<DomElement> = keypad
            .keys()
            .iter()
            .map(|key| {
                let mut button = DomElement::new("a")
                    .with_id(&key.id)
                    .with_text(&key.label)
                    .with_class("calc-key")
                    .with_class(&format!("row-{}", key.row))
                    .with_class(&format!("col-{}", key.col));
                if let Some(action) = &key.action {
                    button = button.with_attr("data-action", action);
                }
                button
            })
            .collect();

        let mut keypad_elem = DomElement::new("div")
            .with_id(KEYPAD_ID)
            .with_class("keypad");
        for button in &buttons {
            keypad_elem = keypad_elem.with_child(button.clone());
        }

        dom.register_element(result);
        dom.register_element(notices);
        dom.register_element(keypad_elem);
        for button in buttons {
            dom.register_element(button);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Records an event in the history, dropping the oldest past the cap
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if self.event_history.len() >= MAX_EVENT_HISTORY {
            self.event_history.remove(0);
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Adds a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        let child_id = child.id.clone();
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        if !child_id.is_empty() {
            self.elements.insert(child_id, child);
        }
    }

    /// Clears children of an element
    pub fn clear_children(&mut self, id: &str) {
        let child_ids: Vec<String> = self
            .elements
            .get(id)
            .map(|elem| {
                elem.children
                    .iter()
                    .filter(|c| !c.id.is_empty())
                    .map(|c| c.id.clone())
                    .collect()
            })
            .unwrap_or_default();

        for child_id in child_ids {
            self.elements.remove(&child_id);
        }

        if let Some(elem) = self.elements.get_mut(id) {
            elem.children.clear();
        }
    }

    /// Number of children of an element (0 if missing)
    #[must_use]
    pub fn child_count(&self, id: &str) -> usize {
        self.elements.get(id).map_or(0, |e| e.children.len())
    }
}
