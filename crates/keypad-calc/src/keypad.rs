//! Keypad layout and input dispatch
//!
//! The host decides which input sources are calculator keys: every button
//! is listed here with its element id and the token it produces, and
//! anything not in the table is ignored.

use serde::Serialize;
use tracing::debug;

use crate::core::{Action, InputToken};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyDef {
    /// Element id of the button (`btn-7`, `btn-add`, ...)
    pub id: String,
    /// Text printed on the button
    pub label: String,
    /// Action attribute; digit keys have none
    pub action: Option<String>,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeyDef {
    /// A digit key, contributing its label to the operand
    #[must_use]
    pub fn digit(digit: u8, row: usize, col: usize) -> Self {
        let label = digit.to_string();
        Self {
            id: format!("btn-{label}"),
            label,
            action: None,
            row,
            col,
        }
    }

    /// An action key
    #[must_use]
    pub fn action(action: &str, label: &str, row: usize, col: usize) -> Self {
        Self {
            id: format!("btn-{action}"),
            label: label.to_string(),
            action: Some(action.to_string()),
            row,
            col,
        }
    }

    /// The token a click on this key produces
    #[must_use]
    pub fn token(&self) -> InputToken {
        InputToken::from_key(self.action.as_deref(), &self.label)
    }
}

/// Calculator keypad layout
///
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    keys: Vec<KeyDef>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// The standard four-function keypad
    #[must_use]
    pub fn standard() -> Self {
        let keys = vec![
            KeyDef::action("clear", "C", 0, 0),
            KeyDef::action("sign", "±", 0, 1),
            KeyDef::action("percent", "%", 0, 2),
            KeyDef::action("divide", "÷", 0, 3),
            KeyDef::digit(7, 1, 0),
            KeyDef::digit(8, 1, 1),
            KeyDef::digit(9, 1, 2),
            KeyDef::action("multiply", "×", 1, 3),
            KeyDef::digit(4, 2, 0),
            KeyDef::digit(5, 2, 1),
            KeyDef::digit(6, 2, 2),
            KeyDef::action("subtract", "−", 2, 3),
            KeyDef::digit(1, 3, 0),
            KeyDef::digit(2, 3, 1),
            KeyDef::digit(3, 3, 2),
            KeyDef::action("add", "+", 3, 3),
            KeyDef::digit(0, 4, 0),
            KeyDef::action("decimal", ".", 4, 1),
            KeyDef::action("calc", "=", 4, 2),
        ];

        Self {
            keys,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of keys
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All key definitions in layout order
    #[must_use]
    pub fn keys(&self) -> &[KeyDef] {
        &self.keys
    }

    /// The key at a grid position, if that cell holds one
    #[must_use]
    pub fn key_at(&self, row: usize, col: usize) -> Option<&KeyDef> {
        self.keys.iter().find(|k| k.row == row && k.col == col)
    }

    /// Finds a key by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeyDef> {
        self.keys.iter().find(|k| k.id == id)
    }

    /// Finds the key that produces `token`
    #[must_use]
    pub fn find_by_token(&self, token: &InputToken) -> Option<&KeyDef> {
        self.keys.iter().find(|k| &k.token() == token)
    }

    /// Decodes a click on `element_id`. Ids outside the keypad yield `None`.
    #[must_use]
    pub fn decode(&self, element_id: &str) -> Option<InputToken> {
        let token = self.find_by_id(element_id).map(KeyDef::token);
        match &token {
            Some(token) => debug!(element_id, %token, "key decoded"),
            None => debug!(element_id, "click outside keypad ignored"),
        }
        token
    }

    /// Maps a keyboard key to the token of the matching button
    #[must_use]
    pub fn key_to_token(key: &str) -> Option<InputToken> {
        let name = match key {
            "Enter" => "calc",
            "Escape" | "Delete" => "clear",
            "." | "," => "decimal",
            k if k.len() == 1 && k.chars().all(|c| c.is_ascii_digit()) => {
                return Some(InputToken::digit(k));
            }
            k => Action::alias_name(k)?,
        };
        Some(InputToken::action(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn test_standard_layout_size() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.key_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Keypad::default().keys(), Keypad::standard().keys());
    }

    #[test]
    fn test_digit_key_has_no_action() {
        let key = KeyDef::digit(7, 1, 0);
        assert_eq!(key.id, "btn-7");
        assert_eq!(key.label, "7");
        assert!(key.action.is_none());
        assert_eq!(key.token(), InputToken::digit("7"));
    }

    #[test]
    fn test_action_key_token_ignores_label() {
        let key = KeyDef::action("multiply", "×", 1, 3);
        assert_eq!(key.id, "btn-multiply");
        assert_eq!(key.token(), InputToken::from(Operator::Multiply));
    }

    #[test]
    fn test_decimal_key_is_an_action() {
        let keypad = Keypad::standard();
        assert_eq!(
            keypad.decode("btn-decimal"),
            Some(InputToken::Action(Action::Decimal))
        );
    }

    #[test]
    fn test_decode_every_key() {
        let keypad = Keypad::standard();
        for key in keypad.keys() {
            assert_eq!(keypad.decode(&key.id), Some(key.token()));
        }
    }

    #[test]
    fn test_decode_unknown_id() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.decode("calc-result"), None);
        assert_eq!(keypad.decode(""), None);
    }

    #[test]
    fn test_unsupported_keys_present() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.decode("btn-sign"), Some(InputToken::action("sign")));
        assert_eq!(
            keypad.decode("btn-percent"),
            Some(InputToken::action("percent"))
        );
    }

    #[test]
    fn test_key_at() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.key_at(0, 0).map(|k| k.id.as_str()), Some("btn-clear"));
        assert_eq!(keypad.key_at(4, 2).map(|k| k.id.as_str()), Some("btn-calc"));
        assert!(keypad.key_at(4, 3).is_none());
        assert!(keypad.key_at(9, 9).is_none());
    }

    #[test]
    fn test_find_by_token() {
        let keypad = Keypad::standard();
        let key = keypad.find_by_token(&InputToken::digit("5")).unwrap();
        assert_eq!(key.id, "btn-5");
        let key = keypad.find_by_token(&InputToken::parse("=")).unwrap();
        assert_eq!(key.id, "btn-calc");
        assert!(keypad.find_by_token(&InputToken::digit("55")).is_none());
    }

    #[test]
    fn test_key_to_token() {
        assert_eq!(Keypad::key_to_token("7"), Some(InputToken::digit("7")));
        assert_eq!(Keypad::key_to_token("Enter"), Some(InputToken::action("calc")));
        assert_eq!(Keypad::key_to_token("Escape"), Some(InputToken::action("clear")));
        assert_eq!(Keypad::key_to_token("*"), Some(InputToken::action("multiply")));
        assert_eq!(Keypad::key_to_token("="), Some(InputToken::action("calc")));
        assert_eq!(Keypad::key_to_token("c"), Some(InputToken::action("clear")));
        assert_eq!(Keypad::key_to_token("%"), Some(InputToken::action("percent")));
        assert_eq!(Keypad::key_to_token("ArrowUp"), None);
    }

    #[test]
    fn test_key_defs_serialize() {
        let json = serde_json::to_string(&KeyDef::digit(1, 3, 0)).unwrap();
        assert!(json.contains(r#""id":"btn-1""#));
        assert!(json.contains(r#""action":null"#));
    }
}
