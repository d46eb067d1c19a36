//! Property-based tests for the keypad and the chaining state machine
//!
//! Error prevention: property tests catch edge cases that humans miss

use proptest::prelude::*;
use keypad_calc::prelude::*;

// ===== Strategy definitions =====

/// Any single digit key
fn digit_strategy() -> impl Strategy<Value = String> {
    (0u8..=9u8).prop_map(|d| d.to_string())
}

/// Any key a user can press, including unsupported ones
fn token_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "add", "subtract", "multiply",
        "divide", "calc", "clear", "sign", "percent", "sqrt",
    ])
}

/// A session of key presses
fn session_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(token_strategy(), 0..40)
}

fn run(tokens: &[&str]) -> Calculator<RecordingView> {
    let mut calc = Calculator::new(RecordingView::new());
    for token in tokens {
        calc.press(InputToken::parse(token));
    }
    calc
}

// ===== Digit entry =====

proptest! {
    /// Digits typed before any operator render as the exact accumulated string
    #[test]
    fn prop_digit_entry_renders_verbatim(
        keys in prop::collection::vec(prop_oneof![digit_strategy(), Just(".".to_string())], 1..20)
    ) {
        let mut calc = Calculator::new(RecordingView::new());
        for key in &keys {
            calc.press(InputToken::parse(key));
        }
        prop_assert_eq!(calc.display(), keys.concat());
        prop_assert_eq!(calc.view().display(), keys.concat());
    }
}

// ===== Clear =====

proptest! {
    /// Clear always shows "0", dismisses the notice and empties the state
    #[test]
    fn prop_clear_resets(session in session_strategy()) {
        let mut calc = run(&session);
        calc.apply_action(Action::Clear);
        prop_assert_eq!(calc.display(), "0");
        prop_assert!(calc.view().message().is_none());
        prop_assert!(calc.state().is_empty());
    }

    /// Clearing twice is the same as clearing once
    #[test]
    fn prop_clear_idempotent(session in session_strategy()) {
        let mut once = run(&session);
        once.apply_action(Action::Clear);
        let mut twice = run(&session);
        twice.apply_action(Action::Clear);
        twice.apply_action(Action::Clear);
        prop_assert_eq!(once.state(), twice.state());
        prop_assert_eq!(once.display(), twice.display());
        prop_assert_eq!(once.view().message(), twice.view().message());
    }
}

// ===== Unsupported =====

proptest! {
    /// Unsupported keys never touch the display
    #[test]
    fn prop_unsupported_leaves_display(
        session in session_strategy(),
        name in prop::sample::select(vec!["sign", "percent", "sqrt", "mod"]),
    ) {
        let mut calc = run(&session);
        let before = calc.display().to_string();
        calc.press(InputToken::action(name));
        prop_assert_eq!(calc.display(), before.as_str());
        let expected = format!("Sorry, the \"{name}\" operation is not yet supported");
        prop_assert_eq!(calc.view().message(), Some(expected.as_str()));
    }

    /// After an unsupported key no operator is left pending
    #[test]
    fn prop_unsupported_drops_pending_operator(session in session_strategy()) {
        let mut calc = run(&session);
        calc.apply_action(Action::Percent);
        prop_assert!(!calc.state().has_pending_operator());
    }
}

// ===== Arithmetic =====

proptest! {
    /// Multiply resolves before add
    #[test]
    fn prop_multiply_before_add(a in 0u32..10_000, b in 0u32..10_000, c in 0u32..10_000) {
        let session = format!("{a} add {b} multiply {c} calc");
        let tokens: Vec<&str> = session.split_whitespace().collect();
        let calc = run(&tokens);
        let expected = f64::from(a) + f64::from(b) * f64::from(c);
        prop_assert_eq!(calc.display(), format_number(expected));
    }

    /// Subtractions chain left to right
    #[test]
    fn prop_subtract_left_to_right(a in 0u32..10_000, b in 0u32..10_000, c in 0u32..10_000) {
        let session = format!("{a} subtract {b} subtract {c} calc");
        let tokens: Vec<&str> = session.split_whitespace().collect();
        let calc = run(&tokens);
        let expected = f64::from(a) - f64::from(b) - f64::from(c);
        prop_assert_eq!(calc.display(), format_number(expected));
    }

    /// The result of `=` is the first operand of the next operation
    #[test]
    fn prop_result_chains(a in 1u32..1_000, b in 1u32..1_000, c in 1u32..1_000) {
        let session = format!("{a} add {b} calc multiply {c} calc");
        let tokens: Vec<&str> = session.split_whitespace().collect();
        let calc = run(&tokens);
        let expected = (f64::from(a) + f64::from(b)) * f64::from(c);
        prop_assert_eq!(calc.display(), format_number(expected));
    }

    /// Dividing a non-zero number by zero shows Infinity
    #[test]
    fn prop_divide_by_zero(a in 1u32..1_000_000) {
        let session = format!("{a} divide 0 calc");
        let tokens: Vec<&str> = session.split_whitespace().collect();
        let calc = run(&tokens);
        prop_assert_eq!(calc.display(), "Infinity");
    }
}

// ===== Hosts =====

proptest! {
    /// The mock DOM page and the bare calculator always agree
    #[test]
    fn prop_dom_driver_matches_bare_calculator(session in session_strategy()) {
        let mut bare = RecordingDriver::new();
        let mut page = DomDriver::new();
        for token in &session {
            let token = InputToken::parse(token);
            bare.press(&token);
            page.press(&token);
        }
        prop_assert_eq!(bare.display(), page.display());
        prop_assert_eq!(bare.message(), page.message());
    }

    /// Digit keys on the keyboard map to digit tokens
    #[test]
    fn prop_digit_keys_map_to_digits(d in digit_strategy()) {
        prop_assert_eq!(Keypad::key_to_token(&d), Some(InputToken::Digit(d.clone())));
    }

    /// Multi-character names that are not special keys map to nothing
    #[test]
    fn prop_unknown_keys_map_to_none(key in "[a-z]{2,10}") {
        prop_assert!(Keypad::key_to_token(&key).is_none());
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_keypad_ids_unique() {
    let keypad = Keypad::standard();
    let mut ids = std::collections::HashSet::new();
    for key in keypad.keys() {
        assert!(ids.insert(key.id.clone()), "Duplicate ID: {}", key.id);
    }
}

#[test]
fn invariant_keypad_positions_unique_and_in_grid() {
    let keypad = Keypad::standard();
    let (rows, cols) = keypad.dimensions();
    let mut positions = std::collections::HashSet::new();
    for key in keypad.keys() {
        assert!(key.row < rows && key.col < cols, "{} outside grid", key.id);
        assert!(positions.insert((key.row, key.col)), "Duplicate position");
        assert_eq!(keypad.key_at(key.row, key.col), Some(key));
    }
}

#[test]
fn invariant_keypad_has_all_digits() {
    let keypad = Keypad::standard();
    for d in 0..=9 {
        let token = InputToken::Digit(d.to_string());
        assert!(keypad.find_by_token(&token).is_some(), "Missing digit {d}");
    }
}

#[test]
fn invariant_keypad_has_every_named_action() {
    let keypad = Keypad::standard();
    for name in [
        "clear", "decimal", "calc", "add", "subtract", "multiply", "divide", "sign", "percent",
    ] {
        assert!(
            keypad.find_by_id(&format!("btn-{name}")).is_some(),
            "Missing action {name}"
        );
    }
}
