//! Web host for the calculator
//!
//! A mock DOM page with its view adapter and click driver, always available
//! for testing, plus the real browser bindings behind the `wasm` feature.
//!
//! Balanced testing: the page runs the same behaviour checks as the bare core.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod view;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, BrowserView};
pub use dom::{
    DomElement, DomEvent, MockDom, KEYPAD_ID, MAX_EVENT_HISTORY, NOTICES_ID, RESULT_ID,
};
pub use driver::DomDriver;
pub use view::DomView;
